//! Session descriptor received from Claude Code on stdin.

mod descriptor;
mod model;
mod project;

pub use descriptor::{
    read_descriptor, ContextWindowInfo, CostInfo, ModelInfo, SessionDescriptor, WorkspaceInfo,
    DEFAULT_CONTEXT_WINDOW_SIZE,
};
pub use model::ModelFamily;
pub use project::project_name;
