use std::path::Path;

use super::descriptor::SessionDescriptor;

/// Display name of the project the session runs in.
///
/// Prefers the workspace project directory, then the descriptor's `cwd`,
/// then `fallback_cwd` (the process working directory). The name is the
/// final path segment; a path without one (e.g. `/`) is shown as given.
pub fn project_name(descriptor: Option<&SessionDescriptor>, fallback_cwd: &Path) -> String {
    let dir = descriptor
        .and_then(|d| d.project_dir().or_else(|| d.cwd()))
        .map(Path::new)
        .unwrap_or(fallback_cwd);

    match dir.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => dir.to_string_lossy().into_owned(),
    }
}
