mod settings;

pub use settings::{Config, ContextSettings, GitSettings, Settings};
