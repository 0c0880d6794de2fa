//! Error types for the plugin library

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Registered commands {registered:?} do not match declared commands {declared:?}")]
    RegistryMismatch {
        declared: Vec<String>,
        registered: Vec<String>,
    },

    #[error("Console write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
