use thiserror::Error;

use crate::commands::error::{InitError, ProjectStartupError};

/// Top-level CLI error that composes all module-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    // Module-specific errors
    #[error("Initialization error: {0}")]
    Init(#[from] InitError),

    #[error("Project startup error: {0}")]
    ProjectStartup(#[from] ProjectStartupError),

    // Generic/fallback errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

// Convert string errors
impl From<String> for CliError {
    fn from(err: String) -> Self {
        CliError::Internal(err)
    }
}

impl From<&str> for CliError {
    fn from(err: &str) -> Self {
        CliError::Internal(err.to_string())
    }
}
