use thiserror::Error;

/// Errors that can occur while scaffolding a new project
#[derive(Error, Debug)]
pub enum InitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Terminal interaction failed: {0}")]
    Terminal(#[from] dialoguer::Error),
}

/// Errors that can occur during project startup
#[derive(Error, Debug)]
pub enum ProjectStartupError {
    #[error("Project not initialized: {0}")]
    NotInitialized(String),

    #[error("Core startup error: {0}")]
    CoreStartup(#[from] authgate_core::StartError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
