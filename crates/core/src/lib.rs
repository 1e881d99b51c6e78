mod app_state;
pub use app_state::AppState;
pub mod authentication;
pub use authentication::{
    evaluate, AuthChallenge, AuthResult, AuthenticatedUser, BasicAuthCredentials, BasicAuthError,
};
pub mod data;
mod demo;
mod environment;
pub use environment::load_env_from_project_path;
mod logger;
pub use logger::{setup_info_logger, setup_logger};
mod startup;
pub use startup::{build_router, start, StartApiError, StartError};
mod yaml;
pub use yaml::{read, ApiConfig, ReadYamlError, SetupConfig};

pub use tracing::{error as authgate_error, info as authgate_info};
