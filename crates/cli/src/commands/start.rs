use std::path::PathBuf;

use authgate_core::{authgate_info, start};

use crate::commands::error::ProjectStartupError;

pub async fn handle_start(project_path: &PathBuf) -> Result<(), ProjectStartupError> {
    authgate_info!("Loading from path {:?}", project_path);
    let authgate_yaml_path = project_path.join("authgate.yaml");
    if !authgate_yaml_path.exists() {
        return Err(ProjectStartupError::NotInitialized(
            "Not in an authgate project directory. Please run this command from your project root."
                .to_string(),
        ));
    }

    authgate_info!("Starting the basic auth demo server...");

    start(project_path).await?;

    Ok(())
}
