use std::{fs, path::Path};

use authgate_core::{ApiConfig, SetupConfig};
use dialoguer::Input;

use crate::{commands::error::InitError, print_success_message};

/// The pair the demo page pre-computes its Authorization header from. A
/// scaffolded project starts with it so the page works out of the box; the
/// .env is where it gets swapped once the demo has served its purpose.
const DEMO_USERNAME: &str = "tom";
const DEMO_PASSWORD: &str = "1234";

fn write_gitignore(path: &Path) -> Result<(), std::io::Error> {
    fs::write(path.join(".gitignore"), ".env\n")
}

pub async fn handle_init(path: &Path) -> Result<(), InitError> {
    let project_name: String = Input::new().with_prompt("Enter project name").interact_text()?;

    let project_description: String = Input::new()
        .with_prompt("Enter project description (skip by pressing Enter)")
        .allow_empty(true)
        .interact_text()?;

    let project_path = path.join(&project_name);

    fs::create_dir(&project_path)?;

    let yaml_content: SetupConfig = SetupConfig {
        name: project_name.clone(),
        description: if !project_description.is_empty() { Some(project_description) } else { None },
        api_config: ApiConfig {
            host: None,
            port: 8080,
            allowed_origins: None,
            authentication_username: "${AUTHGATE_AUTH_USERNAME}".to_string(),
            authentication_password: "${AUTHGATE_AUTH_PASSWORD}".to_string(),
        },
    };
    fs::write(project_path.join("authgate.yaml"), serde_yaml::to_string(&yaml_content)?)?;

    let env = format!(
        "AUTHGATE_AUTH_USERNAME={}\nAUTHGATE_AUTH_PASSWORD={}\n",
        DEMO_USERNAME, DEMO_PASSWORD
    );
    fs::write(project_path.join(".env"), env)?;

    write_gitignore(&project_path)?;

    print_success_message(&format!(
        "\nProject '{}' initialized successfully! It starts with the demo credential pair {}/{} so the demo page buttons line up; replace AUTHGATE_AUTH_USERNAME and AUTHGATE_AUTH_PASSWORD in the .env to change it.",
        project_name, DEMO_USERNAME, DEMO_PASSWORD
    ));

    Ok(())
}
