use std::{env, fs::File, io::Read, path::PathBuf};

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub host: Option<String>,
    pub port: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub allowed_origins: Option<Vec<String>>,
    pub authentication_username: String,
    pub authentication_password: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SetupConfig {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    pub api_config: ApiConfig,
}

/// Substitutes environment variables in YAML content.
///
/// Every `${VAR}` placeholder is resolved before parsing. An unset variable
/// is a startup error rather than a silent default, so the check runs first
/// and the replacement only happens once every placeholder resolves.
fn substitute_env_variables(contents: &str) -> Result<String, ReadYamlError> {
    let re = Regex::new(r"\$\{([^}]+)\}")?;

    for caps in re.captures_iter(contents) {
        let var_name = &caps[1];
        if env::var(var_name).is_err() {
            return Err(ReadYamlError::EnvironmentVariableNotFound(var_name.to_string()));
        }
    }

    let result = re.replace_all(contents, |caps: &Captures| env::var(&caps[1]).unwrap_or_default());
    Ok(result.into_owned())
}

#[derive(Error, Debug)]
pub enum ReadYamlError {
    #[error("Can not find yaml")]
    CanNotFindYaml,

    #[error("Can not read yaml")]
    CanNotReadYaml,

    #[error("Setup config is invalid yaml and does not match the struct - {0}")]
    SetupConfigInvalidYaml(String),

    #[error("Invalid environment variable pattern: {0}")]
    InvalidEnvironmentVariablePattern(#[from] regex::Error),

    #[error("Environment variable {0} not found")]
    EnvironmentVariableNotFound(String),

    #[error("authentication_username and authentication_password must both be set in the yaml")]
    AuthenticationNotConfigured,
}

/// Reads and parses the authgate configuration YAML file.
///
/// A configured credential with an empty username or password could never
/// authorize any request, so it is rejected here instead of at request time.
pub fn read(file_path: &PathBuf) -> Result<SetupConfig, ReadYamlError> {
    let mut file = File::open(file_path).map_err(|_| ReadYamlError::CanNotFindYaml)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|_| ReadYamlError::CanNotReadYaml)?;

    let substituted_contents = substitute_env_variables(&contents)?;

    let config: SetupConfig = serde_yaml::from_str(&substituted_contents)
        .map_err(|e| ReadYamlError::SetupConfigInvalidYaml(e.to_string()))?;

    if config.api_config.authentication_username.is_empty()
        || config.api_config.authentication_password.is_empty()
    {
        return Err(ReadYamlError::AuthenticationNotConfigured);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_yaml(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_full_config() {
        let file = write_yaml(
            r#"
name: authgate-demo
description: basic auth demonstration
api_config:
  host: "0.0.0.0"
  port: 8080
  allowed_origins:
    - http://localhost:8080
  authentication_username: tom
  authentication_password: "1234"
"#,
        );

        let config = read(&file.path().to_path_buf()).unwrap();

        assert_eq!(config.name, "authgate-demo");
        assert_eq!(config.description.as_deref(), Some("basic auth demonstration"));
        assert_eq!(config.api_config.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(config.api_config.port, 8080);
        assert_eq!(
            config.api_config.allowed_origins,
            Some(vec!["http://localhost:8080".to_string()])
        );
        assert_eq!(config.api_config.authentication_username, "tom");
        assert_eq!(config.api_config.authentication_password, "1234");
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let file = write_yaml(
            r#"
name: authgate-demo
api_config:
  port: 8080
  authentication_username: tom
  authentication_password: "1234"
"#,
        );

        let config = read(&file.path().to_path_buf()).unwrap();

        assert!(config.description.is_none());
        assert!(config.api_config.host.is_none());
        assert!(config.api_config.allowed_origins.is_none());
    }

    #[test]
    fn test_missing_yaml_file() {
        let result = read(&PathBuf::from("/does/not/exist/authgate.yaml"));

        assert!(matches!(result, Err(ReadYamlError::CanNotFindYaml)));
    }

    #[test]
    fn test_invalid_yaml_shape() {
        let file = write_yaml("name: authgate-demo\napi_config: not-a-mapping\n");

        let result = read(&file.path().to_path_buf());

        assert!(matches!(result, Err(ReadYamlError::SetupConfigInvalidYaml(_))));
    }

    #[test]
    fn test_environment_variable_substitution() {
        env::set_var("AUTHGATE_TEST_SUBSTITUTED_PASSWORD", "1234");
        let file = write_yaml(
            r#"
name: authgate-demo
api_config:
  port: 8080
  authentication_username: tom
  authentication_password: "${AUTHGATE_TEST_SUBSTITUTED_PASSWORD}"
"#,
        );

        let config = read(&file.path().to_path_buf()).unwrap();

        assert_eq!(config.api_config.authentication_password, "1234");
    }

    #[test]
    fn test_unset_environment_variable_is_an_error() {
        let file = write_yaml(
            r#"
name: authgate-demo
api_config:
  port: 8080
  authentication_username: tom
  authentication_password: "${AUTHGATE_TEST_UNSET_VARIABLE}"
"#,
        );

        let result = read(&file.path().to_path_buf());

        match result {
            Err(ReadYamlError::EnvironmentVariableNotFound(name)) => {
                assert_eq!(name, "AUTHGATE_TEST_UNSET_VARIABLE");
            }
            other => panic!("expected missing variable error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_username_rejected() {
        let file = write_yaml(
            r#"
name: authgate-demo
api_config:
  port: 8080
  authentication_username: ""
  authentication_password: "1234"
"#,
        );

        let result = read(&file.path().to_path_buf());

        assert!(matches!(result, Err(ReadYamlError::AuthenticationNotConfigured)));
    }

    #[test]
    fn test_empty_password_rejected() {
        let file = write_yaml(
            r#"
name: authgate-demo
api_config:
  port: 8080
  authentication_username: tom
  authentication_password: ""
"#,
        );

        let result = read(&file.path().to_path_buf());

        assert!(matches!(result, Err(ReadYamlError::AuthenticationNotConfigured)));
    }
}
