//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::ProjectConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
///
/// Messages name the project file so they read on their own.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read project file {}: {}", path.display(), source)
            }
            ConfigError::Parse(e) => write!(f, "invalid project file: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "project file failed validation: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

fn read_error(path: &Path, source: std::io::Error) -> ConfigError {
    ConfigError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Load and validate a project file.
pub fn load_config(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| read_error(path, e))?;
    parse_config(&content)
}

/// Load a project file, falling back to defaults when it does not exist.
///
/// Any other read, parse, or validation failure is still returned.
pub fn load_or_default(path: &Path) -> Result<ProjectConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No project file found, using defaults");
            Ok(ProjectConfig::default())
        }
        Err(e) => Err(read_error(path, e)),
    }
}

/// Parse and validate project file contents.
pub fn parse_config(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig = toml::from_str(content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_or_default(&dir.path().join("deployctx.toml")).unwrap();
        assert!(config.networks.is_empty());
    }

    #[test]
    fn test_missing_file_is_error_for_strict_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployctx.toml");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err
            .to_string()
            .starts_with(&format!("cannot read project file {}", path.display())));
    }

    #[test]
    fn test_unreadable_file_is_not_treated_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_or_default(dir.path()).unwrap_err();
        assert!(err.to_string().contains(&dir.path().display().to_string()));
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("default_network = [").unwrap_err();
        assert!(err.to_string().starts_with("invalid project file: "));
    }

    #[test]
    fn test_validation_error_message_lists_problems() {
        let err = parse_config(
            r#"
            default_network = "nowhere"

            [networks.anvil]
            url = "nope"
            "#,
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("project file failed validation: "));
        assert!(message.contains("default network 'nowhere' is not defined"));
        assert!(message.contains("network 'anvil' has invalid url 'nope'"));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deployctx.toml");
        std::fs::write(
            &path,
            "default_network = \"anvil\"\n[networks.anvil]\nurl = \"http://127.0.0.1:8545\"\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.default_network.as_deref(), Some("anvil"));
    }
}
