//! Configuration loading from disk.
//!
//! # Responsibilities
//! - Read and deserialize the TOML config file
//! - Run semantic validation before the config enters the system
//!
//! # Design Decisions
//! - Loading is a constructor on `AppConfig`; a config that exists is
//!   a config that passed validation
//! - Validation failures keep the whole error list, joined for display

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for the schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config parsed but violates a semantic invariant.
    #[error("invalid configuration: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl AppConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        validate_config(&config).map_err(ConfigError::Validation)?;

        tracing::debug!(
            path = %path.display(),
            users = config.users.len(),
            "Config file loaded"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_io_error() {
        let result = AppConfig::load(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let mut file = tempfile_path("route-shell-parse");
        writeln!(file.1, "users = \"not a table\"").expect("write");
        let result = AppConfig::load(&file.0);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
        let _ = fs::remove_file(&file.0);
    }

    #[test]
    fn test_valid_file_loads() {
        let mut file = tempfile_path("route-shell-ok");
        writeln!(
            file.1,
            "start_path = \"/users\"\n[[users]]\nid = \"9\"\nfull_name = \"Grace Hopper\""
        )
        .expect("write");
        let config = AppConfig::load(&file.0).expect("load");
        assert_eq!(config.start_path, "/users");
        assert_eq!(config.users[0].id, "9");
        let _ = fs::remove_file(&file.0);
    }

    #[test]
    fn test_validation_failures_all_reported() {
        let mut file = tempfile_path("route-shell-invalid");
        writeln!(
            file.1,
            "start_path = \"users\"\n\
             [[users]]\nid = \"1\"\nfull_name = \"Robin Wieruch\"\n\
             [[users]]\nid = \"1\"\nfull_name = \"\""
        )
        .expect("write");

        let error = AppConfig::load(&file.0).expect_err("invalid config");
        let message = error.to_string();
        assert!(message.starts_with("invalid configuration:"));
        assert!(message.contains("duplicate user id '1'"));
        assert!(message.contains("empty full name"));
        assert!(message.contains("not absolute"));
        let _ = fs::remove_file(&file.0);
    }

    fn tempfile_path(stem: &str) -> (std::path::PathBuf, fs::File) {
        let path = std::env::temp_dir().join(format!("{}-{}.toml", stem, std::process::id()));
        let file = fs::File::create(&path).expect("create temp file");
        (path, file)
    }
}
