//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use sketchpad::{
    SketchpadError,
    config::{AppConfig, ValidationError},
};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<ConfigError> for SketchpadError {
    fn from(err: ConfigError) -> Self {
        SketchpadError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (sketchpad/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or fails validation
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, SketchpadError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("sketchpad/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "sketchpad", "sketchpad") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load and validate configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, SketchpadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate().map_err(ConfigError::from)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_explicit_file() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[transform]\nscale_factor = 3.0\n\n[output]\nindent = 2\n",
        )
        .expect("Failed to write config");

        let config = load_config(Some(&path)).expect("Failed to load config");

        assert_eq!(config.transform().scale_factor(), 3.0);
        assert_eq!(config.output().indent(), 2);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("absent.toml");

        let err = load_config(Some(&path)).expect_err("missing file must fail");

        assert!(matches!(err, SketchpadError::Config(msg) if msg.contains("Missing configuration file")));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[transform\nscale_factor = ").expect("Failed to write config");

        let err = load_config(Some(&path)).expect_err("invalid toml must fail");

        assert!(matches!(err, SketchpadError::Config(msg) if msg.starts_with("Failed to parse")));
    }

    #[test]
    fn test_non_finite_factor_is_rejected() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[transform]\nscale_factor = inf\n").expect("Failed to write config");

        let err = load_config(Some(&path)).expect_err("infinite factor must fail");

        assert!(matches!(err, SketchpadError::Config(msg) if msg.starts_with("Validation error")));
    }
}
