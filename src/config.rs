// src/config.rs
use std::path::PathBuf;

use crate::utils::error::AppError;

/// Everything a run needs, independent of how it was collected.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    /// Write an empty fragment (with a warning) instead of failing when a marker is missing.
    pub allow_missing: bool,
    /// Save `debug/markers.txt` under the output root.
    pub debug: bool,
    /// Save `manifest.json` under the output root.
    pub manifest: bool,
}

impl Config {
    pub fn new<S: Into<PathBuf>, O: Into<PathBuf>>(source: S, output_dir: O) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
            allow_missing: false,
            debug: false,
            manifest: false,
        }
    }

    /// Checks the configuration before any file is touched.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.source.as_os_str().is_empty() {
            return Err(AppError::Config("No source stylesheet given".to_string()));
        }
        if !self.source.exists() {
            return Err(AppError::Config(format!(
                "Source stylesheet {} does not exist",
                self.source.display()
            )));
        }
        if !self.source.is_file() {
            return Err(AppError::Config(format!(
                "Source stylesheet {} is not a regular file",
                self.source.display()
            )));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Output directory must not be empty".to_string()));
        }
        if self.output_dir.is_file() {
            return Err(AppError::Config(format!(
                "Output directory {} is an existing file",
                self.output_dir.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("styles.css");
        fs::write(&source, ":root {}").unwrap();

        let config = Config::new(&source, temp_dir.path().join("out"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_source_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(temp_dir.path().join("missing.css"), temp_dir.path());

        match config.validate() {
            Err(AppError::Config(msg)) => assert!(msg.contains("does not exist")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_source_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(temp_dir.path(), temp_dir.path().join("out"));
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_output_dir_that_is_a_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("styles.css");
        fs::write(&source, "").unwrap();

        let config = Config::new(&source, &source);
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }
}
