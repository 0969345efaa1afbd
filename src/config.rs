//! Process configuration, read from a TOML file.
//!
//! Every field has a default, so an empty file (or none at all, when the
//! default location is absent) yields a working configuration.

use crate::error::AppError;
use log::LevelFilter;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub web_server: WebServerConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LevelFilter,
    pub directory: Option<PathBuf>,
    pub filename: Option<String>,
    /// The log file rotates once it reaches this size; 0 disables rotation.
    pub max_size_mb: usize,
    /// Rotated log files older than this are deleted; 0 keeps them forever.
    pub max_age_days: u32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            directory: None,
            filename: None,
            max_size_mb: 20,
            max_age_days: 365,
        }
    }
}

impl LoggingConfig {
    /// Full path of the log file, if one is configured.
    ///
    /// A directory without a filename logs to `enroll.log` in that directory.
    pub fn file_path(&self) -> Option<PathBuf> {
        match (&self.directory, &self.filename) {
            (None, None) => None,
            (Some(dir), None) => Some(dir.join("enroll.log")),
            (None, Some(name)) => Some(PathBuf::from(name)),
            (Some(dir), Some(name)) => Some(dir.join(name)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WebServerConfig {
    pub address: String,
}

impl Default for WebServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// JSON report template. The built-in sample report is used when unset.
    pub template: Option<PathBuf>,
    pub page_width: f32,
    pub page_height: f32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            template: None,
            page_width: 210.0,
            page_height: 297.0,
        }
    }
}

impl Config {
    /// The file [`Config::load`] reads: the explicit path, else the default
    /// location when it exists.
    pub fn source(explicit_path: Option<&Path>) -> Option<PathBuf> {
        match explicit_path {
            Some(path) => Some(path.to_path_buf()),
            None => Some(PathBuf::from(DEFAULT_CONFIG_PATH)).filter(|path| path.exists()),
        }
    }

    /// Loads the configuration.
    ///
    /// An explicitly named file must exist. Without one, the default location
    /// is tried and the built-in defaults are used when it is absent. Nothing
    /// is logged here since the logger is configured from the result.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, AppError> {
        match Self::source(explicit_path) {
            Some(path) => Self::load_file(&path),
            None => Ok(Self::default()),
        }
    }

    fn load_file(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Err(AppError::MissingConfig(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|message| AppError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.web_server.address, "127.0.0.1:8080");
        assert_eq!(config.logging.level, LevelFilter::Info);
        assert_eq!(config.logging.max_size_mb, 20);
        assert_eq!(config.logging.max_age_days, 365);
        assert_eq!(config.report.page_width, 210.0);
    }

    #[test]
    fn test_full_document() {
        let config = Config::from_toml(
            r#"
            [logging]
            level = "debug"
            directory = "logs"
            filename = "enroll.log"
            max_size_mb = 5
            max_age_days = 30

            [web_server]
            address = "0.0.0.0:3000"

            [report]
            template = "templates/report.json"
            page_width = 297.0
            page_height = 210.0
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.level, LevelFilter::Debug);
        assert_eq!(
            config.logging.file_path(),
            Some(PathBuf::from("logs").join("enroll.log"))
        );
        assert_eq!(config.logging.max_size_mb, 5);
        assert_eq!(config.logging.max_age_days, 30);
        assert_eq!(config.web_server.address, "0.0.0.0:3000");
        assert_eq!(
            config.report.template.as_deref(),
            Some(Path::new("templates/report.json"))
        );
        assert_eq!(config.report.page_height, 210.0);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = Config::from_toml("[report]\npage_width = 100.0\n").unwrap();
        assert_eq!(config.report.page_width, 100.0);
        assert_eq!(config.report.page_height, 297.0);
        assert!(config.logging.file_path().is_none());
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let err = Config::from_toml("[logging]\nlevel = \"loud\"\n").unwrap_err();
        assert!(err.contains("level"), "{err}");
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, AppError::MissingConfig(p) if p == path));
    }

    #[test]
    fn test_explicit_path_is_the_source() {
        let path = Path::new("elsewhere.toml");
        assert_eq!(Config::source(Some(path)), Some(path.to_path_buf()));
    }

    #[test]
    fn test_default_source_only_when_present() {
        let expected = Some(PathBuf::from(DEFAULT_CONFIG_PATH)).filter(|path| path.exists());
        assert_eq!(Config::source(None), expected);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[web_server]\naddress = \"127.0.0.1:9999\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.web_server.address, "127.0.0.1:9999");
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[web_server\n").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }
}
