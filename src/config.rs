//! Configuration management module.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (first run).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
    /// Signed-in operator, written by the sign-in flow and cleared at
    /// sign-out. Absent until someone signs in.
    pub user: Option<UserConfig>,
}

/// HR portal connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

/// UI preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub window_width: f32,
    pub window_height: f32,
}

/// Identity of the signed-in operator, shown in the status bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub designation: String,
}

impl AppConfig {
    /// Get config file path: the platform config directory, falling back to
    /// the executable's directory.
    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "hrportal", "employee-editor") {
            return dirs.config_dir().join("config.toml");
        }
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => ConfigLoadResult::Loaded(config),
                    Err(e) => ConfigLoadResult::Invalid(e),
                },
                Err(e) => ConfigLoadResult::Invalid(ConfigError::Parse(e)),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Validation("API base URL cannot be empty".to_string()));
        }
        if !self.api.base_url.starts_with("http") {
            return Err(ConfigError::Validation(
                "API base URL must start with http:// or https://".to_string(),
            ));
        }
        if self.api.timeout_secs < 1 {
            return Err(ConfigError::Validation(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }
        if self.api.timeout_secs > 300 {
            return Err(ConfigError::Validation(
                "Request timeout cannot exceed 300 seconds".to_string(),
            ));
        }
        if self.ui.window_width < 320.0 || self.ui.window_height < 240.0 {
            return Err(ConfigError::Validation(
                "Window size must be at least 320x240".to_string(),
            ));
        }
        if let Some(user) = &self.user {
            if user.id < 1 {
                return Err(ConfigError::Validation("User ID must be greater than 0".to_string()));
            }
        }
        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 960.0,
            window_height: 640.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let mut config = AppConfig::default();
        config.api.base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_base_url_scheme() {
        let mut config = AppConfig::default();
        config.api.base_url = "ftp://portal".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_timeout_bounds() {
        let mut config = AppConfig::default();

        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());

        config.api.timeout_secs = 301;
        assert!(config.validate().is_err());

        config.api.timeout_secs = 30;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_window_size() {
        let mut config = AppConfig::default();
        config.ui.window_width = 100.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_user_id() {
        let mut config = AppConfig::default();
        config.user = Some(UserConfig {
            id: 0,
            name: "Asha Rao".to_string(),
            email: "a@x.com".to_string(),
            designation: "HR Manager".to_string(),
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: AppConfig = toml::from_str(
            "
            [api]
            base_url = \"http://portal:8080\"

            [ui]
            window_width = 960.0
            window_height = 640.0
        ",
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://portal:8080");
        assert_eq!(config.api.timeout_secs, 30, "timeout falls back to default");
        assert!(config.user.is_none());
    }

    #[test]
    fn test_parse_user_table() {
        let config: AppConfig = toml::from_str(
            "
            [api]
            base_url = \"http://portal:8080\"

            [ui]
            window_width = 960.0
            window_height = 640.0

            [user]
            id = 3
            name = \"Asha Rao\"
            email = \"a@x.com\"
            designation = \"HR Manager\"
        ",
        )
        .unwrap();
        let user = config.user.expect("user table parsed");
        assert_eq!(user.id, 3);
        assert_eq!(user.name, "Asha Rao");
    }

    #[test]
    fn test_missing_file_is_missing() {
        let result = AppConfig::try_load(Path::new("/nonexistent/employee-editor/config.toml"));
        assert!(matches!(result, ConfigLoadResult::Missing));
    }
}
