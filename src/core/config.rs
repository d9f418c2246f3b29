//! Configuration module for the camera capture tool
//!
//! Supports loading configuration from a TOML file stored in the standard
//! location:
//! - Windows: %APPDATA%\camera_capture_tool\config.toml
//! - Linux/macOS: ~/.config/camera_capture_tool/config.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application name used for the config directory
const APP_NAME: &str = "camera_capture_tool";

/// Default config file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// File holding the persisted camera permission decision
const PERMISSION_FILE_NAME: &str = "permission.toml";

/// Errors from loading or saving configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No standard config directory could be determined
    #[error("could not determine a configuration directory")]
    ConfigDirNotFound,

    /// Reading the config file failed
    #[error("failed to read {0}: {1}")]
    ReadError(PathBuf, String),

    /// The config file is not valid TOML
    #[error("failed to parse {0}: {1}")]
    ParseError(PathBuf, String),

    /// Writing the config file failed
    #[error("failed to write {0}: {1}")]
    WriteError(PathBuf, String),

    /// Opening the config file in an editor failed
    #[error("failed to open {0}: {1}")]
    OpenError(PathBuf, String),
}

/// Get the standard configuration directory for the application.
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}

/// Get the standard configuration file path.
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Get the path of the persisted camera permission decision.
pub fn get_permission_store_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(PERMISSION_FILE_NAME))
}

/// Ensure the configuration directory exists, creating it if needed.
pub fn ensure_config_dir() -> Result<PathBuf, ConfigError> {
    let config_dir = get_config_dir().ok_or(ConfigError::ConfigDirNotFound)?;

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)
            .map_err(|e| ConfigError::WriteError(config_dir.clone(), e.to_string()))?;
    }

    Ok(config_dir)
}

/// Initialize the configuration file if it doesn't exist.
///
/// Returns the path to the config file.
pub fn init_config() -> Result<PathBuf, ConfigError> {
    let config_dir = ensure_config_dir()?;
    let config_path = config_dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        fs::write(&config_path, Config::generate_default_config())
            .map_err(|e| ConfigError::WriteError(config_path.clone(), e.to_string()))?;
    }

    Ok(config_path)
}

/// Open the configuration file in the default application.
pub fn open_config_in_editor() -> Result<PathBuf, ConfigError> {
    let config_path = init_config()?;

    open::that(&config_path)
        .map_err(|e| ConfigError::OpenError(config_path.clone(), e.to_string()))?;

    Ok(config_path)
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,
    /// Whether to also log to a file
    pub log_to_file: bool,
    /// Log file path (used when `log_to_file` is true)
    pub log_file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_to_file: false,
            log_file: PathBuf::from("camera-capture.log"),
        }
    }
}

/// Camera behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct CameraConfig {
    /// Force the availability answer instead of probing the host.
    /// Useful on machines without a camera, or for demos.
    pub force_available: Option<bool>,
    /// Treat camera access as restricted by policy (never prompts)
    pub policy_locked: bool,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Initial window width in points
    pub window_width: f32,
    /// Initial window height in points
    pub window_height: f32,
    /// Start in dark mode
    pub dark_mode: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 480.0,
            window_height: 640.0,
            dark_mode: true,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Camera settings
    pub camera: CameraConfig,
    /// UI settings
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from a specific path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e.to_string()))?;

        toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e.to_string()))
    }

    /// Load configuration from the standard location.
    ///
    /// Returns the default configuration when no config file exists yet.
    pub fn load_default() -> Result<Self, ConfigError> {
        match get_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Save configuration to a specific path
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::WriteError(path.to_path_buf(), e.to_string()))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::WriteError(path.to_path_buf(), e.to_string()))?;
        }

        fs::write(path, contents)
            .map_err(|e| ConfigError::WriteError(path.to_path_buf(), e.to_string()))
    }

    /// Generate the default config file contents with comments
    pub fn generate_default_config() -> String {
        let defaults = Self::default();
        format!(
            r#"# Camera Capture Tool configuration

[logging]
# Log level: error, warn, info, debug, trace
level = "{level}"
# Also write logs to a file
log_to_file = {log_to_file}
log_file = "camera-capture.log"

[camera]
# Uncomment to force the availability probe (true/false)
# force_available = true
# Treat camera access as restricted by policy (never prompts)
policy_locked = {policy_locked}

[ui]
window_width = {width}
window_height = {height}
dark_mode = {dark}
"#,
            level = defaults.logging.level,
            log_to_file = defaults.logging.log_to_file,
            policy_locked = defaults.camera.policy_locked,
            width = defaults.ui.window_width,
            height = defaults.ui.window_height,
            dark = defaults.ui.dark_mode,
        )
    }
}
