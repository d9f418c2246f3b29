//! Core functionality: configuration and error handling

pub mod config;
pub mod error;

pub use config::{Config, ConfigError};
pub use error::CameraError;
