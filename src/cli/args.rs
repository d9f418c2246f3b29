//! Command-line argument definitions
//!
//! This module defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A small desktop tool to capture a photo with the device camera
#[derive(Parser, Debug)]
#[command(name = "camera-capture")]
#[command(version = "1.0.0")]
#[command(
    about = "Capture a photo with the device camera — permission negotiation included",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace (overrides config)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Force the camera availability answer instead of probing (overrides config)
    #[arg(long, global = true)]
    pub force_available: Option<bool>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the capture window (the default when no command is given)
    Gui,

    /// Print camera availability and the current permission status
    Check,

    /// Clear the persisted camera permission decision
    ///
    /// The permission prompt is shown only once; clearing the decision makes
    /// the next capture attempt prompt again.
    ResetPermission {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Open the configuration file in your default editor
    ///
    /// The config file is stored at:
    /// - Windows: %APPDATA%\camera_capture_tool\config.toml
    /// - Linux/macOS: ~/.config/camera_capture_tool/config.toml
    ///
    /// If no config file exists, a default one will be created.
    Config {
        /// Show the config file path without opening it
        #[arg(long)]
        path: bool,

        /// Reset config to defaults (creates a fresh config file)
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_none() {
        let args = Args::parse_from(["camera-capture"]);
        assert!(args.command.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_parse_check_with_overrides() {
        let args = Args::parse_from([
            "camera-capture",
            "check",
            "--log-level",
            "debug",
            "--force-available",
            "false",
        ]);
        assert!(matches!(args.command, Some(Commands::Check)));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.force_available, Some(false));
    }

    #[test]
    fn test_parse_reset_permission() {
        let args = Args::parse_from(["camera-capture", "reset-permission", "--yes"]);
        match args.command {
            Some(Commands::ResetPermission { yes }) => assert!(yes),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
