//! Command dispatch
//!
//! Runs the subcommand selected on the command line. The GUI is the
//! default; the rest are small diagnostics around the permission store and
//! the config file.

use anyhow::{anyhow, Context, Result};
use dialoguer::Confirm;
use log::debug;
use std::fs;

use crate::capture::{
    CaptureAvailability, PermissionService, SystemCaptureAvailability, SystemPermissionService,
};
use crate::cli::{Args, Commands};
use crate::core::config::{self, Config};
use crate::ui;

/// Run the selected command
pub fn run_command(args: &Args, config: &Config) -> Result<()> {
    match &args.command {
        None | Some(Commands::Gui) => ui::run_app(config.clone()),
        Some(Commands::Check) => run_check(config),
        Some(Commands::ResetPermission { yes }) => run_reset_permission(config, *yes),
        Some(Commands::Config { path, reset }) => run_config(*path, *reset),
    }
}

fn permission_service(config: &Config) -> Result<SystemPermissionService> {
    let store_path = config::get_permission_store_path()
        .ok_or_else(|| anyhow!("could not determine a configuration directory"))?;
    Ok(SystemPermissionService::new(
        store_path,
        config.camera.policy_locked,
    ))
}

fn run_check(config: &Config) -> Result<()> {
    let availability = SystemCaptureAvailability::with_override(config.camera.force_available);
    let permissions = permission_service(config)?;

    println!(
        "Camera available:  {}",
        if availability.is_available() { "yes" } else { "no" }
    );
    println!("Permission status: {}", permissions.check());
    Ok(())
}

fn run_reset_permission(config: &Config, assume_yes: bool) -> Result<()> {
    let permissions = permission_service(config)?;
    debug!("Permission store: {}", permissions.store_path().display());

    if !assume_yes {
        let confirmed = Confirm::new()
            .with_prompt("Clear the saved camera permission decision?")
            .default(false)
            .interact()
            .context("confirmation prompt failed")?;

        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    permissions
        .clear_decision()
        .context("failed to clear the permission decision")?;
    println!("Permission decision cleared; the next capture will prompt again.");
    Ok(())
}

fn run_config(path_only: bool, reset: bool) -> Result<()> {
    if reset {
        config::ensure_config_dir()?;
        let config_path = config::get_config_path()
            .ok_or_else(|| anyhow!("could not determine a configuration directory"))?;
        fs::write(&config_path, Config::generate_default_config())
            .with_context(|| format!("failed to write {}", config_path.display()))?;
        println!("Config reset to defaults: {}", config_path.display());
        return Ok(());
    }

    if path_only {
        println!("{}", config::init_config()?.display());
        return Ok(());
    }

    let config_path = config::open_config_in_editor()?;
    println!("Opened {}", config_path.display());
    Ok(())
}
