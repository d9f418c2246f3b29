//! Settings escape hatch
//!
//! When camera permission has been denied, the permission-denied alert
//! offers to open the place where the user can change that decision. This
//! is a best-effort, side-effecting utility; the flow controller only ever
//! requests it through an alert action.

use log::{info, warn};

use crate::core::config;

/// Open the platform surface where camera permission can be changed.
///
/// - Windows: the camera privacy page in Settings
/// - macOS: the Privacy & Security camera pane
/// - elsewhere: the app's config directory, where the permission record lives
///
/// Returns whether a settings surface could be opened.
pub fn open_camera_settings() -> bool {
    let target = settings_target();

    let Some(target) = target else {
        warn!("No settings surface available on this platform");
        return false;
    };

    match open::that(&target) {
        Ok(()) => {
            info!("Opened camera settings: {}", target);
            true
        }
        Err(e) => {
            warn!("Failed to open camera settings ({}): {}", target, e);
            false
        }
    }
}

#[cfg(target_os = "windows")]
fn settings_target() -> Option<String> {
    Some("ms-settings:privacy-webcam".to_string())
}

#[cfg(target_os = "macos")]
fn settings_target() -> Option<String> {
    Some("x-apple.systempreferences:com.apple.preference.security?Privacy_Camera".to_string())
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn settings_target() -> Option<String> {
    config::get_config_dir().map(|dir| dir.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_target_exists_where_config_dir_does() {
        // On Windows/macOS the target is a fixed URI; elsewhere it follows
        // the config directory.
        if config::get_config_dir().is_some() {
            assert!(settings_target().is_some());
        }
    }
}
