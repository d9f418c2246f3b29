//! Error types for the camera capture tool
//!
//! Camera failures form a small closed set. The flow controller never
//! returns these as `Err`; they become the `Error` state plus an alert.

use thiserror::Error;

/// Errors that can occur during camera operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraError {
    /// Camera permission was denied or is restricted by policy
    #[error("camera permission denied")]
    PermissionDenied,

    /// No capture device is present on this machine
    #[error("camera not available")]
    CameraNotAvailable,

    /// The capture UI produced an unreadable image
    #[error("image capture failed")]
    CaptureFailure,

    /// Anything we cannot classify
    #[error("unknown camera error")]
    Unknown,
}

impl CameraError {
    /// Fixed user-facing message for this error, shown in alerts.
    pub fn user_message(&self) -> &'static str {
        match self {
            CameraError::PermissionDenied => {
                "Camera permission was denied. Enable it in Settings to take photos."
            }
            CameraError::CameraNotAvailable => {
                "No camera is available. Please use a device with a camera."
            }
            CameraError::CaptureFailure => "Failed to capture the image. Please try again.",
            CameraError::Unknown => "An unknown error occurred.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_user_messages_are_distinct_and_nonempty() {
        let all = [
            CameraError::PermissionDenied,
            CameraError::CameraNotAvailable,
            CameraError::CaptureFailure,
            CameraError::Unknown,
        ];
        let messages: HashSet<_> = all.iter().map(|err| err.user_message()).collect();
        assert_eq!(messages.len(), all.len());
        assert!(messages.iter().all(|message| !message.is_empty()));
    }

    #[test]
    fn test_display_is_terse() {
        assert_eq!(
            CameraError::CameraNotAvailable.to_string(),
            "camera not available"
        );
    }
}
