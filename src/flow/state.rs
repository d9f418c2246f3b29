//! Capture flow states
//!
//! A closed sum type so illegal combinations stay unrepresentable; the
//! controller enforces the companion invariant that an image is held iff
//! the state is `Captured`.

use crate::core::error::CameraError;

/// Current state of the capture flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureState {
    /// Waiting for the user to start a capture
    Idle,
    /// Suspended on the OS permission prompt
    RequestingPermission,
    /// Permission was denied or is restricted
    PermissionDenied,
    /// The capture UI is being presented
    Capturing,
    /// A photo was captured and is held by the controller
    Captured,
    /// A camera operation failed
    Error(CameraError),
}

impl CaptureState {
    /// Whether an operation is in flight and the trigger should be disabled
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            CaptureState::RequestingPermission | CaptureState::Capturing
        )
    }

    /// Short status label for display
    pub fn label(&self) -> &'static str {
        match self {
            CaptureState::Idle => "Ready",
            CaptureState::RequestingPermission => "Requesting permission...",
            CaptureState::PermissionDenied => "Permission denied",
            CaptureState::Capturing => "Capturing...",
            CaptureState::Captured => "Photo captured",
            CaptureState::Error(_) => "Error",
        }
    }
}

impl Default for CaptureState {
    fn default() -> Self {
        CaptureState::Idle
    }
}
