//! Alert value objects
//!
//! The controller communicates user-facing conditions through an
//! [`AlertRequest`]: an ephemeral description of a modal with up to two
//! actions. The presentation layer renders it, maps the chosen action kind
//! to behavior (only `OpenSettings` carries one), and clears the alert.

use crate::core::error::CameraError;

/// What an alert button asks the presentation layer to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertActionKind {
    /// Dismiss the alert, nothing else
    Acknowledge,
    /// Open the platform settings surface where permission can be changed
    OpenSettings,
    /// Decline the offered action
    Cancel,
}

/// One alert button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertAction {
    /// Button label
    pub label: String,
    /// What pressing the button means
    pub kind: AlertActionKind,
}

impl AlertAction {
    /// Create an action with the given label and kind
    pub fn new(label: impl Into<String>, kind: AlertActionKind) -> Self {
        Self {
            label: label.into(),
            kind,
        }
    }
}

/// A modal to show the user, created by the controller and consumed by the
/// presentation layer after display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRequest {
    /// Alert title
    pub title: String,
    /// Alert body text
    pub message: String,
    /// Primary action, if any
    pub primary: Option<AlertAction>,
    /// Secondary action, if any
    pub secondary: Option<AlertAction>,
}

impl AlertRequest {
    /// Acknowledgment-only alert with a single "OK" button
    pub fn acknowledgment(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            primary: Some(AlertAction::new("OK", AlertActionKind::Acknowledge)),
            secondary: None,
        }
    }

    /// Two-action alert shown when camera permission has been denied
    pub fn permission_denied() -> Self {
        Self {
            title: "Permission Denied".to_string(),
            message: CameraError::PermissionDenied.user_message().to_string(),
            primary: Some(AlertAction::new(
                "Open Settings",
                AlertActionKind::OpenSettings,
            )),
            secondary: Some(AlertAction::new("Cancel", AlertActionKind::Cancel)),
        }
    }

    /// Acknowledgment-only alert for a camera error
    pub fn for_error(error: CameraError) -> Self {
        let title = match error {
            CameraError::CameraNotAvailable => "Camera Not Available",
            _ => "Error",
        };
        Self::acknowledgment(title, error.user_message())
    }

    /// Number of actions offered (1 or 2)
    pub fn action_count(&self) -> usize {
        self.primary.iter().count() + self.secondary.iter().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acknowledgment_has_single_ok_action() {
        let alert = AlertRequest::acknowledgment("Title", "Message");
        assert_eq!(alert.action_count(), 1);
        let primary = alert.primary.unwrap();
        assert_eq!(primary.label, "OK");
        assert_eq!(primary.kind, AlertActionKind::Acknowledge);
    }

    #[test]
    fn test_permission_denied_offers_settings_and_cancel() {
        let alert = AlertRequest::permission_denied();
        assert_eq!(alert.action_count(), 2);
        assert_eq!(alert.primary.unwrap().kind, AlertActionKind::OpenSettings);
        assert_eq!(alert.secondary.unwrap().kind, AlertActionKind::Cancel);
        assert_eq!(alert.message, CameraError::PermissionDenied.user_message());
    }

    #[test]
    fn test_error_alert_uses_fixed_message() {
        let alert = AlertRequest::for_error(CameraError::CaptureFailure);
        assert_eq!(alert.title, "Error");
        assert_eq!(alert.message, CameraError::CaptureFailure.user_message());
        assert_eq!(alert.action_count(), 1);
    }

    #[test]
    fn test_camera_not_available_gets_its_own_title() {
        let alert = AlertRequest::for_error(CameraError::CameraNotAvailable);
        assert_eq!(alert.title, "Camera Not Available");
    }
}
