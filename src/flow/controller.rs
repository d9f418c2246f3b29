//! Camera flow controller
//!
//! The controller owns the capture state machine: it sequences the
//! availability check, the permission negotiation, and the hand-off to the
//! capture UI, and it produces the alerts the presentation layer shows.
//! It never touches image bytes beyond owning the decoded result.
//!
//! Failures never surface as `Err` from controller operations; every
//! operation completes and leaves the outcome in the observable state and
//! alert fields. The presentation layer polls those fields, disables the
//! trigger while [`is_busy`](CameraFlowController::is_busy), and reports
//! capture-UI results back through
//! [`on_capture_ui_result`](CameraFlowController::on_capture_ui_result) and
//! [`report_capture_error`](CameraFlowController::report_capture_error).

use std::sync::Mutex;

use log::{debug, warn};

use crate::capture::{CaptureAvailability, CapturedImage, PermissionService, PermissionStatus};
use crate::core::error::CameraError;
use crate::flow::alert::AlertRequest;
use crate::flow::state::CaptureState;

/// Observable flow fields, guarded as one block so the state/image
/// invariant can never be seen torn
#[derive(Debug, Default)]
struct FlowInner {
    state: CaptureState,
    image: Option<CapturedImage>,
    alert: Option<AlertRequest>,
    /// One-shot signal telling the presentation layer to open the capture UI
    capture_requested: bool,
}

impl FlowInner {
    /// Move to a new state, dropping the image unless it is still `Captured`.
    fn transition(&mut self, state: CaptureState) {
        if state != CaptureState::Captured {
            self.image = None;
        }
        self.state = state;
    }

    fn begin_capture(&mut self) {
        self.transition(CaptureState::Capturing);
        self.capture_requested = true;
    }

    fn deny(&mut self) {
        self.transition(CaptureState::PermissionDenied);
        self.alert = Some(AlertRequest::permission_denied());
    }

    fn fail(&mut self, error: CameraError) {
        self.transition(CaptureState::Error(error));
        self.alert = Some(AlertRequest::for_error(error));
    }
}

/// The capture flow state machine
///
/// Generic over its two platform collaborators so tests can substitute
/// deterministic fakes (see [`crate::testkit`]). Interior mutability keeps
/// the controller shareable behind an `Arc`: the GUI polls accessors every
/// frame while a tokio task drives [`request_capture`](Self::request_capture).
pub struct CameraFlowController<P, A> {
    permissions: P,
    availability: A,
    inner: Mutex<FlowInner>,
}

impl<P, A> CameraFlowController<P, A>
where
    P: PermissionService,
    A: CaptureAvailability,
{
    /// Create a controller in the `Idle` state
    pub fn new(permissions: P, availability: A) -> Self {
        Self {
            permissions,
            availability,
            inner: Mutex::new(FlowInner::default()),
        }
    }

    /// Current flow state
    pub fn state(&self) -> CaptureState {
        self.inner.lock().unwrap().state.clone()
    }

    /// The captured photo; present exactly when the state is `Captured`
    pub fn image(&self) -> Option<CapturedImage> {
        self.inner.lock().unwrap().image.clone()
    }

    /// Pending alert, if any
    pub fn alert(&self) -> Option<AlertRequest> {
        self.inner.lock().unwrap().alert.clone()
    }

    /// Clear the pending alert after the user acknowledged it
    pub fn acknowledge_alert(&self) {
        self.inner.lock().unwrap().alert = None;
    }

    /// Whether an operation is in flight (`RequestingPermission` or
    /// `Capturing`); the presentation layer disables the trigger while true
    pub fn is_busy(&self) -> bool {
        self.inner.lock().unwrap().state.is_busy()
    }

    /// Consume the one-shot request to present the capture UI.
    ///
    /// Returns true at most once per capture attempt.
    pub fn take_capture_request(&self) -> bool {
        let mut inner = self.inner.lock().unwrap();
        std::mem::take(&mut inner.capture_requested)
    }

    /// Start a capture attempt: check availability, negotiate permission,
    /// and signal the capture UI when authorized.
    ///
    /// Suspends only while the user answers the permission prompt. A call
    /// while already busy is a logged no-op; the UI is expected to disable
    /// the trigger via [`is_busy`](Self::is_busy).
    pub async fn request_capture(&self) {
        {
            let inner = self.inner.lock().unwrap();
            if inner.state.is_busy() {
                warn!("Capture requested while busy ({:?})", inner.state);
                return;
            }
        }

        if !self.availability.is_available() {
            warn!("Capture requested but no camera is available");
            self.inner
                .lock()
                .unwrap()
                .fail(CameraError::CameraNotAvailable);
            return;
        }

        let status = self.permissions.check();
        debug!("Camera permission status: {}", status);

        match status {
            PermissionStatus::Authorized => self.inner.lock().unwrap().begin_capture(),
            PermissionStatus::Denied | PermissionStatus::Restricted => {
                self.inner.lock().unwrap().deny()
            }
            PermissionStatus::NotDetermined => {
                self.inner
                    .lock()
                    .unwrap()
                    .transition(CaptureState::RequestingPermission);

                // The lock is not held across the prompt.
                let resolved = self.permissions.request().await;
                debug!("Camera permission request resolved: {}", resolved);

                match resolved {
                    PermissionStatus::Authorized => self.inner.lock().unwrap().begin_capture(),
                    PermissionStatus::Denied | PermissionStatus::Restricted => {
                        self.inner.lock().unwrap().deny()
                    }
                    PermissionStatus::NotDetermined => {
                        // Should not occur: a request resolves with a
                        // terminal answer. Treated as a no-op.
                        warn!("Permission request resolved without a decision");
                    }
                }
            }
        }
    }

    /// Discard the captured photo and return to `Idle`. Always succeeds.
    pub fn retake(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.transition(CaptureState::Idle);
    }

    /// Report the capture UI result after it was dismissed.
    ///
    /// With an image the flow ends in `Captured`; without one it returns to
    /// `Idle` silently — user cancellation and a capture that produced
    /// nothing are deliberately indistinguishable here. A visible decode
    /// failure goes through [`report_capture_error`](Self::report_capture_error)
    /// instead.
    pub fn on_capture_ui_result(&self, image: Option<CapturedImage>) {
        let mut inner = self.inner.lock().unwrap();
        inner.capture_requested = false;

        match image {
            Some(image) => {
                inner.image = Some(image);
                inner.transition(CaptureState::Captured);
            }
            None => inner.transition(CaptureState::Idle),
        }
    }

    /// Report a failure inside the capture UI itself (e.g. the picked image
    /// could not be decoded)
    pub fn report_capture_error(&self, error: CameraError) {
        warn!("Capture UI reported an error: {}", error);
        let mut inner = self.inner.lock().unwrap();
        inner.capture_requested = false;
        inner.fail(error);
    }
}
