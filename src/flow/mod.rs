//! Capture flow: the state machine behind the camera screen
//!
//! - [`state`] - the closed set of flow states
//! - [`alert`] - alert value objects the controller emits
//! - [`controller`] - the flow controller sequencing permission and capture

pub mod alert;
pub mod controller;
pub mod state;

pub use alert::{AlertAction, AlertActionKind, AlertRequest};
pub use controller::CameraFlowController;
pub use state::CaptureState;
