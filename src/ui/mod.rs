//! Presentation layer
//!
//! - [`app`] - the eframe capture screen and alert modal
//! - [`picker`] - the capture UI adapter (dialog + decode)
//!
//! The UI never mutates flow state directly; it invokes the controller's
//! operations and renders whatever the observable fields say.

pub mod app;
pub mod picker;

pub use app::{run_app, CaptureApp, SystemFlowController};
