//! Camera Capture Tool Library
//!
//! A small desktop library and app for taking a photo with the device
//! camera: availability probing, one-shot permission negotiation, and a
//! capture flow that hands the actual capture to an opaque capture UI.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`core`] - Configuration and error handling
//! - [`capture`] - Platform service contracts and system implementations
//!   (permission, availability, settings escape hatch)
//! - [`flow`] - The capture flow controller: a closed state machine
//!   sequencing permission checks and the capture hand-off
//! - [`ui`] - egui/eframe presentation layer (capture screen, alert modal,
//!   picker adapter)
//! - [`cli`] - Command-line interface (only used by the binary)
//! - [`testkit`] - Deterministic fakes for testing without dialogs or a
//!   real camera
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use camera_capture_tool::capture::{PermissionStatus, SystemCaptureAvailability};
//! use camera_capture_tool::flow::{CameraFlowController, CaptureState};
//! use camera_capture_tool::testkit::FakePermissionService;
//!
//! # async fn demo() {
//! // The controller is generic over its platform collaborators.
//! let permissions = FakePermissionService::new(PermissionStatus::Authorized);
//! let availability = SystemCaptureAvailability::with_override(Some(true));
//! let flow = CameraFlowController::new(permissions, availability);
//!
//! flow.request_capture().await;
//! assert_eq!(flow.state(), CaptureState::Capturing);
//! assert!(flow.take_capture_request()); // present the capture UI now
//! # }
//! ```
//!
//! # Flow
//!
//! `request_capture` checks availability, then permission. An undecided
//! permission suspends on the platform prompt; the answer is terminal.
//! When authorized, the controller signals the presentation layer to open
//! the capture UI and the result comes back through `on_capture_ui_result`
//! (image or silent dismissal) or `report_capture_error` (visible failure).
//! Failures never propagate as `Err`; they land in the `Error` state with
//! an alert attached.

pub mod capture;
pub mod cli;
pub mod core;
pub mod flow;
pub mod testkit;
pub mod ui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
