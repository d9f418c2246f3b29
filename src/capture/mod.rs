//! Platform service abstractions for camera access
//!
//! This module defines the contracts the capture flow depends on, allowing
//! the system implementations and deterministic fakes to be used
//! interchangeably:
//!
//! - [`PermissionService`] - queries and requests camera authorization
//! - [`CaptureAvailability`] - reports whether a capture device exists
//!
//! Both are injected into the flow controller; nothing here touches global
//! state.

pub mod availability;
pub mod settings;
pub mod system;

use std::fmt::{self, Display};
use std::future::Future;

pub use availability::SystemCaptureAvailability;
pub use system::SystemPermissionService;

/// Permission status for camera access, as recorded by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    /// The user has granted camera access
    Authorized,
    /// The user has denied camera access
    Denied,
    /// The user has not been asked yet
    NotDetermined,
    /// Access is blocked by policy; the user cannot grant it
    Restricted,
}

impl PermissionStatus {
    /// Whether a permission prompt can still be shown.
    ///
    /// Platforms only allow prompting once; after a decision the user must
    /// change the permission through settings.
    pub fn can_prompt(&self) -> bool {
        matches!(self, PermissionStatus::NotDetermined)
    }
}

impl Display for PermissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PermissionStatus::Authorized => "authorized",
            PermissionStatus::Denied => "denied",
            PermissionStatus::NotDetermined => "not determined",
            PermissionStatus::Restricted => "restricted",
        };
        write!(f, "{}", name)
    }
}

/// A captured photo, decoded to RGBA
///
/// The flow controller owns exactly one of these while in the `Captured`
/// state. It is replaced wholesale on retake, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl CapturedImage {
    /// Create a captured image from a decoded RGBA buffer.
    ///
    /// Returns `None` when the buffer length does not match the dimensions.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        if rgba.len() != (width as usize) * (height as usize) * 4 {
            return None;
        }
        Some(Self {
            width,
            height,
            rgba,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA pixel data (4 bytes per pixel, row-major)
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}

/// Camera permission service contract
///
/// `check` is a side-effect-free query. `request` suspends until the user
/// answers the permission prompt and resolves exactly once with a terminal
/// status; it must only be called while the current status is
/// `NotDetermined`, since re-prompting is not possible once decided.
pub trait PermissionService: Send + Sync {
    /// Current camera permission status
    fn check(&self) -> PermissionStatus;

    /// Prompt the user for camera permission and return the resulting status
    fn request(&self) -> impl Future<Output = PermissionStatus> + Send;
}

/// Capture availability service contract
pub trait CaptureAvailability: Send + Sync {
    /// Whether this device/environment offers a capture source
    fn is_available(&self) -> bool;
}
