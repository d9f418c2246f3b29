//! Capture UI adapter
//!
//! Presents the capture interface when the flow controller signals it and
//! reports the outcome back. The "camera" is an image picker: the user
//! selects a photo file, which is decoded off the UI thread. Dismissing the
//! dialog without a pick returns the flow to idle; a file that cannot be
//! decoded is a visible capture failure.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, warn};

use crate::capture::{CaptureAvailability, CapturedImage, PermissionService};
use crate::core::error::CameraError;
use crate::flow::CameraFlowController;

/// Result of one presentation of the capture UI
enum CaptureOutcome {
    /// Dialog dismissed without an image
    Dismissed,
    /// A photo was captured and decoded
    Image(CapturedImage),
    /// The picked file could not be decoded
    Failed,
}

/// Present the capture UI and feed the result back into the flow.
///
/// Runs the dialog and the decode on a blocking task, then requests a
/// repaint so the UI picks up the new state.
pub async fn run_capture_ui<P, A>(flow: Arc<CameraFlowController<P, A>>, ctx: egui::Context)
where
    P: PermissionService + 'static,
    A: CaptureAvailability + 'static,
{
    let outcome = match tokio::task::spawn_blocking(pick_and_decode).await {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!("Capture UI task failed: {}", e);
            CaptureOutcome::Failed
        }
    };

    match outcome {
        CaptureOutcome::Dismissed => flow.on_capture_ui_result(None),
        CaptureOutcome::Image(image) => flow.on_capture_ui_result(Some(image)),
        CaptureOutcome::Failed => flow.report_capture_error(CameraError::CaptureFailure),
    }

    ctx.request_repaint();
}

fn pick_and_decode() -> CaptureOutcome {
    let Some(path) = show_capture_dialog() else {
        debug!("Capture UI dismissed without an image");
        return CaptureOutcome::Dismissed;
    };

    match decode_capture(&path) {
        Some(image) => CaptureOutcome::Image(image),
        None => CaptureOutcome::Failed,
    }
}

fn show_capture_dialog() -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Take Photo")
        .add_filter("Images", &["png", "jpg", "jpeg"]);

    if let Some(pictures) = dirs::picture_dir() {
        dialog = dialog.set_directory(pictures);
    }

    dialog.pick_file()
}

fn decode_capture(path: &Path) -> Option<CapturedImage> {
    let decoded = match image::open(path) {
        Ok(decoded) => decoded,
        Err(e) => {
            warn!("Failed to decode {}: {}", path.display(), e);
            return None;
        }
    };

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    CapturedImage::from_rgba(width, height, rgba.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_decode_capture_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo.png");

        let buffer = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
        buffer.save(&path).unwrap();

        let captured = decode_capture(&path).expect("valid png must decode");
        assert_eq!(captured.width(), 3);
        assert_eq!(captured.height(), 2);
        assert_eq!(&captured.rgba()[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_decode_capture_rejects_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        assert!(decode_capture(&path).is_none());
    }

    #[test]
    fn test_decode_capture_missing_file() {
        let dir = tempdir().unwrap();
        assert!(decode_capture(&dir.path().join("absent.png")).is_none());
    }
}
