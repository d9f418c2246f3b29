//! Camera capture screen
//!
//! An eframe app that renders the flow controller's observable state each
//! frame: a primary action button (disabled while the flow is busy), the
//! captured photo with a retake button, and modal alerts with up to two
//! actions. Async work (the permission prompt, the capture UI) runs on a
//! tokio runtime owned by the app; the UI only polls.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context};
use log::info;

use crate::capture::{settings, SystemCaptureAvailability, SystemPermissionService};
use crate::core::config::{self, Config};
use crate::flow::{AlertActionKind, CameraFlowController, CaptureState};
use crate::ui::picker;

/// Flow controller wired to the system services
pub type SystemFlowController =
    CameraFlowController<SystemPermissionService, SystemCaptureAvailability>;

/// Launch the capture GUI and block until the window closes
pub fn run_app(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let store_path = config::get_permission_store_path()
        .ok_or_else(|| anyhow!("could not determine a configuration directory"))?;
    let permissions = SystemPermissionService::new(store_path, config.camera.policy_locked);
    let availability = SystemCaptureAvailability::with_override(config.camera.force_available);
    let flow = Arc::new(CameraFlowController::new(permissions, availability));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };

    info!("Starting capture UI");
    let dark_mode = config.ui.dark_mode;
    eframe::run_native(
        "Camera Capture",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(if dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            Ok(Box::new(CaptureApp::new(flow, runtime)))
        }),
    )
    .map_err(|e| anyhow!("UI error: {e}"))
}

/// The capture screen
pub struct CaptureApp {
    flow: Arc<SystemFlowController>,
    runtime: tokio::runtime::Runtime,
    /// Uploaded preview of the captured photo; present only while `Captured`
    preview: Option<egui::TextureHandle>,
}

impl CaptureApp {
    fn new(flow: Arc<SystemFlowController>, runtime: tokio::runtime::Runtime) -> Self {
        Self {
            flow,
            runtime,
            preview: None,
        }
    }

    /// Keep the preview texture in sync with the controller's image
    fn sync_preview(&mut self, ctx: &egui::Context, state: &CaptureState) {
        if *state != CaptureState::Captured {
            self.preview = None;
            return;
        }

        if self.preview.is_none() {
            if let Some(image) = self.flow.image() {
                let size = [image.width() as usize, image.height() as usize];
                let pixels = egui::ColorImage::from_rgba_unmultiplied(size, image.rgba());
                self.preview =
                    Some(ctx.load_texture("captured-photo", pixels, egui::TextureOptions::LINEAR));
            }
        }
    }

    fn spawn_capture_request(&self, ctx: &egui::Context) {
        let flow = Arc::clone(&self.flow);
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            flow.request_capture().await;
            ctx.request_repaint();
        });
    }

    fn show_alert(&self, ctx: &egui::Context) {
        let Some(alert) = self.flow.alert() else {
            return;
        };

        egui::Window::new(alert.title.clone())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(&alert.message);
                ui.add_space(8.0);

                let mut chosen = None;
                ui.horizontal(|ui| {
                    if let Some(primary) = &alert.primary {
                        if ui.button(&primary.label).clicked() {
                            chosen = Some(primary.kind);
                        }
                    }
                    if let Some(secondary) = &alert.secondary {
                        if ui.button(&secondary.label).clicked() {
                            chosen = Some(secondary.kind);
                        }
                    }
                });

                if let Some(kind) = chosen {
                    if kind == AlertActionKind::OpenSettings {
                        settings::open_camera_settings();
                    }
                    self.flow.acknowledge_alert();
                }
            });
    }
}

impl eframe::App for CaptureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The controller signals capture exactly once per attempt.
        if self.flow.take_capture_request() {
            let flow = Arc::clone(&self.flow);
            self.runtime.spawn(picker::run_capture_ui(flow, ctx.clone()));
        }

        let state = self.flow.state();
        self.sync_preview(ctx, &state);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.heading("Camera");
                ui.label(state.label());
                ui.add_space(16.0);

                if state == CaptureState::Captured {
                    if let Some(texture) = &self.preview {
                        let max = ui.available_size() - egui::vec2(0.0, 64.0);
                        ui.add(egui::Image::new(texture).max_size(max));
                    }
                    ui.add_space(12.0);
                    if ui
                        .add(egui::Button::new("Retake").min_size(egui::vec2(160.0, 36.0)))
                        .clicked()
                    {
                        self.flow.retake();
                    }
                } else {
                    if state.is_busy() {
                        ui.spinner();
                        ui.add_space(8.0);
                    }

                    let button = egui::Button::new("Take Photo").min_size(egui::vec2(160.0, 36.0));
                    if ui.add_enabled(!state.is_busy(), button).clicked() {
                        self.spawn_capture_request(ctx);
                    }
                }
            });
        });

        self.show_alert(ctx);

        // Keep polling while an operation is in flight.
        if state.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
