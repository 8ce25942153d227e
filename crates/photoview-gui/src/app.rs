use std::sync::mpsc;

use photoview_core::Size;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{UIState, ViewSettings, ViewportState};
use crate::worker;

pub struct PhotoViewApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub settings: ViewSettings,
    pub show_about: bool,
}

impl PhotoViewApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        let mut ui_state = UIState::default();
        let settings = match ViewSettings::load_default() {
            Ok((settings, Some(path))) => {
                ui_state.add_log(format!("Settings loaded from {}", path.display()));
                settings
            }
            Ok((settings, None)) => settings,
            Err(e) => {
                tracing::warn!("{e:#}");
                ui_state.add_log(format!("ERROR: {e:#}"));
                ViewSettings::default()
            }
        };

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state,
            viewport: ViewportState::default(),
            settings,
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded {
                    path,
                    image,
                    source_size,
                } => {
                    self.ui_state.add_log(format!(
                        "Opened: {} ({}x{}, shown at {}x{})",
                        path.display(),
                        source_size[0],
                        source_size[1],
                        image.size[0],
                        image.size[1],
                    ));
                    self.update_viewport_texture(ctx, image, &path);
                    self.ui_state.file_path = Some(path);
                    self.ui_state.source_size = Some(source_size);
                }
                WorkerResult::SettingsImported { path, settings } => {
                    self.ui_state
                        .add_log(format!("Settings imported from {}", path.display()));
                    self.settings = settings;
                    self.viewport.reset_controller();
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn update_viewport_texture(
        &mut self,
        ctx: &egui::Context,
        image: egui::ColorImage,
        path: &std::path::Path,
    ) {
        let ppp = ctx.pixels_per_point();
        let size = image.size;
        let texture = ctx.load_texture("viewport", image, egui::TextureOptions::LINEAR);
        self.viewport.texture = Some(texture);
        self.viewport.bitmap = Some(Size::new(size[0] as f32 / ppp, size[1] as f32 / ppp));
        self.viewport.viewing_label = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.viewport.reset_controller();
    }
}

impl eframe::App for PhotoViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Photo View")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Photo View");
                        ui.label("Zoomable, pannable single-image viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
