use crate::app::PhotoViewApp;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::states::{ViewSettings, DEFAULT_SETTINGS_FILE};

pub fn show(ctx: &egui::Context, app: &mut PhotoViewApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_file(ctx, app);
                }

                ui.separator();

                if ui.button("Import Settings...").clicked() {
                    ui.close();
                    import_settings(ctx, app);
                }

                if ui.button("Export Settings...").clicked() {
                    ui.close();
                    export_settings(ctx, app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset Zoom").clicked() {
                    ui.close();
                    app.viewport.reset_controller();
                }
                if ui.button("Reset Settings").clicked() {
                    ui.close();
                    app.settings = ViewSettings::default();
                    app.viewport.reset_controller();
                    app.ui_state.add_log("Settings reset to defaults".into());
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_file(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_file(ctx: &egui::Context, app: &mut PhotoViewApp) {
    let cmd_tx = app.cmd_tx.clone();
    let target_width = app.settings.target_width(ctx.pixels_per_point());
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadImage { path, target_width });
        }
    });
}

fn import_settings(ctx: &egui::Context, app: &mut PhotoViewApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let result = match ViewSettings::load(&path) {
            Ok(settings) => WorkerResult::SettingsImported { path, settings },
            Err(e) => WorkerResult::Error {
                message: format!("{e:#}"),
            },
        };
        let _ = result_tx.send(result);
        ctx.request_repaint();
    });
}

fn export_settings(ctx: &egui::Context, app: &mut PhotoViewApp) {
    let settings = app.settings.clone();
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name(DEFAULT_SETTINGS_FILE)
            .save_file()
        {
            let result = match settings.save(&path) {
                Ok(()) => WorkerResult::Log {
                    message: format!("Settings saved to {}", path.display()),
                },
                Err(e) => WorkerResult::Error {
                    message: format!("{e:#}"),
                },
            };
            let _ = result_tx.send(result);
            ctx.request_repaint();
        }
    });
}
