use crate::app::PhotoViewApp;

pub fn show(ctx: &egui::Context, app: &mut PhotoViewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area: fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(ref path) = app.ui_state.file_path {
                ui.label(path.display().to_string());
                ui.separator();
            }
            if let Some(size) = app.ui_state.source_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
            }
            match app.viewport.controller.as_ref() {
                Some(controller) => {
                    let state = controller.state();
                    let offset = state.offset();
                    ui.label(format!("Scale: {:.3}", state.scale()));
                    ui.separator();
                    ui.label(state.zoom_state().to_string());
                    ui.separator();
                    ui.label(format!("Offset: ({:.0}, {:.0})", offset.x, offset.y));
                    if controller.is_animating() {
                        ui.separator();
                        ui.spinner();
                    }
                }
                None => {
                    ui.label("No image");
                }
            }
        });

        ui.add_space(2.0);
    });
}
