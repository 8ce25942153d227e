use std::time::Duration;

use photoview_core::{Size, TransformController, Vec2};

use crate::app::PhotoViewApp;
use crate::states::{PinchState, ViewSettings};

/// Release speed below which a drag ends without a fling, in points/s.
const MIN_FLING_VELOCITY: f32 = 50.0;

pub fn show(ctx: &egui::Context, app: &mut PhotoViewApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let (Some(texture_id), Some(bitmap)) = (
            app.viewport.texture.as_ref().map(|t| t.id()),
            app.viewport.bitmap,
        ) else {
            show_placeholder(ui);
            return;
        };

        let viewport = Size::new(rect.width(), rect.height());
        let view = &mut app.viewport;
        let controller = match sync_layout(&mut view.controller, viewport, bitmap, &app.settings) {
            Ok(controller) => controller,
            Err(e) => {
                // A collapsed panel reports a zero size; wait for a real one.
                tracing::debug!("Skipping layout: {e}");
                return;
            }
        };

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
        let now = Duration::from_secs_f64(ui.input(|i| i.time));

        let mut redraw = handle_pinch(ui, &response, controller, &mut view.pinch);
        if !view.pinch.active {
            redraw |= handle_drag(ui, &response, controller, now);
            redraw |= handle_double_click(&response, rect, controller, now);
        }
        redraw |= controller.tick(now);
        if redraw || controller.is_animating() {
            ctx.request_repaint();
        }

        draw_image(ui, texture_id, rect, controller);
        draw_viewing_label(ui, rect, &view.viewing_label);
    });
}

/// Build the controller on first use and rebuild it when the panel or
/// bitmap size changes.
fn sync_layout<'a>(
    slot: &'a mut Option<TransformController>,
    viewport: Size,
    bitmap: Size,
    settings: &ViewSettings,
) -> photoview_core::Result<&'a mut TransformController> {
    match slot {
        Some(controller) => {
            let state = controller.state();
            if state.viewport() != viewport || state.bitmap() != bitmap {
                controller.on_layout(viewport, bitmap)?;
            }
            Ok(controller)
        }
        None => Ok(slot.insert(TransformController::new(
            viewport,
            bitmap,
            settings.view.clone(),
        )?)),
    }
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Multi-touch zoom and Ctrl+scroll both arrive as `zoom_delta`.
fn handle_pinch(
    ui: &egui::Ui,
    response: &egui::Response,
    controller: &mut TransformController,
    pinch: &mut PinchState,
) -> bool {
    let zoom_delta = if response.hovered() || pinch.active {
        ui.input(|i| i.zoom_delta())
    } else {
        1.0
    };

    if zoom_delta != 1.0 {
        let mut redraw = false;
        if pinch.accumulate(zoom_delta) {
            redraw |= controller.on_scale_begin();
        }
        redraw |= controller.on_scale_update(pinch.factor);
        return redraw;
    }

    let touching = ui.input(|i| i.multi_touch().is_some());
    if pinch.active && !touching {
        pinch.finish();
        controller.on_scale_end();
    }
    false
}

fn handle_drag(
    ui: &egui::Ui,
    response: &egui::Response,
    controller: &mut TransformController,
    now: Duration,
) -> bool {
    let mut redraw = false;

    if response.dragged_by(egui::PointerButton::Primary) {
        let delta = response.drag_delta();
        if delta != egui::Vec2::ZERO {
            // The controller takes previous minus current position.
            redraw |= controller.on_drag(Vec2::new(-delta.x, -delta.y));
        }
    }

    if response.drag_stopped_by(egui::PointerButton::Primary) {
        let velocity = ui.input(|i| i.pointer.velocity());
        if velocity.length() >= MIN_FLING_VELOCITY {
            redraw |= controller.on_fling(Vec2::new(velocity.x, velocity.y), now);
        }
    }

    redraw
}

fn handle_double_click(
    response: &egui::Response,
    rect: egui::Rect,
    controller: &mut TransformController,
    now: Duration,
) -> bool {
    if !response.double_clicked() {
        return false;
    }
    let Some(pos) = response.interact_pointer_pos() else {
        return false;
    };
    let tap = pos - rect.min;
    controller.on_double_tap(Vec2::new(tap.x, tap.y), now)
}

fn draw_image(
    ui: &egui::Ui,
    texture_id: egui::TextureId,
    rect: egui::Rect,
    controller: &TransformController,
) {
    let (min, max) = controller.image_rect();
    let img_rect = egui::Rect::from_min_max(
        rect.min + egui::vec2(min.x, min.y),
        rect.min + egui::vec2(max.x, max.y),
    );
    ui.painter_at(rect).image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_viewing_label(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    if label.is_empty() {
        return;
    }
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
