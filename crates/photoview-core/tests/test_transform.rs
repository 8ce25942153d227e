mod common;

use approx::assert_relative_eq;

use photoview_core::{
    PhotoViewConfig, PhotoViewError, Size, TransformController, Vec2, ViewTransformState,
    ZoomState,
};

use common::{controller_with, tall_bitmap_controller};

// ---------------------------------------------------------------------------
// Initialization
// ---------------------------------------------------------------------------

#[test]
fn test_init_scale_range_for_many_sizes() {
    let sizes = [
        (320.0, 480.0),
        (1080.0, 1920.0),
        (1920.0, 1080.0),
        (1000.0, 1000.0),
        (1.0, 5000.0),
        (7.5, 3.25),
    ];
    for &(vw, vh) in &sizes {
        for &(bw, bh) in &sizes {
            let state =
                ViewTransformState::new(Size::new(vw, vh), Size::new(bw, bh), 1.5).unwrap();
            assert!(
                state.min_scale() <= state.max_scale(),
                "viewport {vw}x{vh}, bitmap {bw}x{bh}"
            );
            assert_eq!(state.scale(), state.min_scale());
            assert_eq!(state.offset(), Vec2::ZERO);
            assert!(!state.is_enlarged());
            assert_eq!(state.zoom_state(), ZoomState::AtMin);
        }
    }
}

#[test]
fn test_tall_bitmap_fits_by_height() {
    let c = tall_bitmap_controller();
    assert_relative_eq!(c.state().min_scale(), 0.5);
    assert_relative_eq!(c.state().max_scale(), 1.5);
}

#[test]
fn test_wide_bitmap_fits_by_width() {
    let c = controller_with(Size::new(1000.0, 1000.0), Size::new(2000.0, 1000.0));
    assert_relative_eq!(c.state().min_scale(), 0.5);
    assert_relative_eq!(c.state().max_scale(), 1.5);
}

#[test]
fn test_over_scale_factor_applies_to_max_only() {
    let config = PhotoViewConfig {
        over_scale_factor: 3.0,
        ..Default::default()
    };
    let c = TransformController::new(
        Size::new(800.0, 600.0),
        Size::new(400.0, 400.0),
        config,
    )
    .unwrap();
    // Bitmap aspect 1.0 < viewport aspect 1.33: fit by height.
    assert_relative_eq!(c.state().min_scale(), 1.5);
    assert_relative_eq!(c.state().max_scale(), 6.0);
}

#[test]
fn test_centering_offset() {
    let c = tall_bitmap_controller();
    assert_eq!(c.state().centering_offset(), Vec2::new(0.0, -500.0));
}

#[test]
fn test_pan_bound_uses_max_scale() {
    let c = tall_bitmap_controller();
    let bound = c.state().pan_bound();
    assert_relative_eq!(bound.x, 250.0);
    assert_relative_eq!(bound.y, 1000.0);
}

// ---------------------------------------------------------------------------
// Render transform
// ---------------------------------------------------------------------------

#[test]
fn test_render_transform_at_min_has_no_translation() {
    let c = tall_bitmap_controller();
    let t = c.render_transform();
    assert_eq!(t.dx, 0.0);
    assert_eq!(t.dy, 0.0);
    assert_eq!(t.scale, 0.5);
}

#[test]
fn test_image_rect_at_min_fills_height() {
    let c = tall_bitmap_controller();
    let (min, max) = c.image_rect();
    assert_relative_eq!(min.x, 250.0);
    assert_relative_eq!(min.y, 0.0);
    assert_relative_eq!(max.x, 750.0);
    assert_relative_eq!(max.y, 1000.0);
}

#[test]
fn test_map_point_scales_about_pivot_then_translates() {
    let t = photoview_core::RenderTransform {
        dx: 10.0,
        dy: -5.0,
        scale: 2.0,
    };
    let pivot = Vec2::new(100.0, 100.0);
    assert_eq!(t.map_point(pivot, pivot), Vec2::new(110.0, 95.0));
    assert_eq!(t.map_point(pivot, Vec2::new(150.0, 50.0)), Vec2::new(210.0, -5.0));
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_zero_viewport_rejected() {
    let err = TransformController::new(
        Size::new(0.0, 100.0),
        Size::new(10.0, 10.0),
        PhotoViewConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, PhotoViewError::InvalidDimensions { .. }), "got: {err}");
}

#[test]
fn test_nan_bitmap_rejected() {
    let err = TransformController::new(
        Size::new(100.0, 100.0),
        Size::new(f32::NAN, 10.0),
        PhotoViewConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, PhotoViewError::InvalidDimensions { .. }));
}

#[test]
fn test_failed_relayout_keeps_previous_state() {
    let mut c = tall_bitmap_controller();
    assert!(c.on_layout(Size::new(-1.0, 10.0), Size::new(10.0, 10.0)).is_err());
    assert_relative_eq!(c.state().min_scale(), 0.5);
}

#[test]
fn test_zoom_state_display() {
    assert_eq!(format!("{}", ZoomState::AtMin), "At Min");
    assert_eq!(format!("{}", ZoomState::Zoomed), "Zoomed");
}
