#[allow(dead_code)]
mod common;

use photoview_core::script::{replay, GestureScript};
use photoview_core::{PhotoViewConfig, TransformController, Vec2, ZoomState};

use common::{ms, settle, settle_with, tall_bitmap_controller};

const SESSION_SCRIPT: &str = r#"
viewport = { width = 1080.0, height = 1920.0 }
bitmap = { width = 600.0, height = 800.0 }

[[events]]
at_ms = 0
kind = "double_tap"
x = 100.0
y = 1800.0

[[events]]
at_ms = 400
kind = "drag"
dx = -40.0
dy = 25.0

[[events]]
at_ms = 420
kind = "fling"
vx = 6000.0
vy = -9000.0

[[events]]
at_ms = 700
kind = "pinch_begin"

[[events]]
at_ms = 716
kind = "pinch_update"
factor = 0.8

[[events]]
at_ms = 732
kind = "pinch_update"
factor = 0.2

[[events]]
at_ms = 748
kind = "pinch_end"
"#;

/// Scale inside [min, max]; offsets inside the pan bound plus overfling.
fn assert_in_range(c: &TransformController) {
    let s = c.state();
    let bound = s.pan_bound();
    let bounce = c.config().fling_bounce;
    assert!(s.scale() >= s.min_scale() - 1e-4, "scale {}", s.scale());
    assert!(s.scale() <= s.max_scale() + 1e-4, "scale {}", s.scale());
    assert!(s.offset().x.abs() <= bound.x + bounce + 1e-2, "offset {:?}", s.offset());
    assert!(s.offset().y.abs() <= bound.y + bounce + 1e-2, "offset {:?}", s.offset());
}

#[test]
fn test_full_session_keeps_state_in_range() {
    let mut c = tall_bitmap_controller();

    c.on_double_tap(Vec2::new(800.0, 500.0), ms(0));
    let mut t = settle_with(&mut c, 0, assert_in_range);
    assert_eq!(c.state().zoom_state(), ZoomState::Zoomed);

    for _ in 0..20 {
        c.on_drag(Vec2::new(15.0, -40.0));
        assert_in_range(&c);
    }

    c.on_fling(Vec2::new(-3000.0, -12_000.0), ms(t));
    t = settle_with(&mut c, t, assert_in_range);
    let bound = c.state().pan_bound();
    let offset = c.state().offset();
    assert!(offset.x.abs() <= bound.x + 1e-2);
    assert!(offset.y.abs() <= bound.y + 1e-2);

    c.on_scale_begin();
    c.on_scale_update(0.5);
    assert!(c.state().is_enlarged());
    c.on_scale_update(0.1);
    c.on_scale_end();
    assert_in_range(&c);
    assert!(!c.state().is_enlarged());
    let render = c.render_transform();
    assert_eq!(render.dx, 0.0);
    assert_eq!(render.dy, 0.0);

    c.on_double_tap(Vec2::new(100.0, 100.0), ms(t + 100));
    settle(&mut c, t + 100);
    assert!(c.state().is_enlarged());
    assert_eq!(c.state().scale(), c.state().max_scale());
}

#[test]
fn test_scripted_session_stays_in_range() {
    let script: GestureScript = toml::from_str(SESSION_SCRIPT).unwrap();
    let config = PhotoViewConfig::default();
    let samples = replay(&script, &config).unwrap();

    let probe =
        TransformController::new(script.viewport, script.bitmap, config.clone()).unwrap();
    let (min, max) = (probe.state().min_scale(), probe.state().max_scale());
    let bound = probe.state().pan_bound();

    for s in &samples {
        assert!(s.scale >= min - 1e-4 && s.scale <= max + 1e-4, "{s:?}");
        assert!(s.offset.x.abs() <= bound.x + config.fling_bounce + 1e-2, "{s:?}");
        assert!(s.offset.y.abs() <= bound.y + config.fling_bounce + 1e-2, "{s:?}");
    }

    let last = samples.last().unwrap();
    assert!(!last.enlarged);
    assert!((last.scale - min).abs() < 1e-4);
    assert_eq!(samples.iter().filter(|s| s.gesture.is_some()).count(), 7);
}
