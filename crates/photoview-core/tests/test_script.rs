use approx::assert_relative_eq;

use photoview_core::script::{replay, Gesture, GestureScript, TimedGesture};
use photoview_core::{PhotoViewConfig, PhotoViewError, Size};

const DOUBLE_TAP_PAIR: &str = r#"
viewport = { width = 1000.0, height = 1000.0 }
bitmap = { width = 1000.0, height = 2000.0 }
frame_interval_ms = 20

[[events]]
at_ms = 0
kind = "double_tap"
x = 800.0
y = 500.0

[[events]]
at_ms = 1000
kind = "double_tap"
x = 200.0
y = 200.0
"#;

fn event(at_ms: u64, gesture: Gesture) -> TimedGesture {
    TimedGesture { at_ms, gesture }
}

fn tall_script(events: Vec<TimedGesture>) -> GestureScript {
    GestureScript {
        viewport: Size::new(1000.0, 1000.0),
        bitmap: Size::new(1000.0, 2000.0),
        frame_interval_ms: 16,
        events,
    }
}

#[test]
fn test_parse_script_from_toml() {
    let script: GestureScript = toml::from_str(DOUBLE_TAP_PAIR).unwrap();
    assert_eq!(script.frame_interval_ms, 20);
    assert_eq!(script.events.len(), 2);
    assert_eq!(
        script.events[0].gesture,
        Gesture::DoubleTap { x: 800.0, y: 500.0 }
    );
}

#[test]
fn test_frame_interval_defaults() {
    let script: GestureScript = toml::from_str(
        "viewport = { width = 10.0, height = 10.0 }\nbitmap = { width = 5.0, height = 5.0 }\n",
    )
    .unwrap();
    assert_eq!(script.frame_interval_ms, 16);
    assert!(script.events.is_empty());
}

#[test]
fn test_replay_double_tap_pair_settles_at_min() {
    let script: GestureScript = toml::from_str(DOUBLE_TAP_PAIR).unwrap();
    let samples = replay(&script, &PhotoViewConfig::default()).unwrap();

    let first = &samples[0];
    assert_eq!(first.at_ms, 0);
    assert!(first.gesture.is_none());
    assert_relative_eq!(first.scale, 0.5);

    let before_second = samples
        .iter()
        .rev()
        .find(|s| s.at_ms < 1000)
        .unwrap();
    assert_relative_eq!(before_second.scale, 1.5);
    assert!(before_second.enlarged);
    assert_relative_eq!(before_second.offset.x, -250.0);

    let last = samples.last().unwrap();
    assert_relative_eq!(last.scale, 0.5);
    assert!(!last.enlarged);
    assert_eq!(last.dx, 0.0);
    assert!(last.at_ms > 1000);
}

#[test]
fn test_replay_samples_are_time_ordered() {
    let script = tall_script(vec![
        event(0, Gesture::PinchBegin),
        event(10, Gesture::PinchUpdate { factor: 4.0 }),
        event(20, Gesture::PinchEnd),
        event(30, Gesture::Drag { dx: 0.0, dy: -50.0 }),
        event(40, Gesture::Fling { vx: 0.0, vy: 2000.0 }),
    ]);
    let samples = replay(&script, &PhotoViewConfig::default()).unwrap();
    for w in samples.windows(2) {
        assert!(w[1].at_ms >= w[0].at_ms);
    }
    let drag = samples
        .iter()
        .find(|s| matches!(s.gesture, Some(Gesture::Drag { .. })))
        .unwrap();
    assert_relative_eq!(drag.offset.y, 50.0);

    let last = samples.last().unwrap();
    assert!(last.offset.y > 50.0);
    assert!(last.offset.y <= 1000.0 + 1e-2);
}

#[test]
fn test_replay_drag_before_zoom_is_ignored() {
    let script = tall_script(vec![event(0, Gesture::Drag { dx: 30.0, dy: 30.0 })]);
    let samples = replay(&script, &PhotoViewConfig::default()).unwrap();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[1].offset.x, 0.0);
    assert_eq!(samples[1].offset.y, 0.0);
}

#[test]
fn test_replay_rejects_out_of_order_events() {
    let script = tall_script(vec![
        event(100, Gesture::PinchBegin),
        event(50, Gesture::PinchEnd),
    ]);
    let err = replay(&script, &PhotoViewConfig::default()).unwrap_err();
    assert!(matches!(err, PhotoViewError::Script(_)), "got: {err}");
}

#[test]
fn test_replay_rejects_zero_frame_interval() {
    let mut script = tall_script(vec![]);
    script.frame_interval_ms = 0;
    assert!(replay(&script, &PhotoViewConfig::default()).is_err());
}

#[test]
fn test_gesture_display() {
    assert_eq!(format!("{}", Gesture::PinchUpdate { factor: 1.5 }), "pinch x1.5");
    assert_eq!(
        format!("{}", Gesture::DoubleTap { x: 1.0, y: 2.0 }),
        "double tap @ (1, 2)"
    );
}
