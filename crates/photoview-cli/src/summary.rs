use std::path::Path;

use console::Style;
use photoview_core::script::{FrameSample, GestureScript};
use photoview_core::TransformController;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    gesture: Style,
    dim: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            gesture: Style::new().green(),
            dim: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(title.chars().count())));
    println!();
}

pub fn print_bounds_summary(image: Option<&Path>, controller: &TransformController) {
    let s = Styles::new();
    let state = controller.state();
    let config = controller.config();

    print_title(&s, "Photo View");

    if let Some(path) = image {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Image"),
            s.path.apply_to(path.display())
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Viewport"),
        s.value.apply_to(state.viewport())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Bitmap"),
        s.value.apply_to(state.bitmap())
    );
    println!();

    println!("  {}", s.header.apply_to("Zoom"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Min scale"),
        s.value.apply_to(format!("{:.4}", state.min_scale()))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Max scale"),
        s.value.apply_to(format!("{:.4}", state.max_scale()))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Animation"),
        s.value.apply_to(format!(
            "{} ms, {}",
            config.zoom_duration_ms, config.zoom_interpolator
        ))
    );
    println!();

    let bound = state.pan_bound();
    let centering = state.centering_offset();
    println!("  {}", s.header.apply_to("Pan"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Bound"),
        s.value.apply_to(format!("\u{00b1}{:.1} x \u{00b1}{:.1}", bound.x, bound.y))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Centering"),
        s.value.apply_to(format!("({:.1}, {:.1})", centering.x, centering.y))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Overfling"),
        s.value.apply_to(format!("{:.0} px", config.fling_bounce))
    );
    println!();
}

pub fn print_frame_table(
    script_path: &Path,
    script: &GestureScript,
    samples: &[FrameSample],
    every: usize,
) {
    let s = Styles::new();

    print_title(&s, "Gesture Replay");
    println!(
        "  {:<14}{}",
        s.label.apply_to("Script"),
        s.path.apply_to(script_path.display())
    );
    println!(
        "  {:<14}{} in {}",
        s.label.apply_to("Layout"),
        s.value.apply_to(script.bitmap),
        s.value.apply_to(script.viewport)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Frames"),
        s.value.apply_to(format!(
            "{} @ {} ms",
            samples.len(),
            script.frame_interval_ms
        ))
    );
    println!();

    println!(
        "  {}",
        s.header.apply_to(format!(
            "{:>8}  {:>8}  {:>9}  {:>9}  {:>9}  {:>9}  {}",
            "t (ms)", "scale", "dx", "dy", "offset.x", "offset.y", "event"
        ))
    );

    let last = samples.len().saturating_sub(1);
    for (i, sample) in samples.iter().enumerate() {
        if sample.gesture.is_none() && i % every != 0 && i != last {
            continue;
        }
        let event = match &sample.gesture {
            Some(g) => s.gesture.apply_to(g.to_string()),
            None if sample.enlarged => s.dim.apply_to("enlarged".to_string()),
            None => s.dim.apply_to(String::new()),
        };
        println!(
            "  {:>8}  {:>8.4}  {:>9.2}  {:>9.2}  {:>9.2}  {:>9.2}  {}",
            sample.at_ms, sample.scale, sample.dx, sample.dy, sample.offset.x, sample.offset.y, event
        );
    }
    println!();
}
