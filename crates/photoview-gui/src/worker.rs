use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use anyhow::{Context, Result};
use image::imageops::FilterType;

use crate::convert::rgba_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("photoview-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(
        tx,
        ctx,
        WorkerResult::Log {
            message: msg.into(),
        },
    );
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: msg.into(),
        },
    );
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImage { path, target_width } => {
                handle_load_image(&path, target_width, &tx, &ctx);
            }
        }
    }
}

fn handle_load_image(
    path: &Path,
    target_width: u32,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    send_log(tx, ctx, format!("Loading {}", path.display()));
    let start = Instant::now();

    match load_scaled(path, target_width) {
        Ok((image, source_size)) => {
            tracing::info!(
                path = %path.display(),
                width = image.size[0],
                height = image.size[1],
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Image decoded"
            );
            send(
                tx,
                ctx,
                WorkerResult::ImageLoaded {
                    path: path.to_path_buf(),
                    image,
                    source_size,
                },
            );
        }
        Err(e) => send_error(tx, ctx, format!("Failed to load image: {e:#}")),
    }
}

/// Decode `path` and resample it so its width is `target_width`, keeping
/// the aspect ratio. A zero target keeps the decoded size.
fn load_scaled(path: &Path, target_width: u32) -> Result<(egui::ColorImage, [u32; 2])> {
    let img = image::open(path).with_context(|| format!("Failed to decode {}", path.display()))?;
    let (w, h) = (img.width(), img.height());
    anyhow::ensure!(w > 0 && h > 0, "image {} is empty", path.display());

    let scaled = if target_width == 0 || target_width == w {
        img
    } else {
        let target_height = scaled_height(w, h, target_width);
        img.resize_exact(target_width, target_height, FilterType::Triangle)
    };

    Ok((rgba_to_color_image(&scaled.to_rgba8()), [w, h]))
}

fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    let h = (height as f64 * target_width as f64 / width as f64).round() as u32;
    h.max(1)
}
