use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use photoview_core::script::{replay, GestureScript};
use tracing::info;

use super::load_config;
use crate::summary::print_frame_table;

#[derive(Args)]
pub struct ReplayArgs {
    /// Gesture script TOML
    pub script: PathBuf,

    /// View config TOML
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print only every Nth frame (gesture frames are always printed)
    #[arg(long, default_value = "1")]
    pub every: usize,
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let contents = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let script: GestureScript = toml::from_str(&contents).context("Invalid gesture script")?;
    let config = load_config(args.config.as_deref())?;

    info!(
        events = script.events.len(),
        viewport = %script.viewport,
        bitmap = %script.bitmap,
        "Replaying gesture script"
    );
    let samples = replay(&script, &config)?;

    print_frame_table(&args.script, &script, &samples, args.every.max(1));
    Ok(())
}
