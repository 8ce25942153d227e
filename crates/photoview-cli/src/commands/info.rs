use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use photoview_core::{Size, TransformController};

use super::{load_config, parse_size};
use crate::summary::print_bounds_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Image file to inspect (dimensions are read from its header)
    pub image: Option<PathBuf>,

    /// Viewport size as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size)]
    pub viewport: Size,

    /// Bitmap size as WIDTHxHEIGHT, used instead of an image file
    #[arg(long, value_parser = parse_size)]
    pub bitmap: Option<Size>,

    /// View config TOML
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let bitmap = match (&args.image, args.bitmap) {
        (_, Some(size)) => size,
        (Some(path), None) => {
            let (w, h) = image::image_dimensions(path)
                .with_context(|| format!("Failed to read image header {}", path.display()))?;
            Size::new(w as f32, h as f32)
        }
        (None, None) => bail!("either an IMAGE or --bitmap is required"),
    };
    let config = load_config(args.config.as_deref())?;
    let controller = TransformController::new(args.viewport, bitmap, config)?;

    print_bounds_summary(args.image.as_deref(), &controller);
    Ok(())
}
