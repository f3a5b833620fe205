//! Placeholder icon rendering

use std::fs;
use std::path::Path;

use image::{Rgba, RgbaImage};
use thiserror::Error;

/// Edge length of the generated icon canvas.
pub const ICON_SIZE: u32 = 64;
/// Clearance between the disc and each canvas edge.
pub const ICON_MARGIN: u32 = 2;

#[derive(Error, Debug)]
pub enum PlaceholderError {
    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("Failed to create output directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Render an opaque white disc on a fully transparent canvas.
///
/// The disc is centered with `margin` pixels of clearance from every edge;
/// membership is judged at pixel centers, so the outermost `margin` rows and
/// columns stay transparent.
pub fn render_disc(size: u32, margin: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let center = size as f32 / 2.0;
    let radius = center - margin as f32;

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        if dx * dx + dy * dy <= radius * radius {
            *pixel = Rgba([255, 255, 255, 255]);
        }
    }

    img
}

/// Render the placeholder icon and write it to `path` as a PNG.
///
/// The parent directory is created when missing, so a deleted imageset can
/// be restored in one step.
pub fn write_placeholder(path: impl AsRef<Path>) -> Result<(), PlaceholderError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let img = render_disc(ICON_SIZE, ICON_MARGIN);
    img.save(path)?;

    log::debug!("Rendered {}x{} placeholder at {}", ICON_SIZE, ICON_SIZE, path.display());
    Ok(())
}
