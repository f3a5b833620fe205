//! Near-white background removal

use std::fs;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, Rgba, RgbaImage};
use thiserror::Error;

/// Default near-white cutoff. A pixel counts as background when all three
/// color channels are strictly above this value.
pub const WHITE_THRESHOLD: u8 = 240;

#[derive(Error, Debug)]
pub enum WashError {
    #[error("Failed to process image: {0}")]
    Image(#[from] image::ImageError),
    #[error("Failed to write file: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of washing a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WashOutcome {
    /// At least one background pixel matched and the file was rewritten.
    Cleaned,
    /// No background found; the file on disk was not touched.
    Unchanged,
}

/// Replace every near-white pixel with transparent white.
///
/// A pixel matches when red, green and blue are all strictly above
/// `threshold`; alpha plays no part in the test. Non-matching pixels are
/// left exactly as they were. Returns true when at least one pixel matched.
pub fn scrub_pixels(img: &mut RgbaImage, threshold: u8) -> bool {
    let mut changed = false;

    for pixel in img.pixels_mut() {
        let Rgba([r, g, b, _]) = *pixel;
        if r > threshold && g > threshold && b > threshold {
            *pixel = Rgba([255, 255, 255, 0]);
            changed = true;
        }
    }

    changed
}

/// Wash a single PNG file in place.
///
/// The image is decoded to RGBA8, scrubbed, and written back to the same
/// path only when a background pixel matched. Files with no near-white
/// pixels are left byte-for-byte unmodified.
pub fn wash_file(path: &Path, threshold: u8) -> Result<WashOutcome, WashError> {
    let mut img = image::open(path)?.into_rgba8();
    let (width, height) = img.dimensions();

    if !scrub_pixels(&mut img, threshold) {
        log::debug!("No background in {}", path.display());
        return Ok(WashOutcome::Unchanged);
    }

    // Encode fully before touching the destination; the rewrite is in place
    // and must not leave a truncated file behind on a codec error.
    let mut encoded = Vec::new();
    PngEncoder::new(&mut encoded).write_image(img.as_raw(), width, height, ColorType::Rgba8)?;
    fs::write(path, encoded)?;

    Ok(WashOutcome::Cleaned)
}
