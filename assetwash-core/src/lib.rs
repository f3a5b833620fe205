//! # assetwash-core
//!
//! Batch cleanup primitives for a game's PNG asset catalog.
//!
//! ## Features
//! - Near-white background removal across a catalog tree, in place
//! - Placeholder icon rendering (white disc on a transparent canvas)
//! - Recursive catalog traversal with a file-name skip list
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use assetwash_core::{png_files, wash_file, WashOutcome, WHITE_THRESHOLD};
//!
//! fn main() {
//!     let skip = vec!["background.png".to_string()];
//!     let files = png_files(Path::new("Assets.xcassets"), &skip).unwrap();
//!
//!     for path in files {
//!         match wash_file(&path, WHITE_THRESHOLD) {
//!             Ok(WashOutcome::Cleaned) => println!("Processed: {}", path.display()),
//!             Ok(WashOutcome::Unchanged) => {}
//!             Err(e) => println!("Error processing {}: {}", path.display(), e),
//!         }
//!     }
//! }
//! ```

pub mod catalog;
pub mod placeholder;
pub mod wash;

// Catalog traversal
pub use catalog::{png_files, CatalogError};

// Placeholder icon
pub use placeholder::{render_disc, write_placeholder, PlaceholderError, ICON_MARGIN, ICON_SIZE};

// Background wash
pub use wash::{scrub_pixels, wash_file, WashError, WashOutcome, WHITE_THRESHOLD};
