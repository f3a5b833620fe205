//! Catalog traversal

use std::path::{Path, PathBuf};

use glob::glob;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Recursively collect the PNG files under `root`.
///
/// File names listed in `skip` are filtered out here, before any file is
/// opened. Entries the walk cannot read are logged and passed over.
pub fn png_files(root: &Path, skip: &[String]) -> Result<Vec<PathBuf>, CatalogError> {
    let root = root.to_string_lossy();
    let root = root.trim_end_matches('/');
    let pattern = format!("{}/**/*.png", root);

    let mut files = Vec::new();
    for entry in glob(&pattern)? {
        match entry {
            Ok(path) => {
                let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
                if skip.iter().any(|s| s == name) {
                    log::debug!("Skipping {} (skip list)", path.display());
                    continue;
                }
                files.push(path);
            }
            Err(e) => log::warn!("Cannot read {}: {}", e.path().display(), e),
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_pattern_is_rejected() {
        let result = png_files(Path::new("a[b"), &[]);
        assert!(matches!(result, Err(CatalogError::Pattern(_))));
    }
}
