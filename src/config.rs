//! Configuration loading from catalog.toml

use serde::Deserialize;
use std::path::Path;

use assetwash_core::WHITE_THRESHOLD;

/// Root configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub placeholder: PlaceholderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            placeholder: PlaceholderConfig::default(),
        }
    }
}

/// Catalog wash configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Catalog root directory
    #[serde(default = "default_root")]
    pub root: String,
    /// File names never opened or modified
    #[serde(default = "default_skip")]
    pub skip: Vec<String>,
    /// Near-white cutoff; all three color channels must exceed this
    #[serde(default = "default_threshold")]
    pub threshold: u8,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            skip: default_skip(),
            threshold: default_threshold(),
        }
    }
}

fn default_root() -> String {
    "Assets.xcassets".to_string()
}

fn default_skip() -> Vec<String> {
    vec!["background.png".to_string()]
}

fn default_threshold() -> u8 {
    WHITE_THRESHOLD
}

/// Placeholder icon configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceholderConfig {
    /// Output path for the regenerated icon
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
        }
    }
}

fn default_output() -> String {
    "Assets.xcassets/placeholder.imageset/placeholder.png".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from the default path (catalog.toml in the current directory).
    ///
    /// The tool runs ad hoc inside a project checkout, so a missing file is
    /// not an error: the built-in defaults apply.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Path::new("catalog.toml");
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.catalog.root, "Assets.xcassets");
        assert_eq!(config.catalog.skip, vec!["background.png".to_string()]);
        assert_eq!(config.catalog.threshold, 240);
        assert_eq!(
            config.placeholder.output,
            "Assets.xcassets/placeholder.imageset/placeholder.png"
        );
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [catalog]
            root = "Sprites"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.root, "Sprites");
        assert_eq!(config.catalog.skip, vec!["background.png".to_string()]);
        assert_eq!(config.catalog.threshold, 240);
    }

    #[test]
    fn test_full_toml() {
        let config: Config = toml::from_str(
            r#"
            [catalog]
            root = "Art"
            skip = ["bg.png", "mask.png"]
            threshold = 230

            [placeholder]
            output = "Art/icon.png"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.root, "Art");
        assert_eq!(config.catalog.skip.len(), 2);
        assert_eq!(config.catalog.threshold, 230);
        assert_eq!(config.placeholder.output, "Art/icon.png");
    }
}
