//! Project configuration (tilegrid.yaml) parsing.
//!
//! The configuration names the template to load and extends the glyph
//! legend:
//!
//! ```yaml
//! template: levels/start.grid
//! legend:
//!   "o": { icon: "O", bg: "#336699" }
//!   "x": { icon: "X", bg: gray }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::parser::{token_glyph, DEFAULT_TEMPLATE};
use crate::types::{Colour, Legend, Tile};

/// Configuration file name looked up in the working directory.
pub const CONFIG_FILENAME: &str = "tilegrid.yaml";

/// Project configuration loaded from tilegrid.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Template file, relative to the configuration file.
    pub template: Option<PathBuf>,

    /// Legend entries added on top of the built-in legend.
    pub legend: BTreeMap<String, TileConfig>,

    /// Directory the configuration was loaded from.
    #[serde(skip)]
    pub root: Option<PathBuf>,
}

/// A legend entry as written in the configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    pub icon: Option<String>,
    pub bg: Option<String>,
}

impl TileConfig {
    fn to_tile(&self) -> Result<Tile> {
        let bg = self.bg.as_deref().map(Colour::parse).transpose()?;
        Ok(Tile {
            icon: self.icon.clone(),
            bg,
        })
    }
}

impl Config {
    /// Load configuration from a tilegrid.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GridError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read configuration: {}", e),
        })?;

        let mut config = Self::parse(&content)?;
        config.root = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Load `tilegrid.yaml` from a directory if it exists.
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| GridError::Parse {
            message: format!("Invalid configuration: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// The built-in legend extended with the configured entries.
    pub fn legend(&self) -> Result<Legend> {
        let mut legend = Legend::default();

        for (key, entry) in &self.legend {
            let glyph = token_glyph(key).ok_or_else(|| GridError::Parse {
                message: format!("Legend key '{}' must be a single character", key),
                help: Some("Quote single glyphs, e.g. \"o\": { icon: O }".to_string()),
            })?;
            legend.insert(glyph, entry.to_tile()?);
        }

        Ok(legend)
    }

    /// Path of the configured template, resolved against the config directory.
    pub fn template_path(&self) -> Option<PathBuf> {
        let template = self.template.as_ref()?;
        Some(match &self.root {
            Some(root) if template.is_relative() => root.join(template),
            _ => template.clone(),
        })
    }

    /// Read the configured template, or the built-in one.
    pub fn template_source(&self) -> Result<String> {
        match self.template_path() {
            Some(path) => read_template(&path),
            None => Ok(DEFAULT_TEMPLATE.to_string()),
        }
    }
}

/// Read a template file.
pub fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| GridError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read template: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_empty() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.legend().unwrap(), Legend::default());
    }

    #[test]
    fn test_parse_legend() {
        let config = Config::parse(
            r##"
legend:
  "o": { icon: "O", bg: "#336699" }
  "x": { icon: "*" }
  "~": { bg: yellow }
"##,
        )
        .unwrap();

        let legend = config.legend().unwrap();
        assert_eq!(legend.lookup('o'), Tile::new("O", Colour::rgb(0x33, 0x66, 0x99)));
        assert_eq!(legend.lookup('x'), Tile::empty().with_icon("*"));
        assert_eq!(legend.lookup('~'), Tile::empty().with_bg(Colour::YELLOW));
        assert_eq!(legend.lookup('.'), Tile::empty());
    }

    #[test]
    fn test_legend_key_must_be_single_char() {
        let config = Config::parse("legend:\n  \"ab\": { icon: A }\n").unwrap();

        let err = config.legend().unwrap_err().to_string();
        assert!(err.contains("single character"));
    }

    #[test]
    fn test_legend_bad_colour() {
        let config = Config::parse("legend:\n  \"o\": { bg: nope }\n").unwrap();
        assert!(config.legend().is_err());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = Config::parse("legend: [").unwrap_err().to_string();
        assert!(err.contains("Invalid configuration"));
    }

    #[test]
    fn test_default_template_source() {
        let config = Config::default();
        assert_eq!(config.template_source().unwrap(), DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_load_resolves_template_relative_to_config() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("start.grid"), "x .\n. .\n").unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "template: start.grid\n").unwrap();

        let config = Config::discover(dir.path()).unwrap().unwrap();

        assert_eq!(config.template_path(), Some(dir.path().join("start.grid")));
        assert_eq!(config.template_source().unwrap(), "x .\n. .\n");
    }

    #[test]
    fn test_discover_missing() {
        let dir = tempdir().unwrap();
        assert!(Config::discover(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_missing_template_file() {
        let config = Config {
            template: Some(PathBuf::from("/nonexistent/start.grid")),
            ..Config::default()
        };

        let err = config.template_source().unwrap_err().to_string();
        assert!(err.contains("Failed to read template"));
    }
}
