use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for random search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchSettings {
    /// Random search samples a wall in `[0, walls)`.
    #[serde(default = "default_walls")]
    pub walls: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            walls: default_walls(),
        }
    }
}

/// Settings for printing pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Wrap width for printed pages (0 = no wrapping)
    #[serde(default = "default_line_width")]
    pub line_width: usize,
    /// Emit JSON instead of text
    #[serde(default)]
    pub json: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            json: false,
        }
    }
}

fn default_walls() -> u64 {
    4
}

fn default_line_width() -> usize {
    80
}

/// Effective configuration, loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryConfig {
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

/// A partial configuration file. Only the keys present override the base.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigOverrides {
    #[serde(default)]
    search: Option<SearchOverrides>,
    #[serde(default)]
    display: Option<DisplayOverrides>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchOverrides {
    walls: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct DisplayOverrides {
    line_width: Option<usize>,
    json: Option<bool>,
}

impl ConfigOverrides {
    /// Parses an override file from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads an override file from disk.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }
}

impl LibraryConfig {
    /// Parses a full configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in configuration bundled with the crate.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../library.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in settings (from the crate)
    /// 2. `~/.config/babel-addr/library.toml` (user overrides)
    /// 3. `./library.toml` (project-local overrides)
    ///
    /// Later files override earlier ones key by key. A file that fails to parse is
    /// skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("babel-addr").join("library.toml");
            config.merge_file(&user_config_path);
        }

        config.merge_file(Path::new("library.toml"));

        Ok(config)
    }

    fn merge_file(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match ConfigOverrides::load_from_file(path) {
            Ok(overrides) => {
                log::debug!("applying config overrides from {:?}", path);
                self.merge(overrides);
            }
            Err(e) => {
                log::warn!("Failed to load config from {:?}: {}", path, e);
            }
        }
    }

    /// Applies the keys present in `other` on top of this configuration.
    pub fn merge(&mut self, other: ConfigOverrides) {
        if let Some(search) = other.search {
            if let Some(walls) = search.walls {
                self.search.walls = walls;
            }
        }
        if let Some(display) = other.display {
            if let Some(width) = display.line_width {
                self.display.line_width = width;
            }
            if let Some(json) = display.json {
                self.display.json = json;
            }
        }
    }

    /// Checks the settings against the capacity of the library.
    ///
    /// `safe_walls` is the number of walls whose every page round-trips.
    pub fn validate(&self, safe_walls: u64) -> Result<(), String> {
        if self.search.walls == 0 {
            return Err("search.walls must be at least 1".to_string());
        }
        if self.search.walls > safe_walls {
            return Err(format!(
                "search.walls = {} exceeds the {} walls the library can address",
                self.search.walls, safe_walls
            ));
        }
        Ok(())
    }
}
