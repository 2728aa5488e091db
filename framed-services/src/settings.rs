// SPDX-License-Identifier: MIT OR Apache-2.0
use anyhow::Result;
use framed_theme::palette::Palette;
use serde::Deserialize;
use smol::fs;
use std::collections::HashMap;
use std::path::Path;
use xdg::BaseDirectories;

/// Prefix of the configuration directories (`~/.config/framed-0/` and friends).
pub const CONFIG_PREFIX: &str = "framed-0";

/// The main configuration structure for the application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General application settings
    #[serde(default)]
    pub general: GeneralSettings,
    /// Display settings (density)
    #[serde(default)]
    pub display: DisplaySettings,
    /// Window settings
    #[serde(default)]
    pub window: WindowSettings,
    /// Any other sections are captured here
    #[serde(flatten)]
    pub other: HashMap<String, toml::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralSettings {
    pub debug: Option<bool>,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplaySettings {
    /// Multiplier from density-independent units to physical pixels.
    pub density: Option<f32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindowSettings {
    pub title: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl Config {
    /// Parse a single configuration document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}

/// Registry for managing application settings.
pub struct SettingsRegistry {
    config: Config,
    pub palette: Palette,
}

impl SettingsRegistry {
    /// Create a new SettingsRegistry and load configuration from standard locations.
    pub async fn new() -> Result<Self> {
        let mut registry = Self::defaults();
        registry.load().await?;
        Ok(registry)
    }

    /// A registry holding only built-in defaults, without touching the filesystem.
    pub fn defaults() -> Self {
        Self {
            config: Config {
                general: GeneralSettings {
                    debug: Some(false),
                    log_level: None,
                },
                display: DisplaySettings::default(),
                window: WindowSettings::default(),
                other: HashMap::new(),
            },
            palette: Palette::default(),
        }
    }

    /// Load configuration from standard locations in precedence order.
    ///
    /// Order (later overrides earlier):
    /// 1. System Data: /usr/share/framed-0/config.toml (and XDG_DATA_DIRS)
    /// 2. System Config: /etc/xdg/framed-0/config.toml (and XDG_CONFIG_DIRS)
    /// 3. User Config: ~/.config/framed-0/config.toml (XDG_CONFIG_HOME)
    ///
    /// The palette is read the same way from `palette.toml`.
    pub async fn load(&mut self) -> Result<()> {
        let xdg_dirs = BaseDirectories::with_prefix(CONFIG_PREFIX)?;

        self.load_config_type(&xdg_dirs, "config.toml").await;
        self.load_palette(&xdg_dirs).await;

        Ok(())
    }

    async fn load_config_type(&mut self, xdg_dirs: &BaseDirectories, filename: &str) {
        for path in xdg_dirs.find_data_files(filename).rev() {
            self.load_file(&path).await;
        }

        for path in xdg_dirs.find_config_files(filename).rev() {
            self.load_file(&path).await;
        }

        if let Some(user_config_path) = xdg_dirs.find_config_file(filename) {
            self.load_file(&user_config_path).await;
        }
    }

    async fn load_palette(&mut self, xdg_dirs: &BaseDirectories) {
        let palette_filename = "palette.toml";

        for path in xdg_dirs.find_data_files(palette_filename).rev() {
            self.load_palette_file(&path).await;
        }

        for path in xdg_dirs.find_config_files(palette_filename).rev() {
            self.load_palette_file(&path).await;
        }

        if let Some(user_palette_path) = xdg_dirs.find_config_file(palette_filename) {
            self.load_palette_file(&user_palette_path).await;
        }
    }

    async fn load_palette_file(&mut self, path: &Path) {
        log::info!("Loading palette from: {:?}", path);
        match fs::read_to_string(path).await {
            Ok(content) => match Palette::from_toml_str(&content) {
                Ok(palette) => self.palette = palette,
                Err(e) => {
                    log::warn!("Failed to parse palette {:?}: {}", path, e);
                },
            },
            Err(e) => {
                log::warn!("Failed to read palette {:?}: {}", path, e);
            },
        }
    }

    async fn load_file(&mut self, path: &Path) {
        log::info!("Loading config from: {:?}", path);
        match fs::read_to_string(path).await {
            Ok(content) => match toml::from_str::<Config>(&content) {
                Ok(loaded_config) => {
                    self.merge(loaded_config);
                },
                Err(e) => {
                    log::error!("Failed to parse config file {:?}: {}", path, e);
                },
            },
            Err(e) => {
                log::warn!("Failed to read config file {:?}: {}", path, e);
            },
        }
    }

    /// Merge a loaded config into the current config.
    pub fn merge(&mut self, other: Config) {
        if let Some(debug) = other.general.debug {
            self.config.general.debug = Some(debug);
        }
        if other.general.log_level.is_some() {
            self.config.general.log_level = other.general.log_level;
        }

        if let Some(density) = other.display.density {
            self.config.display.density = Some(density);
        }

        if other.window.title.is_some() {
            self.config.window.title = other.window.title;
        }
        if let Some(width) = other.window.width {
            self.config.window.width = Some(width);
        }
        if let Some(height) = other.window.height {
            self.config.window.height = Some(height);
        }

        self.config.other.extend(other.other);
    }

    /// Get the current configuration.
    pub fn get(&self) -> &Config {
        &self.config
    }

    /// Load configuration from custom paths, merging each one that parses.
    pub async fn load_from_paths(&mut self, paths: Vec<std::path::PathBuf>) -> Vec<Result<()>> {
        let mut results = Vec::new();

        for path in paths {
            let result = async {
                let content = fs::read_to_string(&path)
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to read config file {:?}: {}", path, e))?;

                let loaded_config = Config::from_toml_str(&content)
                    .map_err(|e| anyhow::anyhow!("Failed to parse config file {:?}: {}", path, e))?;

                self.merge(loaded_config);
                Ok::<(), anyhow::Error>(())
            }
            .await;

            results.push(result);
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_and_keeps() {
        let mut registry = SettingsRegistry::defaults();

        registry.merge(Config::from_toml_str("[display]\ndensity = 2.0\n[general]\ndebug = true").unwrap());
        registry.merge(Config::from_toml_str("[general]\ndebug = false").unwrap());

        assert_eq!(registry.get().display.density, Some(2.0));
        assert_eq!(registry.get().general.debug, Some(false), "Debug should be false");
    }

    #[test]
    fn test_unknown_sections_are_kept() {
        let config = Config::from_toml_str("[custom]\nkey = 1").unwrap();
        assert!(config.other.contains_key("custom"));
    }
}
