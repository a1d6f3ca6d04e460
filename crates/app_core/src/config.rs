//! Application configuration

use crate::filter::FilterLabels;
use crate::i18n::Language;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub gallery: GalleryConfig,
    pub contact: ContactConfig,
    pub links: LinksConfig,
    pub keybindings: HashMap<String, Vec<String>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            gallery: GalleryConfig::default(),
            contact: ContactConfig::default(),
            links: LinksConfig::default(),
            keybindings: default_keybindings(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Language used when no valid preference is stored (`en` or `gr`)
    pub default_language: String,
    pub theme: String,
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            theme: "dark".to_string(),
            title: "Vayia Vs".to_string(),
            window_width: 1280,
            window_height: 860,
        }
    }
}

impl GeneralConfig {
    pub fn default_language(&self) -> Language {
        self.default_language.parse().unwrap_or_else(|_| {
            tracing::warn!(
                value = %self.default_language,
                "Unknown default_language in config, using en"
            );
            Language::En
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub images_dir: PathBuf,
    /// Address prefix of image resources
    pub base_path: String,
    pub hero_image: String,
    pub portrait_image: String,
    pub watermark_image: String,
    /// Longest edge of decoded gallery tiles, in pixels
    pub thumbnail_size: u32,
    /// Longest edge of decoded lightbox images, in pixels
    pub full_size: u32,
    pub filter_labels: FilterLabels,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("public/images"),
            base_path: "/images".to_string(),
            hero_image: "hero.jpg".to_string(),
            portrait_image: "vayia.JPEG".to_string(),
            watermark_image: "MYWATERMARK.png".to_string(),
            thumbnail_size: 640,
            full_size: 2400,
            filter_labels: FilterLabels::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Form-handling service URL; the form is disabled without one
    pub endpoint: Option<String>,
    pub form_name: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            form_name: "contact".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    pub instagram: String,
    pub behance: Option<String>,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            instagram: "https://www.instagram.com/vayiavs/".to_string(),
            behance: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default file
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, defaults if it does not exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            tracing::info!("Configuration loaded from {:?}", path);
            Ok(config)
        } else {
            tracing::info!("Using default configuration");
            Ok(Self::default())
        }
    }

    /// Save configuration to the default file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        tracing::info!("Configuration saved to {:?}", path);
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("com", "PortfolioViewer", "PortfolioViewer")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("./config.toml"))
    }
}

fn default_keybindings() -> HashMap<String, Vec<String>> {
    let mut kb = HashMap::new();

    // Lightbox (only live while it is open)
    kb.insert("lightbox.next".into(), vec!["Right".into()]);
    kb.insert("lightbox.prev".into(), vec!["Left".into()]);
    kb.insert("lightbox.close".into(), vec!["Escape".into()]);

    // App
    kb.insert("app.quit".into(), vec!["Ctrl+q".into()]);

    kb
}
