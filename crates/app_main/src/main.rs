//! Portfolio Viewer - a photography portfolio in a native window
//!
//! Main entry point.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use anyhow::Result;
use app_core::{catalog_from_names, AppConfig, Catalog};
use app_fs::CatalogOptions;
use std::path::PathBuf;

fn main() -> Result<()> {
    // Initialize logging and panic hook first
    app_log::init()?;

    // Clean up old logs (7 days)
    if let Err(e) = app_log::cleanup_old_logs(7) {
        tracing::warn!("Failed to cleanup old logs: {}", e);
    }

    tracing::info!("Portfolio Viewer starting...");

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    let catalog = prepare_catalog(&mut config, std::env::args().nth(1));

    app::run(config, catalog)
}

/// Apply the optional images directory argument, then scan it
fn prepare_catalog(config: &mut AppConfig, images_arg: Option<String>) -> Catalog {
    if let Some(dir) = images_arg {
        config.gallery.images_dir = PathBuf::from(dir);
        tracing::info!(
            images_dir = %config.gallery.images_dir.display(),
            "Images directory overridden on the command line"
        );
    }
    scan_catalog(config)
}

/// One-shot listing of the images directory
///
/// A missing or unreadable directory leaves the gallery empty.
fn scan_catalog(config: &AppConfig) -> Catalog {
    match app_fs::list_catalog(&config.gallery.images_dir, &CatalogOptions::default()) {
        Ok(names) => {
            tracing::info!(count = names.len(), dir = %config.gallery.images_dir.display(), "Catalog loaded");
            catalog_from_names(names)
        }
        Err(e) => {
            tracing::error!(dir = %config.gallery.images_dir.display(), "Failed to list catalog: {}", e);
            catalog_from_names(Vec::<String>::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_overrides_images_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b-street.jpg"), b"").unwrap();
        std::fs::write(dir.path().join("a-landsc.png"), b"").unwrap();
        std::fs::write(dir.path().join("hero.jpg"), b"").unwrap();

        let mut config = AppConfig::default();
        let arg = dir.path().to_string_lossy().into_owned();
        let catalog = prepare_catalog(&mut config, Some(arg));

        assert_eq!(config.gallery.images_dir, dir.path());
        let names: Vec<&str> = catalog.iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["a-landsc.png", "b-street.jpg"]);
    }

    #[test]
    fn test_no_argument_keeps_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.gallery.images_dir = dir.path().join("missing");

        let catalog = prepare_catalog(&mut config, None);

        assert_eq!(config.gallery.images_dir, dir.path().join("missing"));
        assert!(catalog.is_empty());
    }
}
