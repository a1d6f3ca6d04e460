//! Catalog source - the one-shot listing of the images directory

use crate::{FsError, Result};
use std::fs;
use std::path::Path;

/// Extensions (lower-case) that may enter the catalog
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "avif"];

/// Options for listing the catalog
#[derive(Debug, Clone)]
pub struct CatalogOptions {
    /// Allowed extensions, compared case-insensitively
    pub extensions: Vec<String>,
    /// Require at least one `-` in the base name (title + tags)
    pub require_tags: bool,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            extensions: SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            require_tags: true,
        }
    }
}

/// List the file names that make up the catalog
///
/// Only regular files are returned. Names are sorted lexicographically so the
/// hand-off order is stable regardless of directory iteration order.
pub fn list_catalog<P: AsRef<Path>>(dir: P, options: &CatalogOptions) -> Result<Vec<String>> {
    let dir = dir.as_ref();

    if !dir.exists() {
        return Err(FsError::NotFound(dir.display().to_string()));
    }

    if !dir.is_dir() {
        return Err(FsError::InvalidPath(format!("Not a directory: {}", dir.display())));
    }

    let mut names = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }

        let name = match entry.file_name().into_string() {
            Ok(n) => n,
            Err(raw) => {
                tracing::warn!("Skipping non UTF-8 file name: {:?}", raw);
                continue;
            }
        };

        if !has_extension_in(&name, &options.extensions) {
            continue;
        }

        if options.require_tags && !has_tag_separator(&name) {
            continue;
        }

        names.push(name);
    }

    names.sort();

    tracing::info!(dir = %dir.display(), count = names.len(), "Catalog listed");
    Ok(names)
}

/// Check if a name carries one of the default supported extensions
pub fn has_supported_extension(name: &str) -> bool {
    extension_of(name)
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn has_extension_in(name: &str, extensions: &[String]) -> bool {
    extension_of(name)
        .map(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Check if the base name (extension removed) contains a `-`
pub fn has_tag_separator(name: &str) -> bool {
    strip_extension(name).contains('-')
}

fn extension_of(name: &str) -> Option<&str> {
    let dot = name.rfind('.')?;
    let ext = &name[dot + 1..];
    if ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}

fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if dot + 1 < name.len() => &name[..dot],
        _ => name,
    }
}
