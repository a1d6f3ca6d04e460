//! Image loading and decoding service
//!
//! Decoding runs on the rayon pool; finished images are collected by polling
//! from the UI thread once per frame.

use crate::AppError;
use crossbeam_channel::{Receiver, Sender};
use image::{GenericImageView, ImageReader};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Which rendition of an image is wanted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageVariant {
    /// Gallery tile
    Thumbnail,
    /// Lightbox / section image
    Full,
}

/// Identifies one decoded rendition
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageKey {
    pub name: String,
    pub variant: ImageVariant,
}

impl ImageKey {
    pub fn new(name: &str, variant: ImageVariant) -> Self {
        Self {
            name: name.to_string(),
            variant,
        }
    }
}

/// Decoded RGBA8 pixels
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Result of one load request
#[derive(Debug)]
pub struct LoadResult {
    pub key: ImageKey,
    pub image: Result<LoadedImage, AppError>,
}

/// Image loader service
pub struct ImageLoader {
    tx: Sender<LoadResult>,
    rx: Receiver<LoadResult>,
    pending: HashSet<ImageKey>,
}

impl ImageLoader {
    pub fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            tx,
            rx,
            pending: HashSet::new(),
        }
    }

    /// Queue a decode of `path`, bounded to `max_edge` pixels on the long side
    ///
    /// Returns `false` if the same key is already being decoded.
    pub fn request(&mut self, key: ImageKey, path: PathBuf, max_edge: Option<u32>) -> bool {
        if !self.pending.insert(key.clone()) {
            return false;
        }

        let tx = self.tx.clone();
        rayon::spawn(move || {
            let image = decode_file(&path, max_edge);
            if let Err(e) = &image {
                tracing::warn!(path = %path.display(), "Failed to load image: {}", e);
            }
            let _ = tx.send(LoadResult { key, image });
        });
        true
    }

    pub fn is_pending(&self, key: &ImageKey) -> bool {
        self.pending.contains(key)
    }

    /// Any decode still in flight?
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Collect every finished load without blocking
    pub fn poll(&mut self) -> Vec<LoadResult> {
        let results: Vec<LoadResult> = self.rx.try_iter().collect();
        for result in &results {
            self.pending.remove(&result.key);
        }
        results
    }

    /// Block until one load finishes or `timeout` passes
    pub fn wait_one(&mut self, timeout: std::time::Duration) -> Option<LoadResult> {
        let result = self.rx.recv_timeout(timeout).ok()?;
        self.pending.remove(&result.key);
        Some(result)
    }
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode an image file into RGBA8, shrinking it to fit `max_edge`
pub fn decode_file(path: &Path, max_edge: Option<u32>) -> Result<LoadedImage, AppError> {
    tracing::debug!("Loading image: {}", path.display());

    if !path.exists() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }

    let img = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;

    let (w, h) = img.dimensions();
    let img = match max_edge {
        Some(edge) if w > edge || h > edge => img.thumbnail(edge, edge),
        _ => img,
    };

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(LoadedImage {
        width,
        height,
        data: rgba.into_raw(),
    })
}
