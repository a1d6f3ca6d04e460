//! Decoded-image texture cache
//!
//! Bridges the background [`ImageLoader`] and egui: each requested
//! rendition is `Loading` until its decode arrives, then `Ready` or
//! `Broken`. Failed decodes are not retried.

use app_core::{ImageKey, ImageLoader, LoadResult};
use egui::{ColorImage, TextureHandle, TextureOptions, Vec2};
use std::collections::HashMap;
use std::path::PathBuf;

/// State of one rendition
#[derive(Clone)]
pub enum TextureSlot {
    Loading,
    Ready { texture: TextureHandle, size: [u32; 2] },
    Broken,
}

impl TextureSlot {
    /// Pixel size as an egui vector, if ready
    pub fn size_vec(&self) -> Option<Vec2> {
        match self {
            TextureSlot::Ready { size, .. } => Some(Vec2::new(size[0] as f32, size[1] as f32)),
            _ => None,
        }
    }
}

#[derive(Default)]
pub struct TextureCache {
    slots: HashMap<ImageKey, TextureSlot>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &ImageKey) -> Option<&TextureSlot> {
        self.slots.get(key)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Make sure `key` is loaded or on its way
    ///
    /// `path` is `None` when the name does not resolve to a file; the slot
    /// is marked broken right away.
    pub fn ensure(
        &mut self,
        loader: &mut ImageLoader,
        key: &ImageKey,
        path: Option<PathBuf>,
        max_edge: Option<u32>,
    ) -> &TextureSlot {
        if !self.slots.contains_key(key) {
            let slot = match path {
                Some(path) => {
                    loader.request(key.clone(), path, max_edge);
                    TextureSlot::Loading
                }
                None => {
                    tracing::warn!(name = %key.name, "Image name does not resolve to a file");
                    TextureSlot::Broken
                }
            };
            self.slots.insert(key.clone(), slot);
        }
        &self.slots[key]
    }

    /// Upload a finished decode
    pub fn accept(&mut self, ctx: &egui::Context, result: LoadResult) {
        let slot = match result.image {
            Ok(image) => {
                let color_image = ColorImage::from_rgba_unmultiplied(
                    [image.width as usize, image.height as usize],
                    &image.data,
                );
                let texture = ctx.load_texture(
                    format!("{}#{:?}", result.key.name, result.key.variant),
                    color_image,
                    TextureOptions::LINEAR,
                );
                TextureSlot::Ready {
                    texture,
                    size: [image.width, image.height],
                }
            }
            Err(_) => TextureSlot::Broken,
        };
        self.slots.insert(result.key, slot);
    }

    /// Drain the loader; returns `true` if anything arrived
    pub fn pump(&mut self, ctx: &egui::Context, loader: &mut ImageLoader) -> bool {
        let results = loader.poll();
        let arrived = !results.is_empty();
        for result in results {
            self.accept(ctx, result);
        }
        arrived
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::{AppError, ImageVariant, LoadedImage};
    use std::time::Duration;

    fn key(name: &str) -> ImageKey {
        ImageKey::new(name, ImageVariant::Thumbnail)
    }

    #[test]
    fn test_unresolved_name_is_broken() {
        let mut cache = TextureCache::new();
        let mut loader = ImageLoader::new();
        let slot = cache.ensure(&mut loader, &key("../x-a.jpg"), None, None);
        assert!(matches!(slot, TextureSlot::Broken));
        assert!(!loader.is_pending(&key("../x-a.jpg")));
    }

    #[test]
    fn test_accept_ready_and_broken() {
        let ctx = egui::Context::default();
        let mut cache = TextureCache::new();

        cache.accept(
            &ctx,
            LoadResult {
                key: key("a-x.jpg"),
                image: Ok(LoadedImage {
                    width: 2,
                    height: 1,
                    data: vec![255; 8],
                }),
            },
        );
        cache.accept(
            &ctx,
            LoadResult {
                key: key("b-x.jpg"),
                image: Err(AppError::ImageDecode("bad header".into())),
            },
        );

        let ready = cache.get(&key("a-x.jpg")).and_then(TextureSlot::size_vec);
        assert_eq!(ready, Some(Vec2::new(2.0, 1.0)));
        assert!(matches!(cache.get(&key("b-x.jpg")), Some(TextureSlot::Broken)));
    }

    #[test]
    fn test_missing_file_ends_broken() {
        let ctx = egui::Context::default();
        let mut cache = TextureCache::new();
        let mut loader = ImageLoader::new();
        let k = key("gone-x.jpg");

        let slot = cache.ensure(&mut loader, &k, Some(PathBuf::from("/nonexistent/gone-x.jpg")), Some(64));
        assert!(matches!(slot, TextureSlot::Loading));

        let result = loader.wait_one(Duration::from_secs(5)).unwrap();
        cache.accept(&ctx, result);
        assert!(matches!(cache.get(&k), Some(TextureSlot::Broken)));

        // Not requested again
        cache.ensure(&mut loader, &k, Some(PathBuf::from("/nonexistent/gone-x.jpg")), Some(64));
        assert!(!loader.is_pending(&k));
    }
}
