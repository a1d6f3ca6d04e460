//! Image catalog and the per-session display order

use crate::shuffle::shuffled;
use crate::tags::{extract_tags, has_tag};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A catalog entry, identified by its file name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageName(String);

impl ImageName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Category tags derived from the file name
    pub fn tags(&self) -> Vec<String> {
        extract_tags(&self.0)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        has_tag(&self.0, tag)
    }
}

impl fmt::Display for ImageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ImageName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// The catalog as received from the file system scan
pub type Catalog = Arc<[ImageName]>;

/// Build a catalog from plain names
pub fn catalog_from_names<I, S>(names: I) -> Catalog
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(|n| ImageName::new(n)).collect()
}

/// Holds the session display order of the catalog
///
/// The order is recomputed only when a different catalog is loaded, so
/// unrelated state changes (filter selection, lightbox) never reorder the
/// gallery.
#[derive(Debug, Default)]
pub struct CatalogLoader {
    source: Option<Catalog>,
    order: Vec<ImageName>,
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive a catalog; returns `true` if the display order was recomputed
    pub fn load<R: Rng + ?Sized>(&mut self, catalog: Catalog, rng: &mut R) -> bool {
        if let Some(current) = &self.source {
            if Arc::ptr_eq(current, &catalog) {
                return false;
            }
        }

        self.order = shuffled(&catalog[..], rng);
        tracing::debug!(count = self.order.len(), "Catalog order shuffled");
        self.source = Some(catalog);
        true
    }

    /// The session display order
    pub fn images(&self) -> &[ImageName] {
        &self.order
    }

    /// The catalog as received, in hand-off order
    pub fn source(&self) -> Option<&Catalog> {
        self.source.as_ref()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
