//! Portfolio Viewer Core
//!
//! This crate contains:
//! - Tag extraction and the catalog shuffle
//! - Filter state and the lightbox state machine
//! - Page scroll lock
//! - Language preference and i18n
//! - Image resource addressing and loading
//! - Contact form
//! - Configuration, commands and error types

pub mod catalog;
pub mod command;
pub mod config;
pub mod contact;
pub mod error;
pub mod filter;
pub mod i18n;
pub mod image_loader;
pub mod lightbox;
pub mod preferences;
pub mod resource;
pub mod scroll_lock;
pub mod shuffle;
pub mod state;
pub mod tags;

pub use catalog::{catalog_from_names, Catalog, CatalogLoader, ImageName};
pub use command::{Command, CommandId, CommandParams, KeyScope, KeyScopeKind};
pub use config::{AppConfig, ContactConfig, GalleryConfig, GeneralConfig, LinksConfig};
pub use contact::{ContactForm, ContactSender, FormTransport, HttpFormTransport, SubmitOutcome};
pub use error::AppError;
pub use filter::{available_filters, visible_set, Filter, FilterLabels, FilterState};
pub use i18n::{I18n, Language};
pub use image_loader::{ImageKey, ImageLoader, ImageVariant, LoadResult, LoadedImage};
pub use lightbox::{Lightbox, LightboxEvent, LightboxState};
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use resource::ResourceResolver;
pub use scroll_lock::{PageScroll, ScrollGuard};
pub use state::{ContactStatus, PortfolioState, Section};
pub use tags::extract_tags;
