//! UI Components
//!
//! Page sections in display order, plus the lightbox overlay. Each
//! section renders from borrowed state and returns an action for the
//! caller to apply.

pub mod about;
pub mod contact;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod hero;
pub mod lightbox;
pub mod picture;

pub use about::AboutSection;
pub use contact::{ContactAction, ContactSection};
pub use footer::{Footer, FooterAction};
pub use gallery::{Gallery, GalleryAction, GalleryTile, GalleryView, FilterChip};
pub use header::{Header, HeaderAction};
pub use hero::{Hero, HeroAction};
pub use lightbox::LightboxOverlay;
pub use picture::{fit_size, Picture};
