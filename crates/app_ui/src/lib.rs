//! Portfolio Viewer UI Layer
//!
//! Provides:
//! - egui page sections and the lightbox overlay
//! - wgpu rendering pipeline
//! - Input handling
//! - Texture cache for decoded images

pub mod components;
pub mod input;
pub mod renderer;
pub mod textures;
pub mod theme;

pub use input::InputHandler;
pub use renderer::Renderer;
pub use textures::{TextureCache, TextureSlot};
pub use theme::Theme;
