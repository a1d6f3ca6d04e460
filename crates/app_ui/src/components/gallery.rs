//! Filter bar and image grid

use super::picture::Picture;
use crate::textures::TextureSlot;
use egui::{RichText, Ui, Vec2};

/// Action returned from gallery interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryAction {
    /// A filter chip was clicked (filter id)
    SetFilter(String),
    /// A tile was clicked (index into the visible set)
    Open(usize),
}

/// One entry of the filter bar
#[derive(Debug, Clone)]
pub struct FilterChip {
    pub id: String,
    pub label: String,
    pub active: bool,
}

/// One tile of the grid
pub struct GalleryTile<'a> {
    pub name: &'a str,
    pub slot: Option<&'a TextureSlot>,
}

/// Everything the gallery needs for one frame
pub struct GalleryView<'a> {
    pub title: String,
    pub filters: Vec<FilterChip>,
    pub tiles: Vec<GalleryTile<'a>>,
    pub empty_text: String,
    pub loading_text: String,
    pub broken_text: String,
}

pub struct Gallery;

impl Gallery {
    pub const GAP: f32 = 6.0;
    pub const MIN_TILE: f32 = 260.0;

    pub fn ui(ui: &mut Ui, view: &GalleryView<'_>) -> Option<GalleryAction> {
        let mut action = None;

        ui.add_space(24.0);
        ui.heading(&view.title);
        ui.add_space(12.0);

        ui.horizontal_wrapped(|ui| {
            for chip in &view.filters {
                let text = if chip.active {
                    RichText::new(&chip.label).strong().underline()
                } else {
                    RichText::new(&chip.label)
                };
                if ui.selectable_label(chip.active, text).clicked() && !chip.active {
                    action = Some(GalleryAction::SetFilter(chip.id.clone()));
                }
            }
        });
        ui.add_space(16.0);

        if view.tiles.is_empty() {
            ui.label(RichText::new(&view.empty_text).weak());
            return action;
        }

        let width = ui.available_width();
        let columns = column_count(width, Self::MIN_TILE, Self::GAP);
        let side = tile_side(width, columns, Self::GAP);

        for (row, chunk) in view.tiles.chunks(columns).enumerate() {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = Self::GAP;
                for (col, tile) in chunk.iter().enumerate() {
                    let response = Picture::tile(
                        ui,
                        Vec2::splat(side),
                        tile.slot,
                        &view.loading_text,
                        &view.broken_text,
                    )
                    .on_hover_text(tile.name);
                    if response.clicked() {
                        action = Some(GalleryAction::Open(row * columns + col));
                    }
                }
            });
            ui.add_space(Self::GAP);
        }

        action
    }
}

/// Number of grid columns that keeps tiles at least `min_tile` wide
pub fn column_count(width: f32, min_tile: f32, gap: f32) -> usize {
    if width <= min_tile || min_tile <= 0.0 {
        return 1;
    }
    (((width + gap) / (min_tile + gap)).floor() as usize).max(1)
}

/// Side of a square tile when `columns` share `width`
pub fn tile_side(width: f32, columns: usize, gap: f32) -> f32 {
    let columns = columns.max(1) as f32;
    ((width - gap * (columns - 1.0)) / columns).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_count() {
        assert_eq!(column_count(100.0, 260.0, 6.0), 1);
        assert_eq!(column_count(526.0, 260.0, 6.0), 2);
        assert_eq!(column_count(525.0, 260.0, 6.0), 1);
        assert_eq!(column_count(1280.0, 260.0, 6.0), 4);
    }

    #[test]
    fn test_tile_side_fills_width() {
        let side = tile_side(1000.0, 4, 8.0);
        assert!((side * 4.0 + 8.0 * 3.0 - 1000.0).abs() < 1e-3);
        assert_eq!(tile_side(0.0, 3, 6.0), 1.0);
    }
}
