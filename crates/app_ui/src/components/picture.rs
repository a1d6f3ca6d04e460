//! Image painting with loading / broken placeholders

use crate::textures::TextureSlot;
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2};

/// Largest size with the image's aspect ratio that fits in `bounds`
///
/// Never upscales past the image's own size.
pub fn fit_size(image: Vec2, bounds: Vec2) -> Vec2 {
    if image.x <= 0.0 || image.y <= 0.0 {
        return Vec2::ZERO;
    }
    let scale = (bounds.x / image.x).min(bounds.y / image.y).min(1.0);
    image * scale.max(0.0)
}

/// Paints a [`TextureSlot`] into a rect
pub struct Picture;

impl Picture {
    /// Paint `slot` centred in `rect`, letterboxed to keep its aspect ratio
    ///
    /// Returns the rect actually covered by the image (or `rect` for a
    /// placeholder).
    pub fn paint(
        ui: &Ui,
        rect: Rect,
        slot: Option<&TextureSlot>,
        loading: &str,
        broken: &str,
    ) -> Rect {
        let painter = ui.painter_at(rect);
        match slot {
            Some(TextureSlot::Ready { texture, size }) => {
                let shown = fit_size(Vec2::new(size[0] as f32, size[1] as f32), rect.size());
                let image_rect = Rect::from_center_size(rect.center(), shown);
                let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
                painter.image(texture.id(), image_rect, uv, Color32::WHITE);
                image_rect
            }
            Some(TextureSlot::Broken) => {
                painter.rect_stroke(rect.shrink(1.0), 0.0, Stroke::new(1.0, Color32::from_gray(60)));
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    broken,
                    FontId::proportional(14.0),
                    Color32::GRAY,
                );
                rect
            }
            Some(TextureSlot::Loading) | None => {
                painter.rect_filled(rect, 0.0, Color32::from_gray(18));
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    loading,
                    FontId::proportional(14.0),
                    Color32::DARK_GRAY,
                );
                rect
            }
        }
    }

    /// Allocate a `size` tile and paint `slot` into it, cropped to fill
    pub fn tile(ui: &mut Ui, size: Vec2, slot: Option<&TextureSlot>, loading: &str, broken: &str) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        match slot {
            Some(TextureSlot::Ready { texture, size: px }) => {
                let uv = cover_uv(Vec2::new(px[0] as f32, px[1] as f32), size);
                let tint = if response.hovered() {
                    Color32::WHITE
                } else {
                    Color32::from_gray(215)
                };
                ui.painter_at(rect).image(texture.id(), rect, uv, tint);
            }
            _ => {
                Self::paint(ui, rect, slot, loading, broken);
            }
        }
        response
    }
}

/// UV rect that crops an `image` to cover a `tile` of another aspect ratio
fn cover_uv(image: Vec2, tile: Vec2) -> Rect {
    let full = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
    if image.x <= 0.0 || image.y <= 0.0 || tile.x <= 0.0 || tile.y <= 0.0 {
        return full;
    }
    let image_aspect = image.x / image.y;
    let tile_aspect = tile.x / tile.y;
    if image_aspect > tile_aspect {
        let w = tile_aspect / image_aspect;
        Rect::from_min_max(Pos2::new((1.0 - w) / 2.0, 0.0), Pos2::new((1.0 + w) / 2.0, 1.0))
    } else {
        let h = image_aspect / tile_aspect;
        Rect::from_min_max(Pos2::new(0.0, (1.0 - h) / 2.0), Pos2::new(1.0, (1.0 + h) / 2.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_size_keeps_aspect() {
        let shown = fit_size(Vec2::new(4000.0, 2000.0), Vec2::new(1000.0, 1000.0));
        assert_eq!(shown, Vec2::new(1000.0, 500.0));
    }

    #[test]
    fn test_fit_size_never_upscales() {
        let shown = fit_size(Vec2::new(300.0, 200.0), Vec2::new(1000.0, 1000.0));
        assert_eq!(shown, Vec2::new(300.0, 200.0));
    }

    #[test]
    fn test_fit_size_degenerate() {
        assert_eq!(fit_size(Vec2::ZERO, Vec2::new(10.0, 10.0)), Vec2::ZERO);
    }

    #[test]
    fn test_cover_uv_crops_wide_image() {
        let uv = cover_uv(Vec2::new(200.0, 100.0), Vec2::new(100.0, 100.0));
        assert!((uv.min.x - 0.25).abs() < 1e-6);
        assert!((uv.max.x - 0.75).abs() < 1e-6);
        assert_eq!(uv.min.y, 0.0);
        assert_eq!(uv.max.y, 1.0);
    }

    #[test]
    fn test_cover_uv_crops_tall_image() {
        let uv = cover_uv(Vec2::new(100.0, 400.0), Vec2::new(100.0, 100.0));
        assert_eq!(uv.min.x, 0.0);
        assert!((uv.min.y - 0.375).abs() < 1e-6);
        assert!((uv.max.y - 0.625).abs() < 1e-6);
    }
}
