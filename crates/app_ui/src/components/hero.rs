//! Hero banner

use super::picture::Picture;
use crate::textures::TextureSlot;
use app_core::I18n;
use egui::{Align2, Color32, FontId, RichText, Ui, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroAction {
    ViewGallery,
}

pub struct Hero;

impl Hero {
    /// Shortest banner that fits the tag, title and text block
    pub const MIN_HEIGHT: f32 = 480.0;
    const TEXT_HEIGHT: f32 = 120.0;

    pub fn ui(ui: &mut Ui, i18n: &I18n, image: Option<&TextureSlot>, height: f32) -> Option<HeroAction> {
        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(Vec2::new(width, height), egui::Sense::hover());

        match image {
            Some(TextureSlot::Ready { .. }) => {
                Picture::paint(ui, rect, image, "", "");
                ui.painter().rect_filled(rect, 0.0, Color32::from_black_alpha(110));
            }
            _ => {
                ui.painter().rect_filled(rect, 0.0, Color32::from_gray(10));
            }
        }

        let painter = ui.painter_at(rect);
        let left = rect.left() + 48.0;
        painter.text(
            egui::pos2(left, rect.center().y - 110.0),
            Align2::LEFT_CENTER,
            i18n.get("hero-tag").to_uppercase(),
            FontId::proportional(14.0),
            Color32::from_gray(190),
        );
        for (i, key) in ["hero-title-1", "hero-title-2", "hero-title-3"].iter().enumerate() {
            painter.text(
                egui::pos2(left, rect.center().y - 60.0 + i as f32 * 52.0),
                Align2::LEFT_CENTER,
                i18n.get(key),
                FontId::proportional(48.0),
                Color32::WHITE,
            );
        }

        let mut action = None;
        let below = text_block(rect);
        ui.allocate_new_ui(egui::UiBuilder::new().max_rect(below), |ui| {
            ui.label(RichText::new(i18n.get("hero-text")).color(Color32::from_gray(210)));
            ui.add_space(12.0);
            if ui.button(i18n.get("view-gallery")).clicked() {
                action = Some(HeroAction::ViewGallery);
            }
        });

        action
    }
}

/// Rect for the intro text and button, kept inside the banner
pub fn text_block(banner: egui::Rect) -> egui::Rect {
    let left = banner.left() + 48.0;
    let width = (banner.width() - 96.0).clamp(0.0, 560.0);
    let top = (banner.center().y + 110.0)
        .min(banner.bottom() - Hero::TEXT_HEIGHT - 10.0)
        .max(banner.top());
    egui::Rect::from_min_size(egui::pos2(left, top), Vec2::new(width, Hero::TEXT_HEIGHT))
        .intersect(banner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_block_stays_inside_minimum_banner() {
        let banner = egui::Rect::from_min_size(egui::pos2(0.0, 60.0), Vec2::new(1280.0, Hero::MIN_HEIGHT));
        let block = text_block(banner);
        assert!(banner.contains_rect(block));
        assert_eq!(block.height(), Hero::TEXT_HEIGHT);
    }

    #[test]
    fn test_text_block_clamped_in_short_banner() {
        let banner = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), Vec2::new(800.0, 300.0));
        let block = text_block(banner);
        assert!(block.bottom() <= banner.bottom());
        assert!(block.top() >= banner.top());
    }

    #[test]
    fn test_text_block_below_titles_in_tall_banner() {
        let banner = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), Vec2::new(1280.0, 900.0));
        assert_eq!(text_block(banner).top(), 560.0);
    }
}
