//! Full-screen lightbox overlay
//!
//! Draws over the page while the lightbox is open. Clicking the backdrop
//! closes it; Prev/Next controls only appear when there is more than one
//! image to step through.

use super::picture::Picture;
use crate::textures::TextureSlot;
use app_core::{I18n, LightboxEvent, LightboxState};
use egui::{Align2, Color32, FontId, Id, Order, Rect, RichText, Sense, Vec2};

pub struct LightboxOverlay;

impl LightboxOverlay {
    const MARGIN: f32 = 64.0;

    pub fn show(
        ctx: &egui::Context,
        state: &LightboxState,
        slot: Option<&TextureSlot>,
        i18n: &I18n,
        backdrop: Color32,
    ) -> Option<LightboxEvent> {
        if !state.is_open() {
            return None;
        }
        let navigation = state.can_navigate();
        let screen = ctx.screen_rect();
        let mut event = None;

        egui::Area::new(Id::new("lightbox"))
            .order(Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let backdrop_response = ui.interact(screen, Id::new("lightbox_backdrop"), Sense::click());
                ui.painter().rect_filled(screen, 0.0, backdrop);

                let stage = screen.shrink(Self::MARGIN);
                let shown = Picture::paint(
                    ui,
                    stage,
                    slot,
                    &i18n.get("image-loading"),
                    &i18n.get("image-broken"),
                );
                // Clicks on the image itself must not reach the backdrop
                let image_response = ui.interact(shown, Id::new("lightbox_image"), Sense::click());

                if backdrop_response.clicked() && !image_response.clicked() {
                    event = Some(LightboxEvent::Close);
                }

                let close_rect = Rect::from_min_size(
                    egui::pos2(screen.right() - Self::MARGIN, screen.top() + 12.0),
                    Vec2::new(Self::MARGIN - 12.0, 32.0),
                );
                if ui
                    .put(close_rect, egui::Button::new(RichText::new("✕").size(20.0)).frame(false))
                    .on_hover_text(i18n.get("lightbox-close"))
                    .clicked()
                {
                    event = Some(LightboxEvent::Close);
                }

                if navigation {
                    let side = Vec2::new(Self::MARGIN - 8.0, 48.0);
                    let prev_rect = Rect::from_center_size(
                        egui::pos2(screen.left() + Self::MARGIN / 2.0, screen.center().y),
                        side,
                    );
                    let next_rect = Rect::from_center_size(
                        egui::pos2(screen.right() - Self::MARGIN / 2.0, screen.center().y),
                        side,
                    );
                    if ui
                        .put(prev_rect, egui::Button::new(RichText::new("‹").size(32.0)).frame(false))
                        .on_hover_text(i18n.get("lightbox-prev"))
                        .clicked()
                    {
                        event = Some(LightboxEvent::Prev);
                    }
                    if ui
                        .put(next_rect, egui::Button::new(RichText::new("›").size(32.0)).frame(false))
                        .on_hover_text(i18n.get("lightbox-next"))
                        .clicked()
                    {
                        event = Some(LightboxEvent::Next);
                    }
                }

                ui.painter().text(
                    egui::pos2(screen.center().x, screen.bottom() - Self::MARGIN / 2.0),
                    Align2::CENTER_CENTER,
                    i18n.get(hint_key(navigation)),
                    FontId::proportional(13.0),
                    Color32::from_gray(160),
                );
            });

        event
    }
}

/// Message id of the keyboard hint line
pub fn hint_key(navigation: bool) -> &'static str {
    if navigation {
        "lightbox-hint-nav"
    } else {
        "lightbox-hint"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::{ImageName, Language};

    #[test]
    fn test_hint_text() {
        let i18n = I18n::new(Language::En).unwrap();
        assert_eq!(i18n.get(hint_key(false)), "Esc close");
        assert_eq!(i18n.get(hint_key(true)), "Esc close / Left-Right to navigate");
    }

    #[test]
    fn test_closed_lightbox_draws_nothing() {
        let ctx = egui::Context::default();
        let i18n = I18n::new(Language::En).unwrap();
        let mut event = Some(LightboxEvent::Next);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            event = LightboxOverlay::show(ctx, &LightboxState::Closed, None, &i18n, Color32::BLACK);
        });
        assert_eq!(event, None);
    }

    #[test]
    fn test_open_lightbox_without_input_emits_nothing() {
        let ctx = egui::Context::default();
        let i18n = I18n::new(Language::En).unwrap();
        let state = LightboxState::Closed.apply(LightboxEvent::Open {
            images: vec![ImageName::from("a-x.jpg"), ImageName::from("b-x.jpg")],
            index: 0,
        });
        let mut event = Some(LightboxEvent::Close);
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            event = LightboxOverlay::show(ctx, &state, Some(&TextureSlot::Loading), &i18n, Color32::BLACK);
        });
        assert_eq!(event, None);
    }
}
