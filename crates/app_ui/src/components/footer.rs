//! Footer

use super::picture::Picture;
use crate::textures::TextureSlot;
use app_core::{I18n, LinksConfig};
use chrono::Datelike;
use egui::{RichText, Ui, Vec2};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FooterAction {
    OpenLink(String),
}

pub struct Footer;

impl Footer {
    pub fn ui(
        ui: &mut Ui,
        i18n: &I18n,
        links: &LinksConfig,
        signature: Option<&TextureSlot>,
    ) -> Option<FooterAction> {
        let mut action = None;

        ui.add_space(48.0);
        ui.separator();
        ui.horizontal(|ui| {
            // Signature image, or the site title until it is decoded
            if let Some(slot @ TextureSlot::Ready { .. }) = signature {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(140.0, 48.0), egui::Sense::hover());
                Picture::paint(ui, rect, Some(slot), "", "");
            } else {
                ui.label(RichText::new(i18n.get("site-title")).strong())
                    .on_hover_text(i18n.get("footer-signature"));
            }
            ui.separator();
            ui.label(RichText::new(rights_line(i18n, chrono::Local::now().year())).weak());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(behance) = &links.behance {
                    if ui.link("Behance").clicked() {
                        action = Some(FooterAction::OpenLink(behance.clone()));
                    }
                }
                if ui.link("Instagram").clicked() {
                    action = Some(FooterAction::OpenLink(links.instagram.clone()));
                }
            });
        });
        ui.add_space(16.0);

        action
    }
}

/// "© {year} All rights reserved" in the current language
pub fn rights_line(i18n: &I18n, year: i32) -> String {
    app_core::t!(i18n, "footer-rights", year = year.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::Language;

    #[test]
    fn test_rights_line() {
        let i18n = I18n::new(Language::En).unwrap();
        assert_eq!(rights_line(&i18n, 2026), "© 2026 All rights reserved");
    }
}
