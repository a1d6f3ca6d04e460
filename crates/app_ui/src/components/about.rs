//! About section

use super::picture::Picture;
use crate::textures::TextureSlot;
use app_core::I18n;
use egui::{RichText, Ui, Vec2};

pub struct AboutSection;

impl AboutSection {
    pub fn ui(ui: &mut Ui, i18n: &I18n, portrait: Option<&TextureSlot>) {
        ui.add_space(48.0);
        ui.label(RichText::new(i18n.get("about-eyebrow").to_uppercase()).weak());
        ui.heading(format!("{} {}", i18n.get("about-title-1"), i18n.get("about-title-2")));
        ui.add_space(16.0);

        let wide = ui.available_width() > 900.0;
        let text = |ui: &mut Ui| {
            // Languages differ in paragraph count
            for paragraph in i18n.paragraphs("about-paragraph") {
                ui.label(paragraph);
                ui.add_space(8.0);
            }
            ui.label(RichText::new(i18n.get("about-hashtags")).weak().small());
        };
        let image = |ui: &mut Ui| {
            let side = ui.available_width().min(420.0);
            let (rect, _) = ui.allocate_exact_size(Vec2::new(side, side * 1.25), egui::Sense::hover());
            Picture::paint(ui, rect, portrait, &i18n.get("image-loading"), &i18n.get("image-broken"));
            ui.label(RichText::new(i18n.get("about-caption")).italics().weak());
        };

        if wide {
            ui.columns(2, |cols| {
                text(&mut cols[0]);
                image(&mut cols[1]);
            });
        } else {
            text(ui);
            ui.add_space(16.0);
            image(ui);
        }
    }
}
