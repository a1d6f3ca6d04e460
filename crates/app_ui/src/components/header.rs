//! Top navigation bar

use crate::theme::Theme;
use app_core::{I18n, Language, Section};
use egui::{Frame, Layout, Margin, RichText, Stroke, Ui};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    ScrollTo(Section),
    SetLanguage(Language),
}

/// Site title, section links and the EN / GR toggle
pub struct Header;

impl Header {
    /// Page scroll offset past which the bar turns dimmed and bordered
    pub const SCROLL_THRESHOLD: f32 = 50.0;

    pub fn is_scrolled(offset_y: f32) -> bool {
        offset_y > Self::SCROLL_THRESHOLD
    }

    /// Panel frame: flush with the page at the top, a dimmed bar once scrolled
    pub fn frame(theme: &Theme, scrolled: bool) -> Frame {
        let frame = Frame::none().inner_margin(Margin::symmetric(24.0, 8.0));
        if scrolled {
            frame
                .fill(theme.surface.gamma_multiply(0.9))
                .stroke(Stroke::new(1.0, theme.primary))
        } else {
            frame.fill(theme.background)
        }
    }

    const LINKS: [(Section, &'static str); 3] = [
        (Section::Gallery, "nav-gallery"),
        (Section::About, "nav-about"),
        (Section::Contact, "nav-contact"),
    ];

    pub fn ui(ui: &mut Ui, i18n: &I18n) -> Option<HeaderAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            let title = ui.add(
                egui::Label::new(RichText::new(i18n.get("site-title")).size(22.0).strong())
                    .sense(egui::Sense::click()),
            );
            if title.clicked() {
                action = Some(HeaderAction::ScrollTo(Section::Hero));
            }

            ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                // Right-to-left: language toggle first, links after
                for lang in Language::ALL.iter().rev() {
                    let selected = i18n.language() == *lang;
                    if ui.selectable_label(selected, lang.label()).clicked() && !selected {
                        action = Some(HeaderAction::SetLanguage(*lang));
                    }
                }
                ui.separator();
                for (section, key) in Self::LINKS.iter().rev() {
                    if ui.button(i18n.get(key)).clicked() {
                        action = Some(HeaderAction::ScrollTo(*section));
                    }
                }
            });
        });

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        assert!(!Header::is_scrolled(0.0));
        assert!(!Header::is_scrolled(50.0));
        assert!(Header::is_scrolled(50.5));
    }

    #[test]
    fn test_frame_changes_when_scrolled() {
        let theme = Theme::dark();
        let top = Header::frame(&theme, false);
        let scrolled = Header::frame(&theme, true);
        assert_eq!(top.fill, theme.background);
        assert_eq!(top.stroke, Stroke::NONE);
        assert_ne!(scrolled.fill, top.fill);
        assert_eq!(scrolled.stroke.color, theme.primary);
    }
}
