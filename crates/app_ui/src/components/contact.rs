//! Contact form section

use app_core::{ContactForm, ContactStatus, I18n};
use egui::{RichText, TextEdit, Ui};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAction {
    Submit,
}

pub struct ContactSection;

impl ContactSection {
    /// Render the form; field edits go straight into `form`
    pub fn ui(ui: &mut Ui, i18n: &I18n, form: &mut ContactForm, status: &ContactStatus) -> Option<ContactAction> {
        let mut action = None;

        ui.add_space(48.0);
        ui.label(RichText::new(i18n.get("contact-eyebrow").to_uppercase()).weak());
        ui.heading(format!("{} {}", i18n.get("contact-title-1"), i18n.get("contact-title-2")));
        ui.add_space(8.0);
        ui.label(i18n.get("contact-text"));
        ui.add_space(16.0);

        let sending = *status == ContactStatus::Sending;
        let width = ui.available_width().min(640.0);

        ui.add_enabled_ui(!sending, |ui| {
            ui.label(i18n.get("contact-name"));
            ui.add(
                TextEdit::singleline(&mut form.name)
                    .hint_text(i18n.get("contact-name-placeholder"))
                    .desired_width(width),
            );
            ui.add_space(8.0);

            ui.label(i18n.get("contact-email"));
            ui.add(
                TextEdit::singleline(&mut form.email)
                    .hint_text(i18n.get("contact-email-placeholder"))
                    .desired_width(width),
            );
            ui.add_space(8.0);

            ui.label(i18n.get("contact-message"));
            ui.add(
                TextEdit::multiline(&mut form.message)
                    .hint_text(i18n.get("contact-message-placeholder"))
                    .desired_rows(5)
                    .desired_width(width),
            );
            ui.add_space(12.0);

            let label = if sending {
                i18n.get("contact-sending")
            } else {
                i18n.get("contact-cta")
            };
            if ui.button(label).clicked() {
                action = Some(ContactAction::Submit);
            }
        });

        if let Some(key) = status_message(status) {
            ui.add_space(8.0);
            ui.label(RichText::new(i18n.get(key)).italics());
        }

        action
    }
}

/// Message id shown under the form for `status`
pub fn status_message(status: &ContactStatus) -> Option<&'static str> {
    match status {
        ContactStatus::Idle | ContactStatus::Sending => None,
        ContactStatus::Missing => Some("contact-missing"),
        ContactStatus::Sent => Some("contact-sent"),
        ContactStatus::Failed => Some("contact-failed"),
        ContactStatus::Unavailable => Some("contact-unavailable"),
    }
}
