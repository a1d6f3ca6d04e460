//! Application theming

use egui::{Color32, FontFamily, FontId, Style, TextStyle, Visuals};

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub surface: Color32,
    pub primary: Color32,
    pub text: Color32,
    pub text_secondary: Color32,
    pub accent: Color32,
    /// Lightbox backdrop
    pub overlay: Color32,
    pub error: Color32,
    pub success: Color32,
}

impl Theme {
    /// Black gallery theme (default)
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::BLACK,
            surface: Color32::from_rgb(12, 12, 12),
            primary: Color32::from_rgb(38, 38, 38),
            text: Color32::from_rgb(245, 245, 245),
            text_secondary: Color32::from_rgb(150, 150, 150),
            accent: Color32::WHITE,
            overlay: Color32::from_black_alpha(235),
            error: Color32::from_rgb(220, 80, 80),
            success: Color32::from_rgb(80, 200, 120),
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(250, 250, 248),
            surface: Color32::WHITE,
            primary: Color32::from_rgb(228, 228, 224),
            text: Color32::from_rgb(20, 20, 20),
            text_secondary: Color32::from_rgb(110, 110, 110),
            accent: Color32::BLACK,
            overlay: Color32::from_black_alpha(235),
            error: Color32::from_rgb(200, 40, 40),
            success: Color32::from_rgb(30, 150, 80),
        }
    }

    /// Apply theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style: Style = (*ctx.style()).clone();
        let mut visuals = if self.name == "dark" {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.surface;
        visuals.faint_bg_color = self.primary;
        visuals.override_text_color = Some(self.text);

        visuals.widgets.noninteractive.bg_fill = self.background;
        visuals.widgets.noninteractive.fg_stroke.color = self.text;

        visuals.widgets.inactive.bg_fill = self.primary;
        visuals.widgets.inactive.weak_bg_fill = Color32::TRANSPARENT;
        visuals.widgets.inactive.fg_stroke.color = self.text_secondary;

        visuals.widgets.hovered.bg_fill = self.primary;
        visuals.widgets.hovered.fg_stroke.color = self.accent;

        visuals.widgets.active.bg_fill = self.primary;
        visuals.widgets.active.fg_stroke.color = self.accent;

        visuals.selection.bg_fill = self.accent.linear_multiply(0.15);
        visuals.selection.stroke.color = self.accent;

        style.visuals = visuals;
        style.text_styles.insert(
            TextStyle::Heading,
            FontId::new(40.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Body,
            FontId::new(16.0, FontFamily::Proportional),
        );
        ctx.set_style(style);
    }

    /// Get theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(Theme::by_name("Light").name, "light");
        assert_eq!(Theme::by_name("dark").name, "dark");
        assert_eq!(Theme::by_name("neon").name, "dark");
    }
}
