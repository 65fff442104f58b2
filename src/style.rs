use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// "light" selects the light theme; anything else is dark.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("light") {
            Self::Light
        } else {
            Self::Dark
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        match self {
            Self::Light => egui::Visuals::light(),
            Self::Dark => egui::Visuals::dark(),
        }
    }
}

// --- Sizing ---
pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 20.0;
pub const ADDRESS_BAR_WIDTH: f32 = 280.0;
pub const CONTENT_MAX_WIDTH: f32 = 900.0;
pub const CHAT_INPUT_ROWS: usize = 3;

// --- Colors ---
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(120, 180, 255);

// --- Timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

// --- Helper functions ---

/// Render a label that truncates overflowing text with an ellipsis.
pub fn truncated_label(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        assert_eq!(Theme::from_name("light"), Theme::Light);
        assert_eq!(Theme::from_name("LIGHT"), Theme::Light);
        assert_eq!(Theme::from_name("dark"), Theme::Dark);
        assert_eq!(Theme::from_name("solarized"), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }
}
