use std::time::Duration;

use crate::config::{clamp_interval, MonitorConfig, DEFAULT_UPDATE_INTERVAL_MS};

#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Settings {
    pub scale: f32,
    pub font_size: f32,
    /// Seeded from [`MonitorConfig`] at startup and only adjusted live.
    #[serde(skip)]
    pub update_interval_ms: u64,
    #[serde(skip)]
    show_window: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scale: 1.0,
            font_size: 14.0,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            show_window: false,
        }
    }
}

impl Settings {
    pub fn from_config(config: &MonitorConfig) -> Self {
        Self {
            update_interval_ms: config.update_interval_ms,
            ..Default::default()
        }
    }

    pub fn show(&mut self) {
        self.show_window = true;
    }

    pub fn is_visible(&self) -> bool {
        self.show_window
    }

    pub fn hide(&mut self) {
        self.show_window = false;
    }

    pub fn update_interval(&self) -> Duration {
        clamp_interval(self.update_interval_ms)
    }

    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_pixels_per_point(self.scale);

        let mut style = (*ctx.style()).clone();
        style.text_styles = [
            (
                egui::TextStyle::Heading,
                egui::FontId::new(self.font_size + 4.0, egui::FontFamily::Proportional),
            ),
            (
                egui::TextStyle::Body,
                egui::FontId::new(self.font_size, egui::FontFamily::Proportional),
            ),
            (
                egui::TextStyle::Monospace,
                egui::FontId::new(self.font_size - 1.0, egui::FontFamily::Monospace),
            ),
            (
                egui::TextStyle::Button,
                egui::FontId::new(self.font_size, egui::FontFamily::Proportional),
            ),
            (
                egui::TextStyle::Small,
                egui::FontId::new(self.font_size - 2.0, egui::FontFamily::Proportional),
            ),
        ]
        .into();
        ctx.set_style(style);
    }
}
