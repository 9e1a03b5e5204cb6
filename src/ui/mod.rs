use egui::{Color32, Vec2};

pub const ACCENT: Color32 = Color32::from_rgb(0x00, 0xFF, 0x9D);
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0x6B, 0x6B);
pub const INFO: Color32 = Color32::from_rgb(0x4E, 0xCD, 0xC4);

/// Percentage chart over a fixed number of slots, y pinned to 0..=100.
pub fn usage_plot(
    ui: &mut egui::Ui,
    id: impl std::hash::Hash,
    title: &str,
    height: f32,
    history: &[f32],
    color: Color32,
) {
    ui.label(egui::RichText::new(title).color(ACCENT).strong());

    let plot = egui_plot::Plot::new(id)
        .height(height)
        .show_axes(true)
        .set_margin_fraction(Vec2::ZERO)
        .include_x(0.0)
        .include_x(history.len() as f64)
        .include_y(0.0)
        .include_y(100.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false);

    plot.show(ui, |plot_ui| {
        let points: egui_plot::PlotPoints = history
            .iter()
            .enumerate()
            .map(|(i, v)| [i as f64, *v as f64])
            .collect();
        plot_ui.line(egui_plot::Line::new(points).color(color).name(title));
    });
}
