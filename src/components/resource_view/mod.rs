use crate::metrics::HistoryStore;
use crate::ui::{usage_plot, ACCENT, INFO};

pub fn show_resource_charts(ui: &mut egui::Ui, history: &HistoryStore, height: f32) {
    let cpu = history.cpu_series();
    let memory = history.memory_series();

    ui.columns(2, |columns| {
        usage_plot(&mut columns[0], "cpu_plot", "CPU Usage (%)", height, &cpu, ACCENT);
        usage_plot(&mut columns[1], "memory_plot", "Memory Usage (%)", height, &memory, INFO);
    });

    if let Some(latest) = history.latest_sample() {
        ui.horizontal(|ui| {
            ui.label(format!("CPU: {:.1}%", latest.cpu_percent));
            ui.add_space(16.0);
            ui.label(format!("Memory: {:.1}%", latest.memory_percent));
        });
    }
}
