use crate::metrics::{AnomalyDetector, ProcessSnapshot};
use crate::ui::{ACCENT, WARNING};

/// Running processes, busiest first. Rows above the alert threshold are
/// drawn in the warning colour.
pub fn show_process_table(
    ui: &mut egui::Ui,
    processes: &[ProcessSnapshot],
    detector: &AnomalyDetector,
) {
    ui.label(
        egui::RichText::new(format!("Running Processes ({})", processes.len()))
            .color(ACCENT)
            .strong(),
    );

    egui::ScrollArea::vertical()
        .id_salt("process_table")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("process_grid")
                .num_columns(5)
                .striped(true)
                .min_col_width(70.0)
                .show(ui, |ui| {
                    for header in ["PID", "Process Name", "CPU %", "Memory %", "Status"] {
                        ui.strong(header);
                    }
                    ui.end_row();

                    for process in processes {
                        let row = |text: String| {
                            let text = egui::RichText::new(text);
                            if detector.is_high(process.cpu_percent) {
                                text.color(WARNING)
                            } else {
                                text
                            }
                        };
                        ui.label(row(process.pid.to_string()));
                        ui.label(row(process.name.clone()));
                        ui.label(row(format!("{:.1}%", process.cpu_percent)));
                        ui.label(row(format!("{:.1}%", process.memory_percent)));
                        ui.label(row(process.status.clone()));
                        ui.end_row();
                    }
                });
        });
}
