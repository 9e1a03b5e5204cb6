use super::state::{EventLogPanel, LogPanelAction};
use crate::events::{EventCategory, EventLevel, EventLog, LogEntry};
use crate::ui::{ACCENT, INFO, WARNING};

impl EventLogPanel {
    pub fn show(&mut self, ui: &mut egui::Ui, events: &EventLog) -> Option<LogPanelAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Filter:").color(ACCENT));
            egui::ComboBox::from_id_salt("log_filter")
                .selected_text(self.filter.label())
                .show_ui(ui, |ui| {
                    for category in EventCategory::ALL {
                        ui.selectable_value(&mut self.filter, category, category.label());
                    }
                });

            if ui.button("Export Logs").clicked() {
                self.open_export();
            }
            if ui.button("Clear Logs").clicked() {
                action = Some(LogPanelAction::Clear);
            }
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("event_log")
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for entry in events.filtered(self.filter) {
                    let color = entry_color(ui, self.filter, entry);
                    ui.label(egui::RichText::new(entry.to_string()).monospace().color(color));
                }
            });

        action
    }

    pub fn show_export_window(&mut self, ctx: &egui::Context, events: &EventLog) -> Option<LogPanelAction> {
        if !self.show_export {
            return None;
        }

        let mut action = None;
        egui::Window::new("Export Logs")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("File:");
                    ui.text_edit_singleline(&mut self.export_path);
                });
                ui.label(format!("{} entries", events.len()));

                if let Some(error) = self.export_error() {
                    ui.colored_label(WARNING, error);
                }

                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        action = Some(self.export(events));
                    }
                    if ui.button("Cancel").clicked() {
                        self.show_export = false;
                    }
                });
            });

        action
    }
}

fn entry_color(ui: &egui::Ui, filter: EventCategory, entry: &LogEntry) -> egui::Color32 {
    match entry.level {
        EventLevel::Warning | EventLevel::Error => WARNING,
        EventLevel::Info => {
            let category = match filter {
                EventCategory::AllEvents => EventCategory::classify(&entry.to_string()),
                other => other,
            };
            match category {
                EventCategory::ProcessEvents => ACCENT,
                EventCategory::ResourceUsage => INFO,
                EventCategory::SecurityAlerts => WARNING,
                EventCategory::AllEvents => ui.visuals().text_color(),
            }
        }
    }
}
