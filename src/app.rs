use std::time::Instant;

use crate::components::event_log::{EventLogPanel, LogPanelAction};
use crate::components::process_table::show_process_table;
use crate::components::resource_view::show_resource_charts;
use crate::components::settings::{show_settings_window, Settings};
use crate::config::MonitorConfig;
use crate::metrics::{Monitor, MonitorState, SysinfoSampler};
use crate::ui::{ACCENT, INFO};

const MONITORING_STATUS: &str = "Monitoring system events...";

/// We derive Deserialize/Serialize so we can persist UI preferences on shutdown.
/// Monitoring data itself is never persisted.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct ProcessMonitorApp {
    #[serde(skip)]
    monitor: Monitor,
    #[serde(skip)]
    state: MonitorState,
    #[serde(skip)]
    status: String,
    log_panel: EventLogPanel,
    settings: Settings,
}

impl Default for ProcessMonitorApp {
    fn default() -> Self {
        Self::with_config(&MonitorConfig::default())
    }
}

impl ProcessMonitorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: MonitorConfig) -> Self {
        let mut app = Self::with_config(&config);

        // Load previous UI preferences (if any).
        // Note that you must enable the `persistence` feature for this to work.
        if let Some(storage) = cc.storage {
            if let Some(saved) = eframe::get_value::<ProcessMonitorApp>(storage, eframe::APP_KEY) {
                let update_interval_ms = app.settings.update_interval_ms;
                app.log_panel = saved.log_panel;
                app.settings = saved.settings;
                app.settings.update_interval_ms = update_interval_ms;
            }
        }

        app
    }

    fn with_config(config: &MonitorConfig) -> Self {
        Self {
            monitor: Monitor::new(SysinfoSampler::new(), config),
            state: MonitorState::new(),
            status: MONITORING_STATUS.to_string(),
            log_panel: EventLogPanel::default(),
            settings: Settings::from_config(config),
        }
    }

    fn handle_log_action(&mut self, action: LogPanelAction) {
        match action {
            LogPanelAction::Clear => {
                self.state.reset();
                self.status = "Logs cleared".to_string();
            }
            LogPanelAction::Exported(rows) => {
                self.status = format!("Exported {} log entries to {}", rows, self.log_panel.export_path);
            }
            LogPanelAction::ExportFailed => {
                self.status = "Export failed".to_string();
            }
        }
    }
}

impl eframe::App for ProcessMonitorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.settings.apply(ctx);
        self.monitor.set_update_interval(self.settings.update_interval());
        self.monitor.poll(&mut self.state);

        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Export Logs…").clicked() {
                        self.log_panel.open_export();
                        ui.close_menu();
                    }
                    if ui.button("Clear Logs").clicked() {
                        action = Some(LogPanelAction::Clear);
                        ui.close_menu();
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.add_space(16.0);
                egui::widgets::global_theme_preference_buttons(ui);

                ui.add_space(16.0);
                if ui.button("⚙").clicked() {
                    self.settings.show();
                }
            });
        });

        show_settings_window(ctx, &mut self.settings);
        if let Some(export) = self.log_panel.show_export_window(ctx, &self.state.events) {
            action = Some(export);
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.colored_label(INFO, self.status.as_str());
        });

        egui::TopBottomPanel::bottom("event_log")
            .resizable(true)
            .default_height(220.0)
            .show(ctx, |ui| {
                if let Some(clicked) = self.log_panel.show(ui, &self.state.events) {
                    action = Some(clicked);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(egui::RichText::new("Real Time Process Monitoring System").color(ACCENT));
            ui.add_space(8.0);

            show_resource_charts(ui, &self.state.history, 160.0);
            ui.separator();
            show_process_table(ui, self.state.processes(), self.monitor.detector());
        });

        if let Some(action) = action {
            self.handle_log_action(action);
        }

        ctx.request_repaint_after(self.monitor.time_until_next_tick(Instant::now()));
    }
}
