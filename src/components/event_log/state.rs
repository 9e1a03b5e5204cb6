use std::path::PathBuf;

use crate::events::{EventCategory, EventLog};

pub const DEFAULT_EXPORT_PATH: &str = "process_monitor_logs.csv";

/// What the user asked the log panel to do this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogPanelAction {
    Clear,
    Exported(usize),
    ExportFailed,
}

#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct EventLogPanel {
    pub filter: EventCategory,
    pub export_path: String,
    #[serde(skip)]
    pub(super) show_export: bool,
    #[serde(skip)]
    pub(super) export_error: Option<String>,
}

impl Default for EventLogPanel {
    fn default() -> Self {
        Self {
            filter: EventCategory::AllEvents,
            export_path: DEFAULT_EXPORT_PATH.to_string(),
            show_export: false,
            export_error: None,
        }
    }
}

impl EventLogPanel {
    pub fn open_export(&mut self) {
        self.show_export = true;
        self.export_error = None;
    }

    /// Writes the log to the chosen path. Failures stay visible in the export
    /// window; the log itself is left untouched either way.
    pub fn export(&mut self, events: &EventLog) -> LogPanelAction {
        let path = PathBuf::from(self.export_path.trim());
        match events.export_csv(&path) {
            Ok(rows) => {
                self.show_export = false;
                self.export_error = None;
                LogPanelAction::Exported(rows)
            }
            Err(e) => {
                log::error!("Failed to export logs to {}: {}", path.display(), e);
                self.export_error = Some(format!("Failed to export logs: {}", e));
                LogPanelAction::ExportFailed
            }
        }
    }

    pub fn export_error(&self) -> Option<&str> {
        self.export_error.as_deref()
    }
}
