//! In-memory event log shown in the log panel and exported to CSV

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Local};

use crate::error::Result;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: EventLevel,
}

impl LogEntry {
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.formatted_timestamp(), self.message)
    }
}

/// Log panel filter. Matching is textual over the rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
pub enum EventCategory {
    #[default]
    AllEvents,
    ProcessEvents,
    ResourceUsage,
    SecurityAlerts,
}

impl EventCategory {
    pub const ALL: [EventCategory; 4] = [
        EventCategory::AllEvents,
        EventCategory::ProcessEvents,
        EventCategory::ResourceUsage,
        EventCategory::SecurityAlerts,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::AllEvents => "All Events",
            EventCategory::ProcessEvents => "Process Events",
            EventCategory::ResourceUsage => "Resource Usage",
            EventCategory::SecurityAlerts => "Security Alerts",
        }
    }

    pub fn matches(&self, line: &str) -> bool {
        match self {
            EventCategory::AllEvents => true,
            EventCategory::ProcessEvents => line.contains("Process"),
            EventCategory::ResourceUsage => line.to_lowercase().contains("resource"),
            EventCategory::SecurityAlerts => line.contains("Security Alert"),
        }
    }

    /// First specific category a line falls into, used for highlighting.
    pub fn classify(line: &str) -> EventCategory {
        [
            EventCategory::ProcessEvents,
            EventCategory::ResourceUsage,
            EventCategory::SecurityAlerts,
        ]
        .into_iter()
        .find(|category| category.matches(line))
        .unwrap_or(EventCategory::AllEvents)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: EventLevel, message: impl Into<String>) {
        self.push_at(Local::now(), level, message);
    }

    pub fn push_at(&mut self, timestamp: DateTime<Local>, level: EventLevel, message: impl Into<String>) {
        self.entries.push(LogEntry {
            timestamp,
            message: message.into(),
            level,
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(EventLevel::Info, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(EventLevel::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(EventLevel::Error, message);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn filtered(&self, category: EventCategory) -> impl Iterator<Item = &LogEntry> {
        self.entries
            .iter()
            .filter(move |entry| category.matches(&entry.to_string()))
    }

    /// Writes a `Timestamp,Event` CSV of every entry.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "Timestamp,Event")?;
        for entry in &self.entries {
            writeln!(
                writer,
                "{},{}",
                csv_field(&entry.formatted_timestamp()),
                csv_field(&entry.message)
            )?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Exports to `path`, returning the number of rows written.
    pub fn export_csv(&self, path: &Path) -> Result<usize> {
        let file = File::create(path)?;
        self.write_csv(BufWriter::new(file))?;
        log::info!("Exported {} log entries to {}", self.entries.len(), path.display());
        Ok(self.entries.len())
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
