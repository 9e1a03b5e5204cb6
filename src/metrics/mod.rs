mod circular_buffer;
pub mod detector;
pub mod history;
pub mod sampler;

pub use circular_buffer::RollingBuffer;
pub use detector::{Alert, AnomalyDetector};
pub use history::{HistoryStore, ProcessSample, ProcessSeries};
pub use sampler::{Sampler, SysinfoSampler};

use chrono::{DateTime, Local};
use log::{debug, error, warn};
use std::time::{Duration, Instant};

use crate::config::MonitorConfig;
use crate::error::Result;
use crate::events::EventLog;

/// One system-wide observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub timestamp: DateTime<Local>,
    pub cpu_percent: f32,
    pub memory_percent: f32,
}

/// One process as seen during a single tick. PIDs may be reused by the OS and
/// names are not unique.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSnapshot {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f32,
    pub memory_percent: f32,
    pub status: String,
}

/// Everything the presentation layer reads: history, event log and the latest
/// process table.
#[derive(Debug, Clone)]
pub struct MonitorState {
    pub history: HistoryStore,
    pub events: EventLog,
    processes: Vec<ProcessSnapshot>,
}

impl Default for MonitorState {
    fn default() -> Self {
        Self::new()
    }
}

impl MonitorState {
    pub fn new() -> Self {
        Self {
            history: HistoryStore::new(),
            events: EventLog::new(),
            processes: Vec::new(),
        }
    }

    /// Latest snapshot, busiest first
    pub fn processes(&self) -> &[ProcessSnapshot] {
        &self.processes
    }

    /// Clears the log, process history and chart buffers together
    pub fn reset(&mut self) {
        self.events.clear();
        self.history.reset();
        log::info!("Monitor state reset");
    }

    fn set_processes(&mut self, mut processes: Vec<ProcessSnapshot>) {
        processes.sort_by(|a, b| b.cpu_percent.total_cmp(&a.cpu_percent));
        self.processes = processes;
    }
}

/// Fixed-delay tick timing: the next tick is due `interval` after the
/// previous one *finished*.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    update_interval: Duration,
    last_update: Option<Instant>,
}

impl TickScheduler {
    pub fn new(update_interval: Duration) -> Self {
        Self {
            update_interval,
            last_update: None,
        }
    }

    pub fn update_interval(&self) -> Duration {
        self.update_interval
    }

    pub fn set_update_interval(&mut self, interval: Duration) {
        self.update_interval = interval;
    }

    pub fn should_update(&self, now: Instant) -> bool {
        self.time_until_due(now).is_zero()
    }

    pub fn time_until_due(&self, now: Instant) -> Duration {
        match self.last_update {
            None => Duration::ZERO,
            Some(last) => (last + self.update_interval).saturating_duration_since(now),
        }
    }

    pub fn mark_complete(&mut self, now: Instant) {
        self.last_update = Some(now);
    }
}

/// Result of one successful tick
#[derive(Debug, Clone)]
pub struct TickReport {
    pub sample: Sample,
    pub alerts: Vec<Alert>,
}

/// Drives sampling, recording and detection against a [`MonitorState`].
#[derive(Debug)]
pub struct Monitor<S = SysinfoSampler> {
    sampler: S,
    detector: AnomalyDetector,
    scheduler: TickScheduler,
}

impl Default for Monitor<SysinfoSampler> {
    fn default() -> Self {
        Self::new(SysinfoSampler::new(), &MonitorConfig::default())
    }
}

impl<S: Sampler> Monitor<S> {
    pub fn new(sampler: S, config: &MonitorConfig) -> Self {
        Self {
            sampler,
            detector: AnomalyDetector::default(),
            scheduler: TickScheduler::new(config.update_interval()),
        }
    }

    pub fn detector(&self) -> &AnomalyDetector {
        &self.detector
    }

    pub fn update_interval(&self) -> Duration {
        self.scheduler.update_interval()
    }

    pub fn set_update_interval(&mut self, interval: Duration) {
        self.scheduler.set_update_interval(interval);
    }

    pub fn time_until_next_tick(&self, now: Instant) -> Duration {
        self.scheduler.time_until_due(now)
    }

    /// Runs a single tick: sample, record, evaluate.
    pub fn tick(&mut self, state: &mut MonitorState) -> Result<TickReport> {
        let sample = self.sampler.sample_system()?;
        let processes = self.sampler.sample_processes()?;

        state.history.record_system(sample);
        state.history.record_processes(&processes, sample.timestamp);

        let alerts = self.detector.evaluate(&state.history, &processes, &sample);
        debug!(
            "Tick: cpu {:.1}%, memory {:.1}%, {} processes, {} alerts",
            sample.cpu_percent,
            sample.memory_percent,
            processes.len(),
            alerts.len()
        );

        state.set_processes(processes);
        Ok(TickReport { sample, alerts })
    }

    /// Runs a tick if one is due and folds its outcome into the event log.
    /// A failed tick is logged and never stops later ones.
    pub fn poll(&mut self, state: &mut MonitorState) -> bool {
        if !self.scheduler.should_update(Instant::now()) {
            return false;
        }

        match self.tick(state) {
            Ok(report) => {
                for alert in report.alerts {
                    warn!("{}", alert);
                    state.events.warning(alert.to_string());
                }
            }
            Err(e) => {
                error!("Error monitoring system: {}", e);
                state.events.error(format!("Error monitoring system: {}", e));
            }
        }

        self.scheduler.mark_complete(Instant::now());
        true
    }
}
