//! Threshold-based anomaly detection

use std::collections::BTreeSet;
use std::fmt;

use super::history::HistoryStore;
use super::{ProcessSnapshot, Sample};
use crate::config::{ANOMALY_WINDOW, THRESHOLD_PERCENT};

#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// A process name whose trailing CPU window peaked above the threshold
    ProcessCpu { name: String, pid: u32, peak: f32 },
    /// System-wide CPU or memory above the threshold
    SystemResources { cpu: f32, memory: f32 },
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::ProcessCpu { name, pid, .. } => {
                write!(f, "High CPU usage detected for {} (PID: {})", name, pid)
            }
            Alert::SystemResources { cpu, memory } => write!(
                f,
                "High resource usage detected (CPU: {:.1}%, Memory: {:.1}%)",
                cpu, memory
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnomalyDetector {
    threshold_percent: f32,
    window: usize,
}

impl Default for AnomalyDetector {
    fn default() -> Self {
        Self {
            threshold_percent: THRESHOLD_PERCENT,
            window: ANOMALY_WINDOW,
        }
    }
}

impl AnomalyDetector {
    pub fn threshold_percent(&self) -> f32 {
        self.threshold_percent
    }

    pub fn is_high(&self, percent: f32) -> bool {
        percent > self.threshold_percent
    }

    /// Checks every process name present in this tick's snapshot, then the
    /// system-wide sample. Fires on every tick the condition holds.
    pub fn evaluate(
        &self,
        history: &HistoryStore,
        snapshots: &[ProcessSnapshot],
        sample: &Sample,
    ) -> Vec<Alert> {
        let names: BTreeSet<&str> = snapshots.iter().map(|p| p.name.as_str()).collect();

        let mut alerts: Vec<Alert> = names
            .into_iter()
            .filter_map(|name| self.check_process(history, name))
            .collect();

        if self.is_high(sample.cpu_percent) || self.is_high(sample.memory_percent) {
            alerts.push(Alert::SystemResources {
                cpu: sample.cpu_percent,
                memory: sample.memory_percent,
            });
        }

        alerts
    }

    fn check_process(&self, history: &HistoryStore, name: &str) -> Option<Alert> {
        let series = history.process(name)?;
        // Needs strictly more than a full window before it is judged.
        if series.recorded() <= self.window {
            return None;
        }
        let peak = series.peak_cpu(self.window)?;
        if !self.is_high(peak) {
            return None;
        }
        let pid = series.latest()?.pid;
        Some(Alert::ProcessCpu {
            name: name.to_string(),
            pid,
            peak,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn store_with(name: &str, cpus: &[f32]) -> HistoryStore {
        let mut store = HistoryStore::new();
        for (i, cpu) in cpus.iter().enumerate() {
            store.record_process(name, 100 + i as u32, *cpu, 1.0, Local::now());
        }
        store
    }

    fn snapshot(name: &str) -> Vec<ProcessSnapshot> {
        vec![ProcessSnapshot {
            pid: 1,
            name: name.to_string(),
            cpu_percent: 0.0,
            memory_percent: 0.0,
            status: "Run".to_string(),
        }]
    }

    fn calm() -> Sample {
        Sample {
            timestamp: Local::now(),
            cpu_percent: 50.0,
            memory_percent: 50.0,
        }
    }

    #[test]
    fn spike_inside_window_fires_once() {
        let store = store_with("render", &[0.0, 10.0, 20.0, 90.0, 30.0, 15.0]);
        let alerts = AnomalyDetector::default().evaluate(&store, &snapshot("render"), &calm());
        assert_eq!(alerts.len(), 1);
        assert_eq!(
            alerts[0],
            Alert::ProcessCpu {
                name: "render".to_string(),
                pid: 105,
                peak: 90.0
            }
        );
        assert_eq!(
            alerts[0].to_string(),
            "High CPU usage detected for render (PID: 105)"
        );
    }

    #[test]
    fn steady_load_under_threshold_is_quiet() {
        let store = store_with("render", &[0.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
        let alerts = AnomalyDetector::default().evaluate(&store, &snapshot("render"), &calm());
        assert!(alerts.is_empty());
    }

    #[test]
    fn spike_that_left_the_window_is_ignored() {
        let store = store_with("render", &[99.0, 10.0, 20.0, 30.0, 40.0, 50.0]);
        let alerts = AnomalyDetector::default().evaluate(&store, &snapshot("render"), &calm());
        assert!(alerts.is_empty());
    }

    #[test]
    fn exactly_window_samples_is_not_evaluated() {
        let store = store_with("render", &[95.0, 95.0, 95.0, 95.0, 95.0]);
        let alerts = AnomalyDetector::default().evaluate(&store, &snapshot("render"), &calm());
        assert!(alerts.is_empty());
    }

    #[test]
    fn threshold_is_strict() {
        let store = store_with("render", &[80.0; 6]);
        let alerts = AnomalyDetector::default().evaluate(&store, &snapshot("render"), &calm());
        assert!(alerts.is_empty());
    }

    #[test]
    fn names_missing_from_snapshot_are_skipped() {
        let store = store_with("render", &[95.0; 6]);
        let alerts = AnomalyDetector::default().evaluate(&store, &snapshot("other"), &calm());
        assert!(alerts.is_empty());
    }

    #[test]
    fn high_system_cpu_reports_both_values() {
        let store = HistoryStore::new();
        let sample = Sample {
            cpu_percent: 85.0,
            ..calm()
        };
        let alerts = AnomalyDetector::default().evaluate(&store, &[], &sample);
        assert_eq!(alerts.len(), 1);
        let message = alerts[0].to_string();
        assert!(message.contains("CPU: 85.0%"));
        assert!(message.contains("Memory: 50.0%"));
    }

    #[test]
    fn high_system_memory_alone_fires() {
        let store = HistoryStore::new();
        let sample = Sample {
            memory_percent: 91.5,
            ..calm()
        };
        let alerts = AnomalyDetector::default().evaluate(&store, &[], &sample);
        assert_eq!(
            alerts,
            vec![Alert::SystemResources {
                cpu: 50.0,
                memory: 91.5
            }]
        );
    }

    #[test]
    fn calm_system_is_quiet() {
        let store = HistoryStore::new();
        assert!(AnomalyDetector::default()
            .evaluate(&store, &[], &calm())
            .is_empty());
    }
}
