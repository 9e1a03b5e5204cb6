use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, Local};

use super::circular_buffer::RollingBuffer;
use super::{ProcessSnapshot, Sample};
use crate::config::{ANOMALY_WINDOW, HISTORY_LEN};

/// One observation of a process name, folded in from a tick's snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessSample {
    pub timestamp: DateTime<Local>,
    pub pid: u32,
    pub cpu: f32,
    pub memory: f32,
}

/// Recent samples for one process name.
///
/// Only the trailing window is retained; `recorded` keeps counting every tick
/// the name was seen so callers can still tell how long it has been tracked.
#[derive(Debug, Clone)]
pub struct ProcessSeries {
    window: VecDeque<ProcessSample>,
    capacity: usize,
    recorded: usize,
}

impl ProcessSeries {
    fn new(capacity: usize) -> Self {
        Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
            recorded: 0,
        }
    }

    fn push(&mut self, sample: ProcessSample) {
        if self.window.len() >= self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(sample);
        self.recorded += 1;
    }

    /// Number of ticks this name has been recorded since the last reset
    pub fn recorded(&self) -> usize {
        self.recorded
    }

    /// Retained samples, oldest first
    pub fn window(&self) -> impl Iterator<Item = &ProcessSample> {
        self.window.iter()
    }

    pub fn latest(&self) -> Option<&ProcessSample> {
        self.window.back()
    }

    /// Highest CPU value among the last `n` retained samples
    pub fn peak_cpu(&self, n: usize) -> Option<f32> {
        let skip = self.window.len().saturating_sub(n);
        self.window
            .iter()
            .skip(skip)
            .map(|s| s.cpu)
            .reduce(f32::max)
    }
}

/// Owns every time series the monitor keeps: the system-wide chart buffer
/// and the per-name process windows.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    system: RollingBuffer<Option<Sample>>,
    processes: BTreeMap<String, ProcessSeries>,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    /// A chart buffer of `HISTORY_LEN` slots and `ANOMALY_WINDOW`-sample
    /// process windows.
    pub fn new() -> Self {
        Self {
            system: RollingBuffer::new(HISTORY_LEN),
            processes: BTreeMap::new(),
        }
    }

    pub fn record_system(&mut self, sample: Sample) {
        self.system.push(Some(sample));
    }

    pub fn record_process(
        &mut self,
        name: &str,
        pid: u32,
        cpu: f32,
        memory: f32,
        timestamp: DateTime<Local>,
    ) {
        self.processes
            .entry(name.to_owned())
            .or_insert_with(|| ProcessSeries::new(ANOMALY_WINDOW))
            .push(ProcessSample {
                timestamp,
                pid,
                cpu,
                memory,
            });
    }

    /// Records one sample per distinct name in `snapshots`. When several
    /// processes share a name, the busiest one is recorded.
    pub fn record_processes(&mut self, snapshots: &[ProcessSnapshot], timestamp: DateTime<Local>) {
        let mut busiest: BTreeMap<&str, &ProcessSnapshot> = BTreeMap::new();
        for snapshot in snapshots {
            busiest
                .entry(snapshot.name.as_str())
                .and_modify(|current| {
                    if snapshot.cpu_percent > current.cpu_percent {
                        *current = snapshot;
                    }
                })
                .or_insert(snapshot);
        }

        for (name, snapshot) in busiest {
            self.record_process(
                name,
                snapshot.pid,
                snapshot.cpu_percent,
                snapshot.memory_percent,
                timestamp,
            );
        }
    }

    pub fn reset(&mut self) {
        self.processes.clear();
        self.system.reset();
    }

    pub fn capacity(&self) -> usize {
        self.system.capacity()
    }

    pub fn write_index(&self) -> usize {
        self.system.write_pos()
    }

    /// Recorded system samples in chronological order, without padding
    pub fn samples(&self) -> impl Iterator<Item = &Sample> {
        self.system.iter().flatten()
    }

    pub fn latest_sample(&self) -> Option<&Sample> {
        self.system.last().as_ref()
    }

    /// CPU% for every chart slot, oldest first; empty slots read as zero
    pub fn cpu_series(&self) -> Vec<f32> {
        self.system
            .iter()
            .map(|s| s.as_ref().map_or(0.0, |s| s.cpu_percent))
            .collect()
    }

    /// Memory% for every chart slot, oldest first; empty slots read as zero
    pub fn memory_series(&self) -> Vec<f32> {
        self.system
            .iter()
            .map(|s| s.as_ref().map_or(0.0, |s| s.memory_percent))
            .collect()
    }

    pub fn process(&self, name: &str) -> Option<&ProcessSeries> {
        self.processes.get(name)
    }

    pub fn processes(&self) -> impl Iterator<Item = (&str, &ProcessSeries)> {
        self.processes.iter().map(|(name, series)| (name.as_str(), series))
    }

    pub fn process_count(&self) -> usize {
        self.processes.len()
    }
}
