use chrono::Local;
use sysinfo::{Process, ProcessesToUpdate, System};

use super::{ProcessSnapshot, Sample};
use crate::error::{MonitorError, Result};

/// Source of system-wide and per-process readings, queried once per tick.
pub trait Sampler {
    fn sample_system(&mut self) -> Result<Sample>;
    fn sample_processes(&mut self) -> Result<Vec<ProcessSnapshot>>;
}

/// Reads metrics through `sysinfo`
#[derive(Debug)]
pub struct SysinfoSampler {
    system: System,
}

impl Default for SysinfoSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoSampler {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }

    /// Memory totals back every percentage, so both reads refresh them.
    fn refresh_memory(&mut self) -> Result<()> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(MonitorError::Unsupported);
        }
        self.system.refresh_memory();
        if self.system.total_memory() == 0 {
            return Err(MonitorError::system_query("total memory reported as zero"));
        }
        Ok(())
    }

    fn memory_percent(&self, bytes: u64) -> f32 {
        match self.system.total_memory() {
            0 => 0.0,
            total => (bytes as f64 / total as f64 * 100.0) as f32,
        }
    }

    fn collect_snapshot(&self, process: &Process) -> ProcessSnapshot {
        ProcessSnapshot {
            pid: process.pid().as_u32(),
            name: process.name().to_string_lossy().into_owned(),
            cpu_percent: process.cpu_usage(),
            memory_percent: self.memory_percent(process.memory()),
            status: process.status().to_string(),
        }
    }
}

impl Sampler for SysinfoSampler {
    fn sample_system(&mut self) -> Result<Sample> {
        self.refresh_memory()?;
        self.system.refresh_cpu_usage();
        Ok(Sample {
            timestamp: Local::now(),
            cpu_percent: self.system.global_cpu_usage(),
            memory_percent: self.memory_percent(self.system.used_memory()),
        })
    }

    fn sample_processes(&mut self) -> Result<Vec<ProcessSnapshot>> {
        self.refresh_memory()?;
        self.system.refresh_processes(ProcessesToUpdate::All, true);
        // Processes that exited between refreshes are simply absent; threads
        // are listed separately by sysinfo on Linux and skipped here.
        Ok(self
            .system
            .processes()
            .values()
            .filter(|p| p.thread_kind().is_none())
            .map(|p| self.collect_snapshot(p))
            .collect())
    }
}
