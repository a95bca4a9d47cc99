//! Macrocheck Status Tools
//!
//! Liveness and runtime status of the service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::nutrition::Thresholds;

/// Fixed liveness response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Liveness check; always ok while the process can answer
pub fn healthz() -> HealthResponse {
    HealthResponse { status: "ok" }
}

/// Runtime status of the macrocheck service
#[derive(Debug, Clone, Serialize)]
pub struct MacrocheckStatus {
    pub version: &'static str,
    pub compiled_at: &'static str,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,

    /// Evaluation information
    pub evaluations_served: u64,
    pub thresholds: Thresholds,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: String,
    evaluations_served: u64,
    thresholds: Thresholds,
}

impl StatusTracker {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            evaluations_served: 0,
            thresholds,
        }
    }

    /// Count one served evaluation
    pub fn record_evaluation(&mut self) {
        self.evaluations_served += 1;
    }

    pub fn evaluations_served(&self) -> u64 {
        self.evaluations_served
    }

    /// Get the current status
    pub fn get_status(&self) -> MacrocheckStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        MacrocheckStatus {
            version: build_info.version,
            compiled_at: build_info.compiled_at,
            started_at: self.started_at.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            evaluations_served: self.evaluations_served,
            thresholds: self.thresholds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healthz_is_fixed() {
        let json = serde_json::to_string(&healthz()).unwrap();
        assert_eq!(json, r#"{"status":"ok"}"#);
    }

    #[test]
    fn test_status_counts_evaluations() {
        let mut tracker = StatusTracker::new(Thresholds::default());
        tracker.record_evaluation();
        tracker.record_evaluation();
        let status = tracker.get_status();
        assert_eq!(status.evaluations_served, 2);
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.thresholds, Thresholds::default());
        assert_eq!(status.version, crate::build_info::VERSION);
    }
}
