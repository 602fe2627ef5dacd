//! Metric types

use std::collections::BTreeMap;

/// Per-endpoint outcome of a finished attack
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EndpointSummary {
    /// Framework key, e.g. `POST /api/auth/login`
    pub label: String,
    pub path: String,
    pub requests: usize,
    pub successes: usize,
    pub failures: usize,
    pub min_ms: usize,
    pub max_ms: usize,
    pub mean_ms: f64,
    pub status_codes: BTreeMap<u16, usize>,
}

impl EndpointSummary {
    pub fn success_rate(&self) -> f64 {
        if self.requests == 0 {
            return 0.0;
        }
        self.successes as f64 / self.requests as f64 * 100.0
    }
}

/// Observed assignment to exam request ratio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskMix {
    pub assignments: usize,
    pub exams: usize,
}

impl TaskMix {
    /// Assignments per exam, `None` until an exam was submitted
    pub fn ratio(&self) -> Option<f64> {
        (self.exams > 0).then(|| self.assignments as f64 / self.exams as f64)
    }
}
