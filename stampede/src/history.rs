use crate::result::RunSummary;
use crate::stats;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

const HISTORY_CAPACITY: usize = 50;

/// Bounded FIFO store of finished run summaries, oldest first. Cloneable
/// handle over shared state; lives for the process, no teardown.
#[derive(Clone, Debug, Default)]
pub struct TestHistory {
    inner: Arc<Mutex<VecDeque<RunSummary>>>,
}

impl TestHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished run, evicting the oldest entry once the store holds
    /// 50 runs.
    pub fn record(&self, summary: RunSummary) {
        let mut runs = self.inner.lock().expect("history lock poisoned");
        if runs.len() == HISTORY_CAPACITY {
            runs.pop_front();
        }
        runs.push_back(summary);
    }

    /// Snapshot of the stored runs in insertion order, oldest first.
    pub fn list_all(&self) -> Vec<RunSummary> {
        self.inner
            .lock()
            .expect("history lock poisoned")
            .iter()
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("history lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cross-run summary over the current store contents; `None` when no
    /// runs are stored.
    pub fn aggregate(&self) -> Option<AggregateMetrics> {
        let runs = self.inner.lock().expect("history lock poisoned");
        if runs.is_empty() {
            return None;
        }

        let count = runs.len() as f64;
        Some(AggregateMetrics {
            total_tests: runs.len(),
            avg_success_rate: runs.iter().map(|r| r.success_rate).sum::<f64>() / count,
            avg_response_time: runs.iter().map(|r| r.avg_response_time).sum::<f64>() / count,
            avg_throughput: runs.iter().map(|r| r.requests_per_second).sum::<f64>() / count,
            total_requests: runs.iter().map(|r| r.total_requests).sum(),
            total_successful: runs.iter().map(|r| r.successful_requests).sum(),
            total_failed: runs.iter().map(|r| r.failed_requests).sum(),
        })
    }
}

/// Averages and grand totals across all stored runs. Averages are unweighted
/// (per run, not per request); totals are straight sums.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AggregateMetrics {
    pub total_tests: usize,
    pub avg_success_rate: f64,
    pub avg_response_time: f64,
    pub avg_throughput: f64,
    pub total_requests: u64,
    pub total_successful: u64,
    pub total_failed: u64,
}

impl AggregateMetrics {
    /// Success percentage over the grand totals, for callers that want a
    /// request-weighted rate instead of the per-run average.
    pub fn overall_success_rate(&self) -> f64 {
        stats::success_rate(self.total_successful, self.total_requests)
    }
}
