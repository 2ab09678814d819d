//! Pure metric calculations over a sequence of latencies (milliseconds).
//!
//! Empty inputs yield 0 rather than an error so that downstream aggregation
//! stays branch-free.

pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn minimum(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

pub fn maximum(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Nearest-rank percentile without interpolation: sort ascending and index at
/// `floor(len * p)`. The index can only reach `len` when `p == 1.0`, in which
/// case it is clamped to the last element. Downstream compatibility depends
/// on this exact rule; do not substitute an interpolated percentile.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let index = ((sorted.len() as f64 * p) as usize).min(sorted.len() - 1);
    sorted[index]
}

/// Success percentage in [0, 100]; 0 when no requests were made.
pub fn success_rate(successful: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    successful as f64 / total as f64 * 100.0
}

/// Requests per second over a wall-clock span; 0 for an empty run or a
/// non-positive span.
pub fn throughput(total: u64, elapsed_secs: f64) -> f64 {
    if total == 0 || elapsed_secs <= 0.0 {
        return 0.0;
    }
    total as f64 / elapsed_secs
}
