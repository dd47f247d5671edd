// Metrics hooks for the filter engine.
//
// Callers install a global `FilterMetrics` implementation via
// [`set_filter_metrics`]; every call through [`JobFilter::filter`]
// (and the `filter_jobs` convenience wrapper) then reports its latency and
// hit count. This keeps instrumentation decoupled from any specific metrics
// backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for filter operations.
pub trait FilterMetrics: Send + Sync {
    /// Record the outcome of one filter invocation.
    ///
    /// `latency` is the wall-clock duration of the call, `input_count` is the
    /// size of the job collection examined, and `hit_count` is the number of
    /// jobs that passed both gates.
    fn record_filter(&self, latency: Duration, input_count: usize, hit_count: usize);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn FilterMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn FilterMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn FilterMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global filter metrics recorder.
///
/// Typically called once during startup so every filter invocation shares the
/// same metrics backend. Passing `None` uninstalls the recorder.
pub fn set_filter_metrics(recorder: Option<Arc<dyn FilterMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
