//! Observation hook for left-exhaustion runs.
//!
//! At most one [`MatchMetrics`] recorder is active per process. Each run
//! takes a snapshot of it when it starts, so swapping recorders mid-run only
//! affects later runs. Nothing here feeds back into matching decisions.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::types::StopReason;

/// Metrics observer for left-exhaustion runs.
pub trait MatchMetrics: Send + Sync {
    /// Record one solver round: its 1-based number, the size of the residual
    /// graph, how many pairs it matched and how long the solve took.
    fn record_round(&self, round: usize, edges: usize, matched: usize, latency: Duration);

    /// Record a finished run. `unmatched` counts both stuck and pending left ids.
    fn record_run(
        &self,
        stop: StopReason,
        rounds: usize,
        matched: usize,
        unmatched: usize,
        latency: Duration,
    );
}

/// Replaceable recorder cell. Readers clone the `Arc` out and release the
/// lock before reporting.
struct RecorderSlot {
    current: RwLock<Option<Arc<dyn MatchMetrics>>>,
}

impl RecorderSlot {
    fn empty() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    fn snapshot(&self) -> Option<Arc<dyn MatchMetrics>> {
        match self.current.read() {
            Ok(current) => current.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn replace(&self, recorder: Option<Arc<dyn MatchMetrics>>) {
        match self.current.write() {
            Ok(mut current) => *current = recorder,
            Err(poisoned) => *poisoned.into_inner() = recorder,
        }
    }
}

static ACTIVE: OnceCell<RecorderSlot> = OnceCell::new();

fn active_slot() -> &'static RecorderSlot {
    ACTIVE.get_or_init(RecorderSlot::empty)
}

/// Recorder to report the current run to, if one is installed.
pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    active_slot().snapshot()
}

/// Install a process-wide recorder, or remove it with `None`.
///
/// Runs already in progress keep reporting to the recorder they started with.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    active_slot().replace(recorder);
}
