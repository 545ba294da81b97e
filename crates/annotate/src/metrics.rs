// Metrics hooks for the `annotate` crate.
//
// Install a global `AnnotateMetrics` implementation with
// [`set_annotate_metrics`]; every `Annotator` call then reports its latency
// and match counts. The crate itself does not depend on a metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for annotation calls.
pub trait AnnotateMetrics: Send + Sync {
    /// Record one annotated text.
    ///
    /// `matches` counts resolved matches, `annotated` those rendered with a
    /// full definition, and `redirected` those rendered as cross-references.
    /// Matches left literal (already in scope, or pointing at a missing
    /// canonical term) make up the remainder.
    fn record_annotation(
        &self,
        latency: Duration,
        matches: usize,
        annotated: usize,
        redirected: usize,
    );
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn AnnotateMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn AnnotateMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn AnnotateMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global annotation metrics recorder.
pub fn set_annotate_metrics(recorder: Option<Arc<dyn AnnotateMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}
