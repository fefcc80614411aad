//! Diagnosis — threshold rules over the most recent window of log entries.
//!
//! `AppState` holds an `Arc<dyn DiagnosisEngine>`, swapped at startup. The
//! engine is a pure function of its input window: no I/O, no state, no
//! suspension points.

pub mod handlers;
pub mod rules;

use crate::models::health_log::HealthLogEntry;

pub use rules::{DiagnosisFinding, WINDOW_SIZE};

/// The diagnosis engine seam. Implement this to swap backends without
/// touching the endpoint or handler code.
pub trait DiagnosisEngine: Send + Sync {
    /// Evaluates the window (oldest first, at most [`WINDOW_SIZE`] entries)
    /// and returns triggered findings in fixed rule order.
    fn evaluate(&self, window: &[HealthLogEntry]) -> Vec<DiagnosisFinding>;
}

/// Default engine: the fixed rule table in [`rules`].
pub struct ThresholdRuleEngine;

impl DiagnosisEngine for ThresholdRuleEngine {
    fn evaluate(&self, window: &[HealthLogEntry]) -> Vec<DiagnosisFinding> {
        rules::evaluate(window)
    }
}
