use std::sync::Arc;

use crate::clinics::ClinicDirectory;
use crate::config::Config;
use crate::diagnosis::DiagnosisEngine;
use crate::records::store::RecordStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Per-session append-only health log. In-memory only.
    pub store: RecordStore,
    /// Pluggable diagnosis engine. Default: ThresholdRuleEngine.
    pub engine: Arc<dyn DiagnosisEngine>,
    /// Clinic lookup backend. Default: OsmClinicDirectory (Nominatim + Overpass).
    pub clinics: Arc<dyn ClinicDirectory>,
}
