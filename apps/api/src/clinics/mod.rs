//! Clinic lookup — free-text locality in, nearby veterinary clinics out.
//!
//! The core only consumes the normalized shapes below; the OSM backend in
//! [`osm`] is the single production implementation.

pub mod handlers;
pub mod osm;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// One nearby point of interest. Address and phone may be empty.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Clinic {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub lat: f64,
    pub lon: f64,
}

/// Transport-level lookup failures. A miss (unknown address, zero clinics)
/// is not an error — those are `None` / empty results.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service returned status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// The clinic lookup seam, carried in `AppState` as `Arc<dyn ClinicDirectory>`.
#[async_trait]
pub trait ClinicDirectory: Send + Sync {
    /// Resolves a free-text address/locality to coordinates.
    /// `None` when the provider has no match.
    async fn locate(&self, query: &str) -> Result<Option<GeoPoint>, LookupError>;

    /// Veterinary clinics around a point, within the configured radius.
    async fn nearby(&self, center: GeoPoint) -> Result<Vec<Clinic>, LookupError>;
}
