mod clinics;
mod config;
mod diagnosis;
mod errors;
mod models;
mod recommend;
mod records;
mod reference;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::clinics::osm::OsmClinicDirectory;
use crate::config::Config;
use crate::diagnosis::ThresholdRuleEngine;
use crate::records::store::RecordStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Whiskerlog API v{}", env!("CARGO_PKG_VERSION"));

    // Per-session in-memory record store; nothing survives a restart
    let store = RecordStore::new();

    // Diagnosis engine: fixed threshold rules over the last-7 window
    let engine = Arc::new(ThresholdRuleEngine);

    // OSM clinic directory (Nominatim geocode + Overpass nearby search)
    let clinics = Arc::new(OsmClinicDirectory::new(&config)?);
    info!(
        "Clinic directory initialized (radius: {}m, timeout: {}s)",
        config.clinic_radius_m, config.lookup_timeout_secs
    );

    let state = AppState {
        config: config.clone(),
        store,
        engine,
        clinics,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
