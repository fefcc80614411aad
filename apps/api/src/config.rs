use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; a `.env` file is honored when present.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Base URL of the Nominatim geocoding service.
    pub nominatim_url: String,
    /// Interpreter endpoint of the Overpass places service.
    pub overpass_url: String,
    /// Search radius around the geocoded point, in meters.
    pub clinic_radius_m: u32,
    /// Timeout for each external lookup round trip, in seconds.
    pub lookup_timeout_secs: u64,
    /// User-Agent sent to the OSM services (Nominatim requires an identifying one).
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            nominatim_url: env_or("NOMINATIM_URL", "https://nominatim.openstreetmap.org"),
            overpass_url: env_or("OVERPASS_URL", "https://overpass-api.de/api/interpreter"),
            clinic_radius_m: std::env::var("CLINIC_RADIUS_M")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u32>()
                .context("CLINIC_RADIUS_M must be a whole number of meters")?,
            lookup_timeout_secs: std::env::var("LOOKUP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "25".to_string())
                .parse::<u64>()
                .context("LOOKUP_TIMEOUT_SECS must be a whole number of seconds")?,
            user_agent: env_or(
                "LOOKUP_USER_AGENT",
                concat!("whiskerlog/", env!("CARGO_PKG_VERSION")),
            ),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
