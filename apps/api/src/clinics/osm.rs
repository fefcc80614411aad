/// OSM Clinic Directory — the single point of entry for all OpenStreetMap
/// calls in Whiskerlog.
///
/// Two services, one round trip each: Nominatim turns the user's free-text
/// locality into coordinates, Overpass lists `amenity=veterinary` features
/// around them. Both calls share one client with a hard timeout and are
/// never retried — a stale or duplicate geocoding request has no value, so
/// failures surface to the caller immediately.
use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::clinics::{Clinic, ClinicDirectory, GeoPoint, LookupError};
use crate::config::Config;

const UNNAMED_CLINIC: &str = "Unnamed veterinary clinic";

#[derive(Clone)]
pub struct OsmClinicDirectory {
    client: Client,
    nominatim_url: String,
    overpass_url: String,
    radius_m: u32,
}

impl OsmClinicDirectory {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.lookup_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            nominatim_url: config.nominatim_url.trim_end_matches('/').to_string(),
            overpass_url: config.overpass_url.clone(),
            radius_m: config.clinic_radius_m,
        })
    }

    fn overpass_query(&self, center: GeoPoint) -> String {
        let around = format!("around:{},{},{}", self.radius_m, center.lat, center.lon);
        format!(
            "[out:json];(\
             node[\"amenity\"=\"veterinary\"]({around});\
             way[\"amenity\"=\"veterinary\"]({around});\
             relation[\"amenity\"=\"veterinary\"]({around}););\
             out center;"
        )
    }
}

#[async_trait]
impl ClinicDirectory for OsmClinicDirectory {
    async fn locate(&self, query: &str) -> Result<Option<GeoPoint>, LookupError> {
        let url = format!("{}/search", self.nominatim_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let places: Vec<NominatimPlace> = response.json().await?;
        let Some(place) = places.into_iter().next() else {
            debug!("Geocoder found no match for {query:?}");
            return Ok(None);
        };

        // Nominatim serializes coordinates as strings
        let lat = place
            .lat
            .parse::<f64>()
            .map_err(|_| LookupError::Malformed(format!("bad latitude {:?}", place.lat)))?;
        let lon = place
            .lon
            .parse::<f64>()
            .map_err(|_| LookupError::Malformed(format!("bad longitude {:?}", place.lon)))?;

        Ok(Some(GeoPoint { lat, lon }))
    }

    async fn nearby(&self, center: GeoPoint) -> Result<Vec<Clinic>, LookupError> {
        let query = self.overpass_query(center);
        let response = self
            .client
            .get(&self.overpass_url)
            .query(&[("data", query.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body: OverpassResponse = response.json().await?;
        let clinics: Vec<Clinic> = body.elements.iter().filter_map(element_to_clinic).collect();
        debug!(
            "Overpass returned {} element(s), {} usable clinic(s)",
            body.elements.len(),
            clinics.len()
        );
        Ok(clinics)
    }
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    #[serde(rename = "type")]
    kind: String,
    lat: Option<f64>,
    lon: Option<f64>,
    center: Option<OverpassCenter>,
    tags: Option<HashMap<String, String>>,
}

#[derive(Debug, Deserialize)]
struct OverpassCenter {
    lat: f64,
    lon: f64,
}

/// Maps one Overpass element to a clinic. Untagged elements are dropped;
/// ways and relations use their `center` coordinate and are dropped when it
/// is missing.
fn element_to_clinic(el: &OverpassElement) -> Option<Clinic> {
    let tags = el.tags.as_ref()?;

    let (lat, lon) = if el.kind == "node" {
        (el.lat?, el.lon?)
    } else {
        let center = el.center.as_ref()?;
        (center.lat, center.lon)
    };

    let name = tags
        .get("name")
        .cloned()
        .unwrap_or_else(|| UNNAMED_CLINIC.to_string());
    let address = ["addr:full", "addr:road", "addr:street"]
        .iter()
        .find_map(|k| tags.get(*k))
        .cloned()
        .unwrap_or_default();
    let phone = tags.get("phone").cloned().unwrap_or_default();

    Some(Clinic {
        name,
        address,
        phone,
        lat,
        lon,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base: &str) -> Config {
        Config {
            port: 0,
            rust_log: "info".to_string(),
            nominatim_url: base.to_string(),
            overpass_url: format!("{base}/api/interpreter"),
            clinic_radius_m: 3000,
            lookup_timeout_secs: 5,
            user_agent: "whiskerlog-test".to_string(),
        }
    }

    fn element(value: serde_json::Value) -> OverpassElement {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_node_element_maps_directly() {
        let clinic = element_to_clinic(&element(json!({
            "type": "node",
            "lat": 37.5,
            "lon": 127.0,
            "tags": {"name": "Happy Paws", "addr:road": "Main St 1", "phone": "02-123"}
        })))
        .unwrap();
        assert_eq!(clinic.name, "Happy Paws");
        assert_eq!(clinic.address, "Main St 1");
        assert_eq!(clinic.phone, "02-123");
        assert_eq!(clinic.lat, 37.5);
    }

    #[test]
    fn test_way_element_uses_center_coordinate() {
        let clinic = element_to_clinic(&element(json!({
            "type": "way",
            "center": {"lat": 37.6, "lon": 127.1},
            "tags": {"name": "City Vet"}
        })))
        .unwrap();
        assert_eq!(clinic.lat, 37.6);
        assert_eq!(clinic.lon, 127.1);
        assert_eq!(clinic.address, "");
        assert_eq!(clinic.phone, "");
    }

    #[test]
    fn test_way_without_center_is_dropped() {
        assert!(element_to_clinic(&element(json!({
            "type": "way",
            "tags": {"name": "Ghost Vet"}
        })))
        .is_none());
    }

    #[test]
    fn test_untagged_element_is_dropped() {
        assert!(element_to_clinic(&element(json!({
            "type": "node",
            "lat": 1.0,
            "lon": 2.0
        })))
        .is_none());
    }

    #[test]
    fn test_nameless_clinic_gets_placeholder() {
        let clinic = element_to_clinic(&element(json!({
            "type": "node",
            "lat": 1.0,
            "lon": 2.0,
            "tags": {"phone": "555"}
        })))
        .unwrap();
        assert_eq!(clinic.name, UNNAMED_CLINIC);
    }

    #[test]
    fn test_address_preference_order() {
        let clinic = element_to_clinic(&element(json!({
            "type": "node",
            "lat": 1.0,
            "lon": 2.0,
            "tags": {"name": "V", "addr:street": "Street", "addr:full": "Full"}
        })))
        .unwrap();
        assert_eq!(clinic.address, "Full");
    }

    #[tokio::test]
    async fn test_locate_parses_string_coordinates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "Brooklyn"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"lat": "40.6782", "lon": "-73.9442", "display_name": "Brooklyn"}
            ])))
            .mount(&server)
            .await;

        let dir = OsmClinicDirectory::new(&test_config(&server.uri())).unwrap();
        let point = dir.locate("Brooklyn").await.unwrap().unwrap();
        assert!((point.lat - 40.6782).abs() < 1e-9);
        assert!((point.lon - -73.9442).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_locate_miss_is_none_not_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let dir = OsmClinicDirectory::new(&test_config(&server.uri())).unwrap();
        assert!(dir.locate("Nowhereville").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_locate_surfaces_non_200_as_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let dir = OsmClinicDirectory::new(&test_config(&server.uri())).unwrap();
        match dir.locate("Brooklyn").await {
            Err(LookupError::Status(503)) => {}
            other => panic!("expected Status(503), got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_nearby_collects_usable_elements() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/interpreter"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "elements": [
                    {"type": "node", "lat": 1.0, "lon": 2.0, "tags": {"name": "A"}},
                    {"type": "node", "lat": 1.1, "lon": 2.1},
                    {"type": "way", "center": {"lat": 1.2, "lon": 2.2}, "tags": {"name": "B"}}
                ]
            })))
            .mount(&server)
            .await;

        let dir = OsmClinicDirectory::new(&test_config(&server.uri())).unwrap();
        let clinics = dir.nearby(GeoPoint { lat: 1.0, lon: 2.0 }).await.unwrap();
        let names: Vec<_> = clinics.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_nearby_empty_elements_is_empty_vec() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/interpreter"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"elements": []})))
            .mount(&server)
            .await;

        let dir = OsmClinicDirectory::new(&test_config(&server.uri())).unwrap();
        let clinics = dir.nearby(GeoPoint { lat: 1.0, lon: 2.0 }).await.unwrap();
        assert!(clinics.is_empty());
    }

    #[test]
    fn test_overpass_query_embeds_radius_and_center() {
        let dir = OsmClinicDirectory::new(&test_config("http://localhost:9")).unwrap();
        let query = dir.overpass_query(GeoPoint { lat: 37.5, lon: 127.0 });
        assert!(query.contains("around:3000,37.5,127"));
        assert!(query.contains("\"amenity\"=\"veterinary\""));
        assert!(query.contains("out center;"));
    }
}
