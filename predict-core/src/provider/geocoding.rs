use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{error::LookupError, model::Location};

use super::{Geocoder, get_json};

#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    http: Client,
    url: String,
}

impl OpenMeteoGeocoder {
    pub fn new(http: Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    // Open-Meteo omits the key entirely when nothing matches.
    #[serde(default)]
    results: Option<Vec<GeocodingHit>>,
}

// A hit without coordinates is no usable result, not a malformed response.
#[derive(Debug, Deserialize)]
struct GeocodingHit {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Take the first hit of a geocoding response body.
pub fn parse_location(city_name: &str, body: &str) -> Result<Location, LookupError> {
    let parsed: GeocodingResponse = serde_json::from_str(body)?;
    first_hit(city_name, parsed)
}

fn first_hit(city_name: &str, response: GeocodingResponse) -> Result<Location, LookupError> {
    let (latitude, longitude) = response
        .results
        .and_then(|results| results.into_iter().next())
        .and_then(|hit| Some((hit.latitude?, hit.longitude?)))
        .ok_or_else(|| LookupError::not_found(city_name))?;

    Ok(Location {
        name: city_name.to_string(),
        latitude,
        longitude,
    })
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    async fn resolve(&self, city_name: &str) -> Result<Location, LookupError> {
        debug!("Geocoding location name: {city_name}");

        let response: GeocodingResponse =
            get_json(&self.http, &self.url, &[("name", city_name)]).await?;
        let location = first_hit(city_name, response)?;

        debug!(
            "Found location: {} ({:.4}, {:.4})",
            location.name, location.latitude, location.longitude
        );
        Ok(location)
    }
}
