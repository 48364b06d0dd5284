use async_trait::async_trait;
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;

use crate::{
    Config,
    error::LookupError,
    model::{CurrentWeather, Location},
};

pub mod forecast;
pub mod geocoding;

pub use forecast::OpenMeteoForecast;
pub use geocoding::OpenMeteoGeocoder;

/// Turns a free-text place name into coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn resolve(&self, city_name: &str) -> Result<Location, LookupError>;
}

/// Reports the current conditions at a coordinate.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<CurrentWeather, LookupError>;
}

/// Build the HTTP client shared by both lookups.
pub fn http_client(config: &Config) -> Result<Client, LookupError> {
    let mut builder = Client::builder();
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Construct both Open-Meteo clients from config.
pub fn open_meteo_from_config(
    config: &Config,
) -> Result<(OpenMeteoGeocoder, OpenMeteoForecast), LookupError> {
    let http = http_client(config)?;
    Ok((
        OpenMeteoGeocoder::new(http.clone(), config.geocoding_url.clone()),
        OpenMeteoForecast::new(http, config.forecast_url.clone()),
    ))
}

/// GET `url` with `query`, reading the whole body before decoding it.
pub(crate) async fn get_json<T, Q>(http: &Client, url: &str, query: &Q) -> Result<T, LookupError>
where
    T: DeserializeOwned,
    Q: Serialize + ?Sized,
{
    let res = http.get(url).query(query).send().await?;

    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        return Err(LookupError::Status {
            status: status.as_u16(),
            body: truncate_body(&body),
        });
    }

    Ok(serde_json::from_str(&body)?)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "°".repeat(250);
        let truncated = truncate_body(&body);

        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 203);
    }

    #[test]
    fn http_client_builds_with_and_without_timeout() {
        let mut cfg = Config::default();
        assert!(http_client(&cfg).is_ok());

        cfg.set_timeout_secs(2);
        assert!(http_client(&cfg).is_ok());
    }
}
