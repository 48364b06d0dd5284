use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{error::LookupError, model::CurrentWeather};

use super::{WeatherSource, get_json};

/// Layout of `current_weather.time`, in the location's local time.
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone)]
pub struct OpenMeteoForecast {
    http: Client,
    url: String,
}

impl OpenMeteoForecast {
    pub fn new(http: Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
struct ForecastResponse {
    current_weather: CurrentWeatherBlock,
}

#[derive(Debug, Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
struct CurrentWeatherBlock {
    temperature: f64,
    windspeed: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time: Option<String>,
}

impl From<CurrentWeatherBlock> for CurrentWeather {
    fn from(block: CurrentWeatherBlock) -> Self {
        let observed_at = block.time.as_deref().and_then(|raw| {
            NaiveDateTime::parse_from_str(raw, TIME_FORMAT)
                .inspect_err(|e| warn!("Ignoring unparseable observation time '{raw}': {e}"))
                .ok()
        });

        Self {
            temperature: block.temperature,
            wind_speed: block.windspeed,
            observed_at,
        }
    }
}

/// Extract the current conditions from a forecast response body.
pub fn parse_current_weather(body: &str) -> Result<CurrentWeather, LookupError> {
    let parsed: ForecastResponse = serde_json::from_str(body)?;
    Ok(parsed.current_weather.into())
}

#[async_trait]
impl WeatherSource for OpenMeteoForecast {
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<CurrentWeather, LookupError> {
        debug!("Fetching current weather for ({latitude}, {longitude})");

        let query = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current_weather", "true".to_string()),
        ];
        let response: ForecastResponse = get_json(&self.http, &self.url, &query).await?;
        let weather = CurrentWeather::from(response.current_weather);

        debug!(
            "Current weather: {}°C, {} km/h, observed at {:?}",
            weather.temperature, weather.wind_speed, weather.observed_at
        );
        Ok(weather)
    }
}
