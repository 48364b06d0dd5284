use chrono::NaiveDateTime;

/// A city name resolved to coordinates by the geocoder.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// The name exactly as it was looked up.
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Point-in-time conditions reported by the forecast endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Kilometres per hour.
    pub wind_speed: f64,
    /// Local observation time, when the service reports one.
    pub observed_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
}
