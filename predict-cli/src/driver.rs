use predict_core::{Geocoder, WeatherSource, predict};
use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};
use tracing::{info, warn};

pub const LOCATION_ERROR: &str = "Could not retrieve location data. Please check the city name.";
pub const WEATHER_ERROR: &str = "Could not retrieve weather data. Please try again later.";

/// How a single prediction run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Predicted,
    /// The geocoder had no match. Reported, not a failure.
    LocationNotFound,
    LocationUnavailable,
    WeatherUnavailable,
}

impl Outcome {
    pub fn is_failure(self) -> bool {
        matches!(
            self,
            Outcome::LocationUnavailable | Outcome::WeatherUnavailable
        )
    }

    pub fn exit_code(self) -> ExitCode {
        if self.is_failure() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

/// Read one line, dropping only its terminator. `None` on end of input.
pub fn read_city(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

/// Geocode `city`, fetch its current weather and print the prediction to `out`.
///
/// Lookup failures are written to `out` as a fixed message; only I/O errors on
/// `out` itself are returned as errors. The three prediction lines are written
/// together or not at all.
pub async fn run(
    geocoder: &dyn Geocoder,
    weather: &dyn WeatherSource,
    city: &str,
    out: &mut impl Write,
) -> io::Result<Outcome> {
    let location = match geocoder.resolve(city).await {
        Ok(location) => location,
        Err(e) => {
            let outcome = if e.is_not_found() {
                info!("{e}");
                Outcome::LocationNotFound
            } else {
                warn!("Location lookup for '{city}' failed: {e}");
                Outcome::LocationUnavailable
            };
            writeln!(out, "{LOCATION_ERROR}")?;
            return Ok(outcome);
        }
    };

    writeln!(
        out,
        "Location Coordinates: {}, {}",
        decimal(location.latitude),
        decimal(location.longitude)
    )?;

    let current = match weather.fetch(location.latitude, location.longitude).await {
        Ok(current) => current,
        Err(e) => {
            warn!("Weather lookup for '{}' failed: {e}", location.name);
            writeln!(out, "{WEATHER_ERROR}")?;
            return Ok(Outcome::WeatherUnavailable);
        }
    };

    let prediction = predict(&current);
    writeln!(out, "Predicted Temperature: {}°C", decimal(prediction.temperature))?;
    writeln!(out, "Predicted Humidity: {}%", decimal(prediction.humidity))?;
    writeln!(out, "Predicted Wind Speed: {} km/h", decimal(prediction.wind_speed))?;

    Ok(Outcome::Predicted)
}

/// Shortest round-trip form, always with a fractional part (`12.0`, not `12`).
/// Magnitudes outside the plain-decimal range use Rust's exponent form (`1e-5`).
fn decimal(value: f64) -> String {
    format!("{value:?}")
}
