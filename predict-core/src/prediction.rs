use crate::model::{CurrentWeather, PredictionResult};

/// Humidity reported for every prediction. The forecast endpoint's current
/// weather block carries no humidity reading.
pub const PLACEHOLDER_HUMIDITY: f64 = 50.0;

/// Derive a prediction from the current conditions.
///
/// Temperature and wind speed are passed through unchanged.
#[must_use]
pub fn predict(weather: &CurrentWeather) -> PredictionResult {
    PredictionResult {
        temperature: weather.temperature,
        humidity: PLACEHOLDER_HUMIDITY,
        wind_speed: weather.wind_speed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather(temperature: f64, wind_speed: f64) -> CurrentWeather {
        CurrentWeather {
            temperature,
            wind_speed,
            observed_at: None,
        }
    }

    #[test]
    fn passes_temperature_and_wind_through() {
        let result = predict(&weather(18.5, 12.0));

        assert_eq!(result.temperature, 18.5);
        assert_eq!(result.wind_speed, 12.0);
        assert_eq!(result.humidity, 50.0);
    }

    #[test]
    fn humidity_ignores_input() {
        for (t, w) in [(-40.0, 0.0), (0.0, 0.0), (45.3, 130.7), (-0.1, 3.25)] {
            let result = predict(&weather(t, w));
            assert_eq!(result.humidity, PLACEHOLDER_HUMIDITY);
            assert_eq!(result.temperature.to_bits(), f64::to_bits(t));
            assert_eq!(result.wind_speed.to_bits(), f64::to_bits(w));
        }
    }
}
