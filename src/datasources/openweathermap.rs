//! Normalization of OpenWeatherMap payloads (metric units) into advisor inputs.
//!
//! Handles the `/data/2.5/weather` and `/data/2.5/forecast` response bodies.
//! Fetching them is left to the caller.

use crate::error::{AquaFarmError, Result};
use crate::models::{
    clamp_humidity, ForecastSample, ForecastWindow, WeatherCondition, WeatherObservation,
};
use chrono::DateTime;
use serde::Deserialize;

// OpenWeatherMap API response structures
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    #[serde(default)]
    name: Option<String>,
    main: OwmCurrentMain,
    #[serde(default)]
    weather: Vec<OwmWeather>,
    #[serde(default)]
    wind: OwmWind,
}

#[derive(Debug, Deserialize)]
struct OwmForecastResponse {
    list: Vec<OwmForecastItem>,
    #[serde(default)]
    city: Option<OwmCity>,
}

#[derive(Debug, Deserialize)]
struct OwmForecastItem {
    dt: i64,
    main: OwmMain,
    #[serde(default)]
    weather: Vec<OwmWeather>,
    #[serde(default)]
    wind: OwmWind,
    #[serde(default)]
    rain: Option<OwmPrecipitation>,
}

/// Current conditions drive the need level, so humidity must be present
#[derive(Debug, Deserialize)]
struct OwmCurrentMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    #[serde(default)]
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    #[serde(default)]
    id: Option<u32>,
    #[serde(default)]
    main: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OwmWind {
    #[serde(default)]
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwmPrecipitation {
    #[serde(rename = "3h", default)]
    three_hour: f64,
}

#[derive(Debug, Deserialize)]
struct OwmCity {
    name: String,
}

/// Error body returned by the API, e.g. `{"cod":"404","message":"city not found"}`
#[derive(Debug, Deserialize)]
struct OwmError {
    cod: serde_json::Value,
    message: String,
}

impl OwmWeather {
    fn condition(&self) -> WeatherCondition {
        match (self.id, self.main.as_deref()) {
            (Some(id), _) => WeatherCondition::from_owm_id(id),
            (None, Some(group)) => WeatherCondition::from_group(group),
            (None, None) => WeatherCondition::Other,
        }
    }
}

/// Fail with the API's own message if the payload is an error body
fn check_error_body(json: &str) -> Result<()> {
    if let Ok(err) = serde_json::from_str::<OwmError>(json) {
        let code = match &err.cod {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        if code != "200" {
            return Err(if code == "404" {
                AquaFarmError::NotFound(format!("OpenWeatherMap: {}", err.message))
            } else {
                AquaFarmError::InvalidData(format!(
                    "OpenWeatherMap returned {}: {}",
                    code, err.message
                ))
            });
        }
    }
    Ok(())
}

/// Parse a current-weather response body
pub fn parse_current(json: &str) -> Result<WeatherObservation> {
    check_error_body(json)?;
    let response: OwmCurrentResponse = serde_json::from_str(json)?;

    let first = response.weather.first();
    let condition = first.map(OwmWeather::condition).unwrap_or_default();

    Ok(WeatherObservation {
        temperature_c: response.main.temp,
        humidity: clamp_humidity(response.main.humidity),
        wind_speed_ms: response.wind.speed,
        condition,
        location: response.name.filter(|n| !n.is_empty()),
        description: first.and_then(|w| w.description.clone()),
    })
}

/// Parse a 5-day/3-hour forecast response body
pub fn parse_forecast(json: &str) -> Result<ForecastWindow> {
    check_error_body(json)?;
    let response: OwmForecastResponse = serde_json::from_str(json)?;

    let samples = response
        .list
        .iter()
        .filter_map(|item| {
            let Some(timestamp) = DateTime::from_timestamp(item.dt, 0) else {
                tracing::warn!(dt = item.dt, "Skipping forecast item with invalid timestamp");
                return None;
            };
            Some(ForecastSample {
                timestamp,
                temperature_c: item.main.temp,
                rain_mm: item.rain.as_ref().map(|r| r.three_hour).unwrap_or(0.0),
                condition: item
                    .weather
                    .first()
                    .map(OwmWeather::condition)
                    .unwrap_or_default(),
                humidity: clamp_humidity(item.main.humidity),
                wind_speed_ms: item.wind.speed,
            })
        })
        .collect();

    Ok(ForecastWindow {
        location: response.city.map(|c| c.name),
        samples,
    })
}
