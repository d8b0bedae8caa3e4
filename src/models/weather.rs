use serde::{Deserialize, Deserializer, Serialize};

/// Weather condition categories, collapsed from OpenWeatherMap condition ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    #[default]
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Other,
}

impl WeatherCondition {
    pub fn from_owm_id(id: u32) -> Self {
        match id {
            200..=232 => WeatherCondition::Thunderstorm,
            300..=321 => WeatherCondition::Drizzle,
            500..=531 => WeatherCondition::Rain,
            600..=622 => WeatherCondition::Snow,
            800 => WeatherCondition::Clear,
            801..=804 => WeatherCondition::Clouds,
            _ => WeatherCondition::Other,
        }
    }

    /// Parse the provider's `main` group name ("Rain", "Clouds", ...)
    pub fn from_group(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "clear" => WeatherCondition::Clear,
            "clouds" | "cloudy" => WeatherCondition::Clouds,
            "rain" => WeatherCondition::Rain,
            "drizzle" => WeatherCondition::Drizzle,
            "thunderstorm" => WeatherCondition::Thunderstorm,
            "snow" => WeatherCondition::Snow,
            _ => WeatherCondition::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::Clouds => "Cloudy",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Drizzle => "Drizzle",
            WeatherCondition::Thunderstorm => "Thunderstorm",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Other => "Other",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "☀",
            WeatherCondition::Clouds => "☁",
            WeatherCondition::Rain => "🌧",
            WeatherCondition::Drizzle => "🌦",
            WeatherCondition::Thunderstorm => "⛈",
            WeatherCondition::Snow => "❄",
            WeatherCondition::Other => "?",
        }
    }

}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current conditions at the field, in metric units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherObservation {
    pub temperature_c: f64,
    /// Relative humidity, 0-100
    #[serde(deserialize_with = "deserialize_humidity")]
    pub humidity: u8,
    pub wind_speed_ms: f64,
    pub condition: WeatherCondition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Round a relative humidity reading into 0..=100. Non-finite readings become 0.
pub fn clamp_humidity(value: f64) -> u8 {
    if value.is_finite() {
        value.round().clamp(0.0, 100.0) as u8
    } else {
        0
    }
}

fn deserialize_humidity<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(clamp_humidity)
}

impl WeatherObservation {
    pub fn new(temperature_c: f64, humidity: u8, wind_speed_ms: f64) -> Self {
        Self {
            temperature_c,
            humidity: humidity.min(100),
            wind_speed_ms,
            condition: WeatherCondition::default(),
            location: None,
            description: None,
        }
    }

    pub fn with_condition(mut self, condition: WeatherCondition) -> Self {
        self.condition = condition;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_condition_from_owm_id() {
        assert_eq!(
            WeatherCondition::from_owm_id(211),
            WeatherCondition::Thunderstorm
        );
        assert_eq!(WeatherCondition::from_owm_id(301), WeatherCondition::Drizzle);
        assert_eq!(WeatherCondition::from_owm_id(502), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_owm_id(800), WeatherCondition::Clear);
        assert_eq!(WeatherCondition::from_owm_id(803), WeatherCondition::Clouds);
        assert_eq!(WeatherCondition::from_owm_id(601), WeatherCondition::Snow);
        // Atmosphere group (mist, haze, dust) has no dedicated category
        assert_eq!(WeatherCondition::from_owm_id(701), WeatherCondition::Other);
    }

    #[test]
    fn weather_condition_from_group() {
        assert_eq!(WeatherCondition::from_group("Rain"), WeatherCondition::Rain);
        assert_eq!(
            WeatherCondition::from_group("clouds"),
            WeatherCondition::Clouds
        );
        assert_eq!(WeatherCondition::from_group("Haze"), WeatherCondition::Other);
    }

    #[test]
    fn observation_clamps_humidity() {
        let obs = WeatherObservation::new(25.0, 140, 2.0);
        assert_eq!(obs.humidity, 100);
    }

    #[test]
    fn deserialized_observation_clamps_humidity() {
        let obs: WeatherObservation = serde_json::from_str(
            r#"{"temperatureC":25.0,"humidity":150,"windSpeedMs":2.0,"condition":"clear"}"#,
        )
        .unwrap();
        assert_eq!(obs.humidity, 100);

        let obs: WeatherObservation = serde_json::from_str(
            r#"{"temperatureC":25.0,"humidity":-3.4,"windSpeedMs":2.0,"condition":"rain"}"#,
        )
        .unwrap();
        assert_eq!(obs.humidity, 0);
    }
}
