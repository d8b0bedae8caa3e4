use super::weather::WeatherCondition;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of 3-hour samples covering the next 24 hours
pub const SAMPLES_PER_DAY: usize = 8;

/// One provider forecast snapshot (5-day/3-hour)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastWindow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub samples: Vec<ForecastSample>,
}

impl ForecastWindow {
    pub fn new(samples: Vec<ForecastSample>) -> Self {
        Self {
            location: None,
            samples,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The first `count` samples, or fewer if the window is shorter
    pub fn next_samples(&self, count: usize) -> &[ForecastSample] {
        &self.samples[..count.min(self.samples.len())]
    }

    /// Total rainfall (mm) over the first `count` samples
    pub fn expected_rainfall(&self, count: usize) -> f64 {
        self.next_samples(count)
            .iter()
            .map(|s| s.rain_mm)
            .filter(|mm| mm.is_finite() && *mm > 0.0)
            .sum()
    }

    /// Samples grouped into per-day summaries, ordered by date
    pub fn daily_summary(&self) -> Vec<DailyForecast> {
        let mut by_date: BTreeMap<NaiveDate, Vec<&ForecastSample>> = BTreeMap::new();
        for sample in &self.samples {
            by_date
                .entry(sample.timestamp.date_naive())
                .or_default()
                .push(sample);
        }

        by_date
            .into_iter()
            .map(|(date, samples)| DailyForecast::aggregate(date, &samples))
            .collect()
    }
}

/// A single 3-hour forecast sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSample {
    pub timestamp: DateTime<Utc>,
    pub temperature_c: f64,
    /// Rain accumulated over the 3h bucket
    #[serde(default)]
    pub rain_mm: f64,
    #[serde(default)]
    pub condition: WeatherCondition,
    #[serde(default)]
    pub humidity: u8,
    #[serde(default)]
    pub wind_speed_ms: f64,
}

impl ForecastSample {
    pub fn new(timestamp: DateTime<Utc>, temperature_c: f64, rain_mm: f64) -> Self {
        Self {
            timestamp,
            temperature_c,
            rain_mm,
            condition: if rain_mm > 0.0 {
                WeatherCondition::Rain
            } else {
                WeatherCondition::Clear
            },
            humidity: 0,
            wind_speed_ms: 0.0,
        }
    }
}

/// Aggregated daily forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub avg_temp_c: f64,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    pub avg_humidity: u8,
    pub total_rain_mm: f64,
    pub main_condition: WeatherCondition,
}

impl DailyForecast {
    pub fn aggregate(date: NaiveDate, samples: &[&ForecastSample]) -> Self {
        let count = samples.len().max(1) as f64;

        let avg_temp_c = samples.iter().map(|s| s.temperature_c).sum::<f64>() / count;
        let min_temp_c = samples
            .iter()
            .map(|s| s.temperature_c)
            .fold(f64::INFINITY, f64::min);
        let max_temp_c = samples
            .iter()
            .map(|s| s.temperature_c)
            .fold(f64::NEG_INFINITY, f64::max);

        let avg_humidity =
            (samples.iter().map(|s| s.humidity as f64).sum::<f64>() / count).round() as u8;

        let total_rain_mm: f64 = samples.iter().map(|s| s.rain_mm.max(0.0)).sum();

        DailyForecast {
            date,
            avg_temp_c,
            min_temp_c: if min_temp_c.is_finite() { min_temp_c } else { 0.0 },
            max_temp_c: if max_temp_c.is_finite() { max_temp_c } else { 0.0 },
            avg_humidity,
            total_rain_mm,
            main_condition: main_condition(samples),
        }
    }
}

/// Most frequent condition; ties go to the one seen latest
fn main_condition(samples: &[&ForecastSample]) -> WeatherCondition {
    // (condition, count, index of last occurrence)
    let mut tally: Vec<(WeatherCondition, usize, usize)> = Vec::new();
    for (i, sample) in samples.iter().enumerate() {
        match tally.iter_mut().find(|(c, _, _)| *c == sample.condition) {
            Some(entry) => {
                entry.1 += 1;
                entry.2 = i;
            }
            None => tally.push((sample.condition, 1, i)),
        }
    }

    tally
        .into_iter()
        .max_by_key(|(_, count, last)| (*count, *last))
        .map(|(condition, _, _)| condition)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_at(hour_offset: i64, temp: f64, rain: f64, condition: WeatherCondition) -> ForecastSample {
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        ForecastSample {
            timestamp: base + chrono::Duration::hours(hour_offset),
            temperature_c: temp,
            rain_mm: rain,
            condition,
            humidity: 60,
            wind_speed_ms: 3.0,
        }
    }

    #[test]
    fn expected_rainfall_uses_first_eight_samples() {
        let samples = (0..12)
            .map(|i| sample_at(i * 3, 20.0, 1.0, WeatherCondition::Rain))
            .collect();
        let window = ForecastWindow::new(samples);
        assert!((window.expected_rainfall(SAMPLES_PER_DAY) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn expected_rainfall_short_or_empty_window() {
        let window = ForecastWindow::default();
        assert_eq!(window.expected_rainfall(SAMPLES_PER_DAY), 0.0);

        let window = ForecastWindow::new(vec![
            sample_at(0, 20.0, 2.5, WeatherCondition::Rain),
            sample_at(3, 20.0, 0.0, WeatherCondition::Clear),
        ]);
        assert!((window.expected_rainfall(SAMPLES_PER_DAY) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn expected_rainfall_ignores_negative_and_nan() {
        let window = ForecastWindow::new(vec![
            sample_at(0, 20.0, -4.0, WeatherCondition::Clear),
            sample_at(3, 20.0, f64::NAN, WeatherCondition::Clear),
            sample_at(6, 20.0, 1.5, WeatherCondition::Rain),
        ]);
        assert!((window.expected_rainfall(SAMPLES_PER_DAY) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn daily_summary_groups_by_date() {
        let window = ForecastWindow::new(vec![
            sample_at(0, 18.0, 0.0, WeatherCondition::Clear),
            sample_at(12, 26.0, 1.0, WeatherCondition::Rain),
            sample_at(21, 22.0, 2.0, WeatherCondition::Rain),
            sample_at(24, 15.0, 0.0, WeatherCondition::Clouds),
        ]);

        let days = window.daily_summary();
        assert_eq!(days.len(), 2);

        let first = &days[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert!((first.avg_temp_c - 22.0).abs() < 1e-9);
        assert_eq!(first.min_temp_c, 18.0);
        assert_eq!(first.max_temp_c, 26.0);
        assert_eq!(first.avg_humidity, 60);
        assert!((first.total_rain_mm - 3.0).abs() < 1e-9);
        assert_eq!(first.main_condition, WeatherCondition::Rain);

        assert_eq!(days[1].main_condition, WeatherCondition::Clouds);
    }

    #[test]
    fn main_condition_tie_goes_to_latest() {
        let window = ForecastWindow::new(vec![
            sample_at(0, 20.0, 1.0, WeatherCondition::Rain),
            sample_at(3, 20.0, 0.0, WeatherCondition::Clear),
            sample_at(6, 20.0, 1.0, WeatherCondition::Rain),
            sample_at(9, 20.0, 0.0, WeatherCondition::Clear),
        ]);
        let days = window.daily_summary();
        assert_eq!(days[0].main_condition, WeatherCondition::Clear);
    }
}
