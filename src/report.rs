use crate::logic::crop_tables::water_profile;
use crate::models::{
    CropType, DailyForecast, FieldSpec, ForecastSample, ForecastWindow, Recommendation,
    UsageStats, WeatherObservation, SAMPLES_PER_DAY,
};
use serde::Serialize;
use std::fmt::Write;

/// Full advisory response: inputs echoed back alongside the recommendation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub current_conditions: WeatherObservation,
    pub forecast: ForecastOverview,
    pub field: FieldSpec,
    pub irrigation: Recommendation,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastOverview {
    pub expected_rainfall: f64,
    pub next24_hours: Vec<ForecastSample>,
}

impl IrrigationReport {
    pub fn new(
        observation: &WeatherObservation,
        forecast: &ForecastWindow,
        field: &FieldSpec,
        recommendation: Recommendation,
    ) -> Self {
        Self {
            location: observation
                .location
                .clone()
                .or_else(|| forecast.location.clone()),
            current_conditions: observation.clone(),
            forecast: ForecastOverview {
                expected_rainfall: recommendation.expected_rainfall,
                next24_hours: forecast.next_samples(SAMPLES_PER_DAY).to_vec(),
            },
            field: field.clone(),
            irrigation: recommendation,
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let rec = &self.irrigation;
        let obs = &self.current_conditions;

        if let Some(ref location) = self.location {
            let _ = writeln!(out, "Location: {}", location);
        }
        let _ = writeln!(
            out,
            "Now: {} {:.1}°C, {}% humidity, wind {:.1} m/s",
            obs.condition.symbol(),
            obs.temperature_c,
            obs.humidity,
            obs.wind_speed_ms
        );
        let _ = writeln!(
            out,
            "Field: {} {} of {}",
            self.field.area, self.field.area_unit, self.field.crop_type
        );
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "[{}] Urgency: {}",
            rec.urgency.symbol(),
            rec.urgency.as_str().to_uppercase()
        );
        let _ = writeln!(out, "{}", rec.advice);
        let _ = writeln!(out, "Best time: {}", rec.best_time);
        let _ = writeln!(
            out,
            "Water: {:.0} L adjusted ({:.0} L base, {} mm/day at {} need, {:.1} mm rain expected)",
            rec.water_needed.adjusted,
            rec.water_needed.base,
            rec.crop_water_need,
            rec.water_need_level,
            rec.expected_rainfall
        );

        if !rec.recommendations.is_empty() {
            let _ = writeln!(out);
            for entry in &rec.recommendations {
                let _ = writeln!(
                    out,
                    "{} [{}] {}: {}",
                    entry.entry_type.symbol(),
                    entry.priority,
                    entry.title,
                    entry.message
                );
            }
        }

        out
    }
}

pub fn render_daily_forecast(days: &[DailyForecast]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:>7} {:>7} {:>7} {:>5} {:>8}  Condition",
        "Date", "Avg°C", "Min°C", "Max°C", "RH%", "Rain mm"
    );
    for day in days {
        let _ = writeln!(
            out,
            "{:<12} {:>7.1} {:>7.1} {:>7.1} {:>5} {:>8.1}  {} {}",
            day.date.to_string(),
            day.avg_temp_c,
            day.min_temp_c,
            day.max_temp_c,
            day.avg_humidity,
            day.total_rain_mm,
            day.main_condition.symbol(),
            day.main_condition
        );
    }
    out
}

pub fn render_usage(stats: &UsageStats, period_days: u32) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Last {} days: {:.0} L over {} records ({:.0} L avg)",
        period_days, stats.summary.total_water, stats.summary.count, stats.summary.avg_per_record
    );

    if !stats.by_field.is_empty() {
        let _ = writeln!(out, "\nBy field:");
        for f in &stats.by_field {
            let name = if f.field_name.is_empty() {
                &f.field_id
            } else {
                &f.field_name
            };
            let _ = writeln!(
                out,
                "  {:<20} {:<11} {:>12.0} L  ({} records)",
                name,
                f.crop_type.as_str(),
                f.total_water,
                f.count
            );
        }
    }

    if !stats.by_method.is_empty() {
        let _ = writeln!(out, "\nBy method:");
        for m in &stats.by_method {
            let _ = writeln!(
                out,
                "  {:<20} {:>12.0} L  ({} records)",
                m.method.as_str(),
                m.total_water,
                m.count
            );
        }
    }

    if !stats.daily.is_empty() {
        let _ = writeln!(out, "\nDaily:");
        for d in &stats.daily {
            let _ = writeln!(out, "  {}  {:>12.0} L", d.date, d.total_water);
        }
    }

    out
}

#[derive(Debug, Clone, Serialize)]
pub struct CropProfileRow {
    pub crop: CropType,
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

pub fn crop_profile_rows() -> Vec<CropProfileRow> {
    CropType::all()
        .iter()
        .map(|crop| {
            let p = water_profile(*crop);
            CropProfileRow {
                crop: *crop,
                low: p.low,
                medium: p.medium,
                high: p.high,
            }
        })
        .collect()
}

pub fn render_crop_profiles(rows: &[CropProfileRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Crop water need (mm/day)");
    let _ = writeln!(out, "{:<12} {:>5} {:>7} {:>5}", "Crop", "Low", "Medium", "High");
    for row in rows {
        let _ = writeln!(
            out,
            "{:<12} {:>5} {:>7} {:>5}",
            row.crop.as_str(),
            row.low,
            row.medium,
            row.high
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::compute_recommendation;
    use crate::models::{AreaUnit, WeatherCondition};
    use chrono::{TimeZone, Utc};

    fn window() -> ForecastWindow {
        let base = Utc.with_ymd_and_hms(2024, 8, 1, 0, 0, 0).unwrap();
        let mut window = ForecastWindow::new(
            (0..10)
                .map(|i| ForecastSample::new(base + chrono::Duration::hours(i * 3), 30.0, 2.0))
                .collect(),
        );
        window.location = Some("Nashik".into());
        window
    }

    #[test]
    fn report_trims_forecast_to_one_day() {
        let obs = WeatherObservation::new(33.0, 45, 3.0).with_condition(WeatherCondition::Clear);
        let field = FieldSpec::new(CropType::Vegetables, 2.0, AreaUnit::Hectares);
        let forecast = window();
        let rec = compute_recommendation(&obs, &forecast, &field);
        let report = IrrigationReport::new(&obs, &forecast, &field, rec);

        assert_eq!(report.location.as_deref(), Some("Nashik"));
        assert_eq!(report.forecast.next24_hours.len(), 8);
        assert!((report.forecast.expected_rainfall - 16.0).abs() < 1e-9);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["irrigation"]["urgency"], "low");
        assert!(json["forecast"]["next24Hours"].is_array());
        assert_eq!(json["field"]["cropType"], "vegetables");
    }

    #[test]
    fn text_report_lists_entries() {
        let obs = WeatherObservation::new(37.0, 25, 12.0).with_location("Jaipur");
        let field = FieldSpec::new(CropType::Wheat, 5.0, AreaUnit::Acres);
        let forecast = ForecastWindow::default();
        let rec = compute_recommendation(&obs, &forecast, &field);
        let text = IrrigationReport::new(&obs, &forecast, &field, rec).render_text();

        assert!(text.contains("Location: Jaipur"));
        assert!(text.contains("Urgency: HIGH"));
        assert!(text.contains("High Temperature Alert"));
        assert!(text.contains("Windy Conditions"));
        assert!(text.contains("Wheat Care"));
    }

    #[test]
    fn crop_table_has_every_crop() {
        let rows = crop_profile_rows();
        assert_eq!(rows.len(), CropType::all().len());
        let text = render_crop_profiles(&rows);
        assert!(text.contains("Sugarcane"));
    }

    #[test]
    fn daily_forecast_table() {
        let text = render_daily_forecast(&window().daily_summary());
        assert!(text.contains("2024-08-01"));
        assert!(text.contains("2024-08-02"));
    }
}
