use crate::models::{NeedLevel, WeatherObservation};

/// Liters delivered per hectare by 1mm of water depth
pub const LITERS_PER_MM_HECTARE: f64 = 10_000.0;

/// Classify irrigation need from current conditions.
/// The high condition is checked first, so 36°C at 80% humidity is `High`.
pub fn classify_need_level(observation: &WeatherObservation) -> NeedLevel {
    let temp = observation.temperature_c;
    let humidity = observation.humidity;

    if temp > 35.0 || humidity < 30 {
        NeedLevel::High
    } else if temp < 20.0 || humidity > 70 {
        NeedLevel::Low
    } else {
        NeedLevel::Medium
    }
}

/// Daily water volume (liters) for a crop rate in mm/day over an area
pub fn water_volume_liters(rate_mm_per_day: f64, area_hectares: f64) -> f64 {
    rate_mm_per_day * LITERS_PER_MM_HECTARE * area_hectares
}

/// Volume (liters) that forecast rain will deliver to the field
pub fn rainfall_credit_liters(rainfall_mm: f64, area_hectares: f64) -> f64 {
    rainfall_mm * area_hectares * LITERS_PER_MM_HECTARE
}

/// Water still needed after rain, never negative
pub fn adjusted_water_liters(total_liters: f64, rain_credit_liters: f64) -> f64 {
    (total_liters - rain_credit_liters).max(0.0)
}

pub fn best_irrigation_time(temperature_c: f64) -> &'static str {
    if temperature_c > 30.0 {
        "Early morning (5-7 AM) or evening (6-8 PM)"
    } else {
        "Morning (6-9 AM)"
    }
}
