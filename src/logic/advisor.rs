use super::calculations::{
    adjusted_water_liters, best_irrigation_time, classify_need_level, rainfall_credit_liters,
    water_volume_liters,
};
use super::crop_tables::water_profile;
use super::rules::{RuleContext, RulesEngine};
use crate::models::{
    FieldSpec, ForecastWindow, Recommendation, RecommendationEntry, VolumeUnit, WaterNeeded,
    WeatherObservation, SAMPLES_PER_DAY,
};

/// Irrigation advisor: weather + field in, recommendation out.
///
/// Holds only the immutable rule set, so one instance can serve any number
/// of concurrent callers.
pub struct Advisor {
    engine: RulesEngine,
}

impl Advisor {
    pub fn new() -> Self {
        Self {
            engine: RulesEngine::new(),
        }
    }

    pub fn recommend(
        &self,
        observation: &WeatherObservation,
        forecast: &ForecastWindow,
        field: &FieldSpec,
    ) -> Recommendation {
        let level = classify_need_level(observation);
        let hectares = field.area_in_hectares();

        let crop_water_need = water_profile(field.crop_type).rate(level);
        let total_water = water_volume_liters(crop_water_need, hectares);

        if forecast.is_empty() {
            tracing::debug!("No forecast samples, assuming no rain");
        }
        let expected_rainfall = forecast.expected_rainfall(SAMPLES_PER_DAY);
        let adjusted_water =
            adjusted_water_liters(total_water, rainfall_credit_liters(expected_rainfall, hectares));

        tracing::debug!(
            crop = %field.crop_type,
            level = %level,
            hectares,
            expected_rainfall,
            total_water,
            adjusted_water,
            "Computed water need"
        );

        let evaluation = self.engine.evaluate(&RuleContext {
            observation,
            field,
            expected_rainfall,
        });

        let advice = evaluation.advice.unwrap_or_else(|| {
            format!(
                "Standard irrigation of {:.0} liters recommended for your {} {} field.",
                adjusted_water, field.area, field.area_unit
            )
        });

        let mut recommendations = evaluation.entries;
        sort_by_priority(&mut recommendations);

        Recommendation {
            urgency: evaluation.urgency,
            advice,
            best_time: best_irrigation_time(observation.temperature_c).to_string(),
            water_needed: WaterNeeded {
                base: total_water,
                adjusted: adjusted_water,
                unit: VolumeUnit::Liters,
            },
            crop_water_need,
            water_need_level: level,
            expected_rainfall,
            recommendations,
        }
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute a recommendation with the standard rule set
pub fn compute_recommendation(
    observation: &WeatherObservation,
    forecast: &ForecastWindow,
    field: &FieldSpec,
) -> Recommendation {
    Advisor::new().recommend(observation, forecast, field)
}

/// Stable sort, high priority first; equal priorities keep evaluation order
pub fn sort_by_priority(entries: &mut [RecommendationEntry]) {
    entries.sort_by_key(|e| e.priority.rank());
}
