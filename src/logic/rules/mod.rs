pub mod crop_care;
pub mod engine;
pub mod humidity;
pub mod rainfall;
pub mod temperature;
pub mod wind;

pub use engine::{RuleEvaluation, RulesEngine};

use crate::models::{FieldSpec, RecommendationEntry, Urgency, WeatherObservation};

/// Inputs shared by every rule for one advisor call
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub observation: &'a WeatherObservation,
    pub field: &'a FieldSpec,
    /// mm expected over the next 24 hours
    pub expected_rainfall: f64,
}

/// What a matching rule contributes: an entry, and optionally an override
/// of the overall advice or urgency
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub entry: RecommendationEntry,
    pub advice: Option<String>,
    pub urgency: Option<Urgency>,
}

impl RuleOutcome {
    pub fn new(entry: RecommendationEntry) -> Self {
        Self {
            entry,
            advice: None,
            urgency: None,
        }
    }

    pub fn with_advice(mut self, advice: impl Into<String>) -> Self {
        self.advice = Some(advice.into());
        self
    }

    pub fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = Some(urgency);
        self
    }
}

/// Trait for irrigation rules
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return an outcome if its condition is met
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::RuleContext;
    use crate::models::{AreaUnit, CropType, FieldSpec, WeatherObservation};

    pub fn observation(temp: f64, humidity: u8, wind: f64) -> WeatherObservation {
        WeatherObservation::new(temp, humidity, wind)
    }

    pub fn field(crop: CropType) -> FieldSpec {
        FieldSpec::new(crop, 1.0, AreaUnit::Hectares)
    }

    pub fn ctx<'a>(
        observation: &'a WeatherObservation,
        field: &'a FieldSpec,
        rain: f64,
    ) -> RuleContext<'a> {
        RuleContext {
            observation,
            field,
            expected_rainfall: rain,
        }
    }
}
