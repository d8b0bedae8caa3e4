use super::{
    crop_care::CropCareRule, humidity::HumidityRule, rainfall::RainfallRule,
    temperature::TemperatureRule, wind::WindRule, Rule, RuleContext,
};
use crate::models::{RecommendationEntry, Urgency};

/// Combined result of running every rule once, in registration order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleEvaluation {
    /// Entries in evaluation order (unsorted)
    pub entries: Vec<RecommendationEntry>,
    /// Last advice override, if any rule set one
    pub advice: Option<String>,
    pub urgency: Urgency,
}

pub struct RulesEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RulesEngine {
    pub fn new() -> Self {
        // Order matters: later urgency/advice overrides win
        let rules: Vec<Box<dyn Rule>> = vec![
            Box::new(TemperatureRule),
            Box::new(RainfallRule),
            Box::new(HumidityRule),
            Box::new(WindRule),
            Box::new(CropCareRule),
        ];

        Self { rules }
    }

    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> RuleEvaluation {
        let mut result = RuleEvaluation::default();

        for rule in &self.rules {
            let Some(outcome) = rule.evaluate(ctx) else {
                continue;
            };

            tracing::debug!(
                rule = rule.id(),
                priority = %outcome.entry.priority,
                "Rule matched"
            );

            if let Some(urgency) = outcome.urgency {
                result.urgency = urgency;
            }
            if outcome.advice.is_some() {
                result.advice = outcome.advice;
            }
            result.entries.push(outcome.entry);
        }

        result
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{ctx, field, observation};
    use crate::models::{CropType, EntryType};

    #[test]
    fn rules_run_in_fixed_order() {
        let ids: Vec<_> = RulesEngine::new()
            .list_rules()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, ["temperature", "rainfall", "humidity", "wind", "crop_care"]);
    }

    #[test]
    fn entries_are_additive() {
        // Hot, dry, windy, no rain: every category fires
        let obs = observation(38.0, 20, 14.0);
        let f = field(CropType::Corn);
        let eval = RulesEngine::new().evaluate(&ctx(&obs, &f, 0.0));

        let types: Vec<_> = eval.entries.iter().map(|e| e.entry_type).collect();
        assert_eq!(
            types,
            [
                EntryType::Temperature,
                EntryType::Drought,
                EntryType::Humidity,
                EntryType::Wind,
                EntryType::Crop,
            ]
        );
        assert_eq!(eval.urgency, Urgency::High);
        assert!(eval.advice.unwrap().starts_with("Full irrigation"));
    }

    #[test]
    fn heavy_rain_overrides_heat_urgency() {
        let obs = observation(37.0, 50, 2.0);
        let f = field(CropType::Wheat);
        let eval = RulesEngine::new().evaluate(&ctx(&obs, &f, 15.0));
        assert_eq!(eval.urgency, Urgency::Low);
    }

    #[test]
    fn quiet_conditions_keep_default_urgency() {
        let obs = observation(25.0, 50, 2.0);
        let f = field(CropType::Other);
        let eval = RulesEngine::new().evaluate(&ctx(&obs, &f, 1.0));
        assert!(eval.entries.is_empty());
        assert!(eval.advice.is_none());
        assert_eq!(eval.urgency, Urgency::Medium);
    }
}
