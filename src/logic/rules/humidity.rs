use super::{Rule, RuleContext, RuleOutcome};
use crate::models::{EntryType, Priority, RecommendationEntry};

/// Humidity rule - dry air raises evapotranspiration, humid air lowers it
pub struct HumidityRule;

impl Rule for HumidityRule {
    fn id(&self) -> &'static str {
        "humidity"
    }

    fn name(&self) -> &'static str {
        "Humidity"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let humidity = ctx.observation.humidity;

        let entry = if humidity < 30 {
            RecommendationEntry::new(
                EntryType::Humidity,
                Priority::High,
                "Low Humidity",
                "Very dry air increases evapotranspiration. Consider increasing irrigation.",
            )
        } else if humidity > 80 {
            RecommendationEntry::new(
                EntryType::Humidity,
                Priority::Low,
                "High Humidity",
                "High humidity reduces water loss. You may reduce irrigation slightly.",
            )
        } else {
            return None;
        };

        Some(RuleOutcome::new(entry))
    }
}
