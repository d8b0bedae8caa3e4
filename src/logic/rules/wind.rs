use super::{Rule, RuleContext, RuleOutcome};
use crate::models::{EntryType, Priority, RecommendationEntry};

const WINDY_MS: f64 = 10.0;

/// Wind rule - sprinkler drift and evaporation above 10 m/s
pub struct WindRule;

impl Rule for WindRule {
    fn id(&self) -> &'static str {
        "wind"
    }

    fn name(&self) -> &'static str {
        "Wind"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        if ctx.observation.wind_speed_ms <= WINDY_MS {
            return None;
        }

        Some(RuleOutcome::new(RecommendationEntry::new(
            EntryType::Wind,
            Priority::Medium,
            "Windy Conditions",
            "High winds increase evaporation. Avoid sprinkler irrigation, prefer drip systems.",
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{ctx, field, observation};
    use crate::models::CropType;

    #[test]
    fn fires_only_above_threshold() {
        let f = field(CropType::Fruits);

        let calm = observation(25.0, 50, 10.0);
        assert!(WindRule.evaluate(&ctx(&calm, &f, 0.0)).is_none());

        let windy = observation(25.0, 50, 12.3);
        let outcome = WindRule.evaluate(&ctx(&windy, &f, 0.0)).unwrap();
        assert_eq!(outcome.entry.entry_type, EntryType::Wind);
        assert_eq!(outcome.entry.priority, Priority::Medium);
    }
}
