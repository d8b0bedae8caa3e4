use super::{Rule, RuleContext, RuleOutcome};
use crate::models::{EntryType, Priority, RecommendationEntry, Urgency};

/// Temperature rule - adjusts irrigation timing and frequency to heat or cold
///
/// Conditions:
/// - Above 35°C: heat alert, irrigate at dawn or dusk (urgency high)
/// - Above 30°C up to 35°C: warm, keep the standard schedule
/// - Below 10°C: cold, irrigate less often
pub struct TemperatureRule;

impl Rule for TemperatureRule {
    fn id(&self) -> &'static str {
        "temperature"
    }

    fn name(&self) -> &'static str {
        "Temperature"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let temp = ctx.observation.temperature_c;

        if temp > 35.0 {
            let entry = RecommendationEntry::new(
                EntryType::Temperature,
                Priority::High,
                "High Temperature Alert",
                "Consider irrigating during early morning (5-7 AM) or evening (6-8 PM) \
                 to reduce evaporation.",
            );
            Some(RuleOutcome::new(entry).with_urgency(Urgency::High))
        } else if temp > 30.0 {
            Some(RuleOutcome::new(RecommendationEntry::new(
                EntryType::Temperature,
                Priority::Medium,
                "Warm Weather",
                "Moderate temperatures. Standard irrigation schedule is recommended.",
            )))
        } else if temp < 10.0 {
            Some(RuleOutcome::new(RecommendationEntry::new(
                EntryType::Temperature,
                Priority::Low,
                "Cold Weather",
                "Reduce irrigation frequency. Plants require less water in cold conditions.",
            )))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{ctx, field, observation};
    use crate::models::CropType;

    fn run(temp: f64) -> Option<RuleOutcome> {
        let obs = observation(temp, 50, 2.0);
        let f = field(CropType::Wheat);
        TemperatureRule.evaluate(&ctx(&obs, &f, 0.0))
    }

    #[test]
    fn heat_alert_above_35() {
        let outcome = run(36.0).unwrap();
        assert_eq!(outcome.entry.priority, Priority::High);
        assert_eq!(outcome.urgency, Some(Urgency::High));
    }

    #[test]
    fn warm_between_30_and_35() {
        let outcome = run(35.0).unwrap();
        assert_eq!(outcome.entry.priority, Priority::Medium);
        assert_eq!(outcome.entry.title, "Warm Weather");
        assert!(outcome.urgency.is_none());

        assert!(run(30.0).is_none());
    }

    #[test]
    fn cold_below_10() {
        let outcome = run(9.5).unwrap();
        assert_eq!(outcome.entry.priority, Priority::Low);
        assert!(run(10.0).is_none());
    }

    #[test]
    fn mild_temperatures_produce_nothing() {
        assert!(run(22.0).is_none());
    }
}
