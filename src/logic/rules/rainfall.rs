use super::{Rule, RuleContext, RuleOutcome};
use crate::models::{EntryType, Priority, RecommendationEntry, Urgency};

/// Rainfall rule - scales irrigation against rain expected in the next 24h
///
/// First match wins:
/// - More than 10mm: skip irrigation (urgency low)
/// - More than 5mm: cut irrigation by half
/// - No rain at all and humidity below 40%: dry spell, full irrigation (urgency high)
pub struct RainfallRule;

const HEAVY_RAIN_MM: f64 = 10.0;
const LIGHT_RAIN_MM: f64 = 5.0;
const DRY_AIR_HUMIDITY: u8 = 40;

impl Rule for RainfallRule {
    fn id(&self) -> &'static str {
        "rainfall"
    }

    fn name(&self) -> &'static str {
        "Rainfall Forecast"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let rain = ctx.expected_rainfall;

        if rain > HEAVY_RAIN_MM {
            let entry = RecommendationEntry::new(
                EntryType::Rain,
                Priority::High,
                "Rain Expected",
                format!(
                    "{:.1}mm of rain expected in the next 24 hours. Consider skipping irrigation.",
                    rain
                ),
            );
            Some(
                RuleOutcome::new(entry)
                    .with_advice("Skip irrigation today - significant rainfall expected.")
                    .with_urgency(Urgency::Low),
            )
        } else if rain > LIGHT_RAIN_MM {
            let entry = RecommendationEntry::new(
                EntryType::Rain,
                Priority::Medium,
                "Light Rain Expected",
                format!(
                    "{:.1}mm of rain expected. Reduce irrigation amount.",
                    rain
                ),
            );
            Some(
                RuleOutcome::new(entry)
                    .with_advice("Reduce irrigation by 50% - light rainfall expected."),
            )
        } else if rain == 0.0 && ctx.observation.humidity < DRY_AIR_HUMIDITY {
            let entry = RecommendationEntry::new(
                EntryType::Drought,
                Priority::High,
                "Dry Conditions",
                "No rain expected and low humidity. Ensure adequate irrigation.",
            );
            Some(
                RuleOutcome::new(entry)
                    .with_advice("Full irrigation recommended - dry conditions expected.")
                    .with_urgency(Urgency::High),
            )
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

    fn run(rain: f64, humidity: u8) -> Option<RuleOutcome> {
        let obs = observation(25.0, humidity, 2.0);
        let f = field(CropType::Corn);
        RainfallRule.evaluate(&ctx(&obs, &f, rain))
    }

    #[test]
    fn heavy_rain_skips_irrigation() {
        let outcome = run(12.0, 60).unwrap();
        assert_eq!(outcome.entry.entry_type, EntryType::Rain);
        assert_eq!(outcome.entry.priority, Priority::High);
        assert!(outcome.entry.message.starts_with("12.0mm"));
        assert_eq!(outcome.urgency, Some(Urgency::Low));
        assert!(outcome.advice.unwrap().starts_with("Skip irrigation"));
    }

    #[test]
    fn light_rain_halves_irrigation() {
        let outcome = run(7.5, 60).unwrap();
        assert_eq!(outcome.entry.priority, Priority::Medium);
        assert!(outcome.urgency.is_none());
        assert!(outcome.advice.unwrap().contains("50%"));
    }

    #[test]
    fn boundaries_are_exclusive() {
        // Exactly 10mm is light rain, exactly 5mm matches nothing
        assert_eq!(run(10.0, 60).unwrap().entry.priority, Priority::Medium);
        assert!(run(5.0, 60).is_none());
    }

    #[test]
    fn dry_conditions_need_zero_rain_and_dry_air() {
        let outcome = run(0.0, 35).unwrap();
        assert_eq!(outcome.entry.entry_type, EntryType::Drought);
        assert_eq!(outcome.urgency, Some(Urgency::High));

        assert!(run(0.0, 40).is_none());
        assert!(run(0.2, 20).is_none());
    }
}
