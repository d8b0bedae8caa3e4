use super::{Rule, RuleContext, RuleOutcome};
use crate::logic::crop_tables::crop_advice;
use crate::models::{EntryType, Priority, RecommendationEntry};

/// Crop care rule - static watering guidance for the field's crop
pub struct CropCareRule;

impl Rule for CropCareRule {
    fn id(&self) -> &'static str {
        "crop_care"
    }

    fn name(&self) -> &'static str {
        "Crop Care"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<RuleOutcome> {
        let crop = ctx.field.crop_type;
        let advice = crop_advice(crop)?;

        Some(RuleOutcome::new(RecommendationEntry::new(
            EntryType::Crop,
            Priority::Medium,
            format!("{} Care", crop.as_str()),
            advice,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{ctx, field, observation};
    use crate::models::CropType;

    #[test]
    fn known_crop_gets_advice() {
        let obs = observation(25.0, 50, 2.0);
        let f = field(CropType::Rice);
        let outcome = CropCareRule.evaluate(&ctx(&obs, &f, 0.0)).unwrap();
        assert_eq!(outcome.entry.title, "Rice Care");
        assert!(outcome.entry.message.contains("standing water"));
    }

    #[test]
    fn other_crop_gets_nothing() {
        let obs = observation(25.0, 50, 2.0);
        let f = field(CropType::Other);
        assert!(CropCareRule.evaluate(&ctx(&obs, &f, 0.0)).is_none());
    }
}
