use crate::models::{CropType, NeedLevel};
use serde::Serialize;

/// Reference crop water needs in mm/day, per need level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropWaterProfile {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl CropWaterProfile {
    pub const fn new(low: f64, medium: f64, high: f64) -> Self {
        Self { low, medium, high }
    }

    pub fn rate(&self, level: NeedLevel) -> f64 {
        match level {
            NeedLevel::Low => self.low,
            NeedLevel::Medium => self.medium,
            NeedLevel::High => self.high,
        }
    }
}

const WHEAT: CropWaterProfile = CropWaterProfile::new(3.0, 5.0, 7.0);
const RICE: CropWaterProfile = CropWaterProfile::new(5.0, 8.0, 12.0);
const CORN: CropWaterProfile = CropWaterProfile::new(4.0, 6.0, 9.0);
const COTTON: CropWaterProfile = CropWaterProfile::new(4.0, 6.0, 8.0);
const SUGARCANE: CropWaterProfile = CropWaterProfile::new(5.0, 7.0, 10.0);
const VEGETABLES: CropWaterProfile = CropWaterProfile::new(3.0, 5.0, 7.0);
const FRUITS: CropWaterProfile = CropWaterProfile::new(4.0, 6.0, 8.0);
const OTHER: CropWaterProfile = CropWaterProfile::new(3.0, 5.0, 7.0);

pub fn water_profile(crop: CropType) -> &'static CropWaterProfile {
    match crop {
        CropType::Wheat => &WHEAT,
        CropType::Rice => &RICE,
        CropType::Corn => &CORN,
        CropType::Cotton => &COTTON,
        CropType::Sugarcane => &SUGARCANE,
        CropType::Vegetables => &VEGETABLES,
        CropType::Fruits => &FRUITS,
        CropType::Other => &OTHER,
    }
}

/// Crop care guidance. `Other` has none.
pub fn crop_advice(crop: CropType) -> Option<&'static str> {
    match crop {
        CropType::Rice => {
            Some("Rice requires standing water. Maintain 5-10cm water depth in paddies.")
        }
        CropType::Wheat => Some("Wheat is drought-tolerant. Avoid overwatering."),
        CropType::Corn => Some("Corn needs consistent moisture, especially during tasseling."),
        CropType::Cotton => Some("Cotton is sensitive to waterlogging. Ensure good drainage."),
        CropType::Sugarcane => {
            Some("Sugarcane requires frequent irrigation during growth phase.")
        }
        CropType::Vegetables => {
            Some("Vegetables need consistent moisture. Mulching helps retain water.")
        }
        CropType::Fruits => Some("Fruit trees benefit from deep, infrequent watering."),
        CropType::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_rates() {
        assert_eq!(water_profile(CropType::Wheat).rate(NeedLevel::High), 7.0);
        assert_eq!(water_profile(CropType::Rice).rate(NeedLevel::Low), 5.0);
        assert_eq!(water_profile(CropType::Rice).rate(NeedLevel::High), 12.0);
        assert_eq!(water_profile(CropType::Sugarcane).rate(NeedLevel::Medium), 7.0);
        assert_eq!(water_profile(CropType::Other).rate(NeedLevel::Medium), 5.0);
    }

    #[test]
    fn profiles_increase_with_need_level() {
        for crop in CropType::all() {
            let p = water_profile(*crop);
            assert!(p.low < p.medium && p.medium < p.high, "{:?}", crop);
        }
    }

    #[test]
    fn every_named_crop_has_advice() {
        for crop in CropType::all() {
            assert_eq!(crop_advice(*crop).is_some(), *crop != CropType::Other);
        }
    }
}
