use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum CropType {
    Wheat,
    Rice,
    Corn,
    Cotton,
    Sugarcane,
    Vegetables,
    Fruits,
    #[default]
    Other,
}

impl CropType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CropType::Wheat => "Wheat",
            CropType::Rice => "Rice",
            CropType::Corn => "Corn",
            CropType::Cotton => "Cotton",
            CropType::Sugarcane => "Sugarcane",
            CropType::Vegetables => "Vegetables",
            CropType::Fruits => "Fruits",
            CropType::Other => "Other",
        }
    }

    /// Lowercase identifier used on the wire and in config files
    pub fn key(&self) -> &'static str {
        match self {
            CropType::Wheat => "wheat",
            CropType::Rice => "rice",
            CropType::Corn => "corn",
            CropType::Cotton => "cotton",
            CropType::Sugarcane => "sugarcane",
            CropType::Vegetables => "vegetables",
            CropType::Fruits => "fruits",
            CropType::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "wheat" => Some(CropType::Wheat),
            "rice" | "paddy" => Some(CropType::Rice),
            "corn" | "maize" => Some(CropType::Corn),
            "cotton" => Some(CropType::Cotton),
            "sugarcane" | "sugar cane" => Some(CropType::Sugarcane),
            "vegetables" | "vegetable" => Some(CropType::Vegetables),
            "fruits" | "fruit" => Some(CropType::Fruits),
            "other" => Some(CropType::Other),
            _ => None,
        }
    }

    /// Parse a crop name, mapping anything unrecognized to `Other`
    pub fn from_str_lossy(s: &str) -> Self {
        Self::from_str(s).unwrap_or_else(|| {
            tracing::warn!(crop_type = %s, "Unknown crop type, using generic profile");
            CropType::Other
        })
    }

    pub fn all() -> &'static [CropType] {
        &[
            CropType::Wheat,
            CropType::Rice,
            CropType::Corn,
            CropType::Cotton,
            CropType::Sugarcane,
            CropType::Vegetables,
            CropType::Fruits,
            CropType::Other,
        ]
    }
}

impl std::fmt::Display for CropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for CropType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for CropType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(CropType::from_str_lossy(&value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaUnit {
    #[default]
    Acres,
    Hectares,
    Sqft,
}

impl AreaUnit {
    pub const HECTARES_PER_ACRE: f64 = 0.4047;
    pub const HECTARES_PER_SQFT: f64 = 0.0000929;

    pub fn as_str(&self) -> &'static str {
        match self {
            AreaUnit::Acres => "acres",
            AreaUnit::Hectares => "hectares",
            AreaUnit::Sqft => "sqft",
        }
    }

    pub fn hectares_per_unit(&self) -> f64 {
        match self {
            AreaUnit::Acres => Self::HECTARES_PER_ACRE,
            AreaUnit::Hectares => 1.0,
            AreaUnit::Sqft => Self::HECTARES_PER_SQFT,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "acres" | "acre" | "ac" => Some(AreaUnit::Acres),
            "hectares" | "hectare" | "ha" => Some(AreaUnit::Hectares),
            "sqft" | "sq ft" | "square feet" | "ft2" => Some(AreaUnit::Sqft),
            _ => None,
        }
    }
}

impl std::fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The field attributes the advisor needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub crop_type: CropType,
    pub area: f64,
    #[serde(default)]
    pub area_unit: AreaUnit,
}

impl FieldSpec {
    pub fn new(crop_type: CropType, area: f64, area_unit: AreaUnit) -> Self {
        Self {
            name: None,
            crop_type,
            area,
            area_unit,
        }
    }

    /// Field area in hectares. Non-positive or non-finite areas clamp to 0.
    pub fn area_in_hectares(&self) -> f64 {
        if !self.area.is_finite() || self.area <= 0.0 {
            tracing::warn!(area = self.area, "Invalid field area, treating as 0");
            return 0.0;
        }
        self.area * self.area_unit.hectares_per_unit()
    }
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self::new(CropType::Other, 1.0, AreaUnit::Acres)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_type_from_str_valid() {
        assert_eq!(CropType::from_str("wheat"), Some(CropType::Wheat));
        assert_eq!(CropType::from_str("Rice"), Some(CropType::Rice));
        assert_eq!(CropType::from_str("maize"), Some(CropType::Corn));
        assert_eq!(CropType::from_str(" SUGARCANE "), Some(CropType::Sugarcane));
        assert_eq!(CropType::from_str("other"), Some(CropType::Other));
    }

    #[test]
    fn crop_type_unknown_falls_back_to_other() {
        assert_eq!(CropType::from_str("bamboo"), None);
        assert_eq!(CropType::from_str_lossy("bamboo"), CropType::Other);
        assert_eq!(CropType::from_str_lossy(""), CropType::Other);
    }

    #[test]
    fn crop_type_key_round_trip() {
        for crop in CropType::all() {
            assert_eq!(CropType::from_str(crop.key()), Some(*crop));
        }
    }

    #[test]
    fn crop_type_deserializes_unknown_as_other() {
        let field: FieldSpec =
            serde_json::from_str(r#"{"cropType":"bamboo","area":2.0,"areaUnit":"hectares"}"#)
                .unwrap();
        assert_eq!(field.crop_type, CropType::Other);
        assert_eq!(field.area_unit, AreaUnit::Hectares);
    }

    #[test]
    fn field_spec_defaults_match_query_defaults() {
        let field: FieldSpec = serde_json::from_str(r#"{"area":1.0}"#).unwrap();
        assert_eq!(field.crop_type, CropType::Other);
        assert_eq!(field.area_unit, AreaUnit::Acres);
    }

    #[test]
    fn area_unit_conversion() {
        let acre = FieldSpec::new(CropType::Wheat, 1.0, AreaUnit::Acres);
        assert!((acre.area_in_hectares() - 0.4047).abs() < 1e-9);

        let sqft = FieldSpec::new(CropType::Wheat, 1.0, AreaUnit::Sqft);
        assert!((sqft.area_in_hectares() - 0.0000929).abs() < 1e-12);

        let ha = FieldSpec::new(CropType::Wheat, 2.5, AreaUnit::Hectares);
        assert!((ha.area_in_hectares() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn non_positive_area_clamps_to_zero() {
        assert_eq!(
            FieldSpec::new(CropType::Corn, 0.0, AreaUnit::Acres).area_in_hectares(),
            0.0
        );
        assert_eq!(
            FieldSpec::new(CropType::Corn, -3.0, AreaUnit::Hectares).area_in_hectares(),
            0.0
        );
        assert_eq!(
            FieldSpec::new(CropType::Corn, f64::NAN, AreaUnit::Sqft).area_in_hectares(),
            0.0
        );
    }

    #[test]
    fn area_unit_from_str() {
        assert_eq!(AreaUnit::from_str("ha"), Some(AreaUnit::Hectares));
        assert_eq!(AreaUnit::from_str("Acres"), Some(AreaUnit::Acres));
        assert_eq!(AreaUnit::from_str("sq ft"), Some(AreaUnit::Sqft));
        assert_eq!(AreaUnit::from_str("furlongs"), None);
    }
}
