use super::field::CropType;
use crate::error::{AquaFarmError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeUnit {
    #[default]
    Liters,
    Gallons,
    CubicMeters,
}

impl VolumeUnit {
    pub const LITERS_PER_GALLON: f64 = 3.78541;
    pub const LITERS_PER_CUBIC_METER: f64 = 1000.0;

    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeUnit::Liters => "liters",
            VolumeUnit::Gallons => "gallons",
            VolumeUnit::CubicMeters => "cubic_meters",
        }
    }

    pub fn to_liters(&self, volume: f64) -> f64 {
        match self {
            VolumeUnit::Liters => volume,
            VolumeUnit::Gallons => volume * Self::LITERS_PER_GALLON,
            VolumeUnit::CubicMeters => volume * Self::LITERS_PER_CUBIC_METER,
        }
    }
}

impl std::fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationMethod {
    #[default]
    Drip,
    Sprinkler,
    Flood,
    Furrow,
    Manual,
}

impl IrrigationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            IrrigationMethod::Drip => "Drip",
            IrrigationMethod::Sprinkler => "Sprinkler",
            IrrigationMethod::Flood => "Flood",
            IrrigationMethod::Furrow => "Furrow",
            IrrigationMethod::Manual => "Manual",
        }
    }
}

impl std::fmt::Display for IrrigationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One logged irrigation event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterUsageRecord {
    pub field_id: String,
    #[serde(default)]
    pub field_name: String,
    #[serde(default)]
    pub crop_type: CropType,
    pub date: NaiveDate,
    pub water_used: f64,
    #[serde(default)]
    pub unit: VolumeUnit,
    #[serde(default)]
    pub duration_minutes: f64,
    #[serde(default)]
    pub method: IrrigationMethod,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

impl WaterUsageRecord {
    pub fn new(field_id: impl Into<String>, date: NaiveDate, water_used: f64) -> Self {
        Self {
            field_id: field_id.into(),
            field_name: String::new(),
            crop_type: CropType::Other,
            date,
            water_used,
            unit: VolumeUnit::Liters,
            duration_minutes: 0.0,
            method: IrrigationMethod::Drip,
            notes: String::new(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.field_id.trim().is_empty() {
            return Err(AquaFarmError::InvalidData(
                "Water usage record has no field".into(),
            ));
        }
        if !self.water_used.is_finite() || self.water_used < 0.0 {
            return Err(AquaFarmError::InvalidData(format!(
                "Water used must be non-negative, got {} (field {}, {})",
                self.water_used, self.field_id, self.date
            )));
        }
        if !self.duration_minutes.is_finite() || self.duration_minutes < 0.0 {
            return Err(AquaFarmError::InvalidData(format!(
                "Duration must be non-negative, got {} (field {}, {})",
                self.duration_minutes, self.field_id, self.date
            )));
        }
        Ok(())
    }

    pub fn liters(&self) -> f64 {
        self.unit.to_liters(self.water_used)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSummary {
    pub total_water: f64,
    pub avg_per_record: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldUsage {
    pub field_id: String,
    pub field_name: String,
    pub crop_type: CropType,
    pub total_water: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyUsage {
    pub date: NaiveDate,
    pub total_water: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodUsage {
    pub method: IrrigationMethod,
    pub total_water: f64,
    pub count: usize,
}

/// Water usage statistics for a period, all volumes in liters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageStats {
    pub summary: UsageSummary,
    pub by_field: Vec<FieldUsage>,
    pub daily: Vec<DailyUsage>,
    pub by_method: Vec<MethodUsage>,
}
