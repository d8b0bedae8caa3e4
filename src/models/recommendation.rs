use super::usage::VolumeUnit;
use serde::{Deserialize, Serialize};

/// Irrigation intensity class derived from temperature and humidity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeedLevel {
    Low,
    Medium,
    High,
}

impl NeedLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NeedLevel::Low => "low",
            NeedLevel::Medium => "medium",
            NeedLevel::High => "high",
        }
    }
}

impl std::fmt::Display for NeedLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Overall severity of a recommendation, as surfaced to the farmer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Urgency::Low => "→",
            Urgency::Medium => "⚠",
            Urgency::High => "!",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Priority of a single recommendation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank: high first
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Temperature,
    Rain,
    Drought,
    Humidity,
    Wind,
    Crop,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Temperature => "Temperature",
            EntryType::Rain => "Rain",
            EntryType::Drought => "Drought",
            EntryType::Humidity => "Humidity",
            EntryType::Wind => "Wind",
            EntryType::Crop => "Crop",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            EntryType::Temperature => "🌡",
            EntryType::Rain => "🌧",
            EntryType::Drought => "🏜",
            EntryType::Humidity => "💧",
            EntryType::Wind => "💨",
            EntryType::Crop => "🌱",
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub title: String,
    pub message: String,
    pub priority: Priority,
}

impl RecommendationEntry {
    pub fn new(
        entry_type: EntryType,
        priority: Priority,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            entry_type,
            title: title.into(),
            message: message.into(),
            priority,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterNeeded {
    pub base: f64,
    pub adjusted: f64,
    pub unit: VolumeUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub urgency: Urgency,
    pub advice: String,
    pub best_time: String,
    pub water_needed: WaterNeeded,
    /// mm/day from the crop profile at `water_need_level`
    pub crop_water_need: f64,
    pub water_need_level: NeedLevel,
    /// mm expected over the next 24 hours
    pub expected_rainfall: f64,
    pub recommendations: Vec<RecommendationEntry>,
}
