use crate::models::{
    DailyUsage, FieldUsage, IrrigationMethod, MethodUsage, UsageStats, UsageSummary,
    WaterUsageRecord,
};
use crate::error::{AquaFarmError, Result};
use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;

/// Summarize water usage for records dated on or after `since`.
/// Volumes are normalized to liters before summing.
pub fn summarize_usage(records: &[WaterUsageRecord], since: NaiveDate) -> UsageStats {
    let in_period: Vec<&WaterUsageRecord> = records.iter().filter(|r| r.date >= since).collect();

    if in_period.is_empty() {
        return UsageStats::default();
    }

    let total_water: f64 = in_period.iter().map(|r| r.liters()).sum();
    let count = in_period.len();
    let summary = UsageSummary {
        total_water,
        avg_per_record: total_water / count as f64,
        count,
    };

    let mut by_field: BTreeMap<&str, FieldUsage> = BTreeMap::new();
    let mut daily: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    let mut by_method: BTreeMap<IrrigationMethod, (f64, usize)> = BTreeMap::new();

    for record in &in_period {
        let liters = record.liters();

        let field = by_field
            .entry(record.field_id.as_str())
            .or_insert_with(|| FieldUsage {
                field_id: record.field_id.clone(),
                field_name: record.field_name.clone(),
                crop_type: record.crop_type,
                total_water: 0.0,
                count: 0,
            });
        field.total_water += liters;
        field.count += 1;

        *daily.entry(record.date).or_insert(0.0) += liters;

        let method = by_method.entry(record.method).or_insert((0.0, 0));
        method.0 += liters;
        method.1 += 1;
    }

    UsageStats {
        summary,
        by_field: by_field.into_values().collect(),
        daily: daily
            .into_iter()
            .map(|(date, total_water)| DailyUsage { date, total_water })
            .collect(),
        by_method: by_method
            .into_iter()
            .map(|(method, (total_water, count))| MethodUsage {
                method,
                total_water,
                count,
            })
            .collect(),
    }
}

/// Start date of a period ending on `today`, `days` long
pub fn period_start(today: NaiveDate, days: u32) -> Result<NaiveDate> {
    today
        .checked_sub_days(Days::new(u64::from(days)))
        .ok_or_else(|| {
            AquaFarmError::InvalidData(format!(
                "a {} day period reaches before the earliest supported date",
                days
            ))
        })
}
