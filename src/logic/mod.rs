pub mod advisor;
pub mod calculations;
pub mod crop_tables;
pub mod rules;
pub mod usage_stats;

pub use advisor::{compute_recommendation, Advisor};
pub use rules::RulesEngine;
pub use usage_stats::summarize_usage;
