//! AquaFarm irrigation advisor.
//!
//! The core is [`logic::compute_recommendation`]: a pure mapping from current
//! weather, a short-term forecast and a field description to an irrigation
//! recommendation. Everything else here feeds it or presents its output.

pub mod cli;
pub mod config;
pub mod datasources;
pub mod error;
pub mod logic;
pub mod models;
pub mod report;

pub use error::{AquaFarmError, Result};
pub use logic::{compute_recommendation, Advisor};
