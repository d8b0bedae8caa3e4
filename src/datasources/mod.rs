pub mod openweathermap;

pub use openweathermap::{parse_current, parse_forecast};
