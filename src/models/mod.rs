pub mod field;
pub mod forecast;
pub mod recommendation;
pub mod usage;
pub mod weather;

pub use field::*;
pub use forecast::*;
pub use recommendation::*;
pub use usage::*;
pub use weather::*;
