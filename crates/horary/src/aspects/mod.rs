pub mod calculator;
pub mod types;

pub use calculator::AspectCalculator;
pub use types::{AspectKind, AspectRecord};
