pub mod caster;
pub mod types;

pub use caster::{house_of, ChartCaster};
pub use types::{BodyPlacement, HoraryChart, HouseCusp, HouseStrength};
