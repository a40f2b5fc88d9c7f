pub mod adapter;
pub mod provider;
pub mod snapshot;
pub mod types;

pub use adapter::SwissEphemerisAdapter;
pub use provider::{EphemerisError, EphemerisProvider, HouseProvider};
pub use snapshot::{PositionSnapshot, StaticEphemeris};
pub use types::{BodyPosition, BodyPositions, GeoLocation, HouseFrame, Moment};
