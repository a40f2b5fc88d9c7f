use crate::ephemeris::types::{BodyPositions, HouseFrame, Moment};
use crate::western::Body;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("{datetime} is outside the supported ephemeris range")]
    OutOfRange { datetime: DateTime<Utc> },
    #[error("Failed to calculate position for {body} at {datetime}: {message}")]
    CalculationFailed {
        body: String,
        datetime: DateTime<Utc>,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
    #[error("Position snapshot has no entry for {body}")]
    MissingBody { body: Body },
    #[error("Invalid position snapshot: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),
}

/// Source of body longitudes and speeds.
pub trait EphemerisProvider {
    fn positions(&self, moment: &Moment) -> Result<BodyPositions, EphemerisError>;
}

/// Source of equal-house cusps for a moment and place.
pub trait HouseProvider {
    fn equal_houses(&self, moment: &Moment, lat: f64, lon: f64) -> Result<HouseFrame, EphemerisError>;
}

impl<T: EphemerisProvider + ?Sized> EphemerisProvider for &T {
    fn positions(&self, moment: &Moment) -> Result<BodyPositions, EphemerisError> {
        (**self).positions(moment)
    }
}

impl<T: HouseProvider + ?Sized> HouseProvider for &T {
    fn equal_houses(&self, moment: &Moment, lat: f64, lon: f64) -> Result<HouseFrame, EphemerisError> {
        (**self).equal_houses(moment, lat, lon)
    }
}
