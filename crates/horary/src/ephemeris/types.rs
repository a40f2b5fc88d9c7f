use crate::western::Body;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

impl GeoLocation {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude within ±90° and longitude within ±180°.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

/// The instant and place a question is asked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Moment {
    pub at: DateTime<Utc>,
    pub location: GeoLocation,
}

impl Moment {
    pub fn new(at: DateTime<Utc>, location: GeoLocation) -> Self {
        Self { at, location }
    }
}

/// Ecliptic position of one body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Longitude in degrees (0-360)
    pub lon: f64,
    /// Speed in longitude (degrees per day), negative when retrograde
    pub speed_lon: f64,
}

impl BodyPosition {
    pub fn new(lon: f64, speed_lon: f64) -> Self {
        Self { lon, speed_lon }
    }

    pub fn is_retrograde(&self) -> bool {
        self.speed_lon < 0.0
    }
}

/// Positions returned by an ephemeris provider for one moment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BodyPositions {
    pub bodies: BTreeMap<Body, BodyPosition>,
    /// True node longitude, carried as metadata only
    #[serde(default)]
    pub north_node: Option<f64>,
}

impl BodyPositions {
    pub fn get(&self, body: Body) -> Option<&BodyPosition> {
        self.bodies.get(&body)
    }
}

/// Equal-house frame returned by a house provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseFrame {
    /// Ascendant longitude in degrees
    pub ascendant: f64,
    /// Cusps 1..12 in degrees; cusp 1 equals the ascendant
    pub cusps: [f64; 12],
}

impl HouseFrame {
    /// Equal houses: each cusp is the ascendant plus a multiple of 30°.
    pub fn equal(ascendant: f64) -> Self {
        let ascendant = crate::western::normalize_degrees(ascendant);
        let mut cusps = [0.0; 12];
        for (i, cusp) in cusps.iter_mut().enumerate() {
            *cusp = crate::western::normalize_degrees(ascendant + 30.0 * i as f64);
        }
        Self { ascendant, cusps }
    }
}
