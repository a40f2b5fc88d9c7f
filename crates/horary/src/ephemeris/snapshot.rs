//! Fixed-position provider.
//!
//! Replays a recorded set of positions for any moment. Used for replaying
//! charts from JSON and for deterministic tests.

use crate::ephemeris::provider::{EphemerisError, EphemerisProvider, HouseProvider};
use crate::ephemeris::types::{BodyPosition, BodyPositions, HouseFrame, Moment};
use crate::western::Body;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Recorded ascendant and body positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionSnapshot {
    pub ascendant: f64,
    pub bodies: BTreeMap<Body, BodyPosition>,
    #[serde(default)]
    pub north_node: Option<f64>,
}

impl PositionSnapshot {
    pub fn new(ascendant: f64) -> Self {
        Self {
            ascendant,
            bodies: BTreeMap::new(),
            north_node: None,
        }
    }

    pub fn with_body(mut self, body: Body, lon: f64, speed_lon: f64) -> Self {
        self.bodies.insert(body, BodyPosition::new(lon, speed_lon));
        self
    }

    pub fn with_north_node(mut self, lon: f64) -> Self {
        self.north_node = Some(lon);
        self
    }
}

/// Provider that answers every moment with the same snapshot.
#[derive(Debug, Clone)]
pub struct StaticEphemeris {
    snapshot: PositionSnapshot,
}

impl StaticEphemeris {
    pub fn new(snapshot: PositionSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn from_json(text: &str) -> Result<Self, EphemerisError> {
        let snapshot: PositionSnapshot = serde_json::from_str(text)?;
        Ok(Self::new(snapshot))
    }

    pub fn snapshot(&self) -> &PositionSnapshot {
        &self.snapshot
    }
}

impl EphemerisProvider for StaticEphemeris {
    fn positions(&self, _moment: &Moment) -> Result<BodyPositions, EphemerisError> {
        if let Some(body) = Body::ALL.iter().find(|b| !self.snapshot.bodies.contains_key(b)) {
            return Err(EphemerisError::MissingBody { body: *body });
        }
        Ok(BodyPositions {
            bodies: self.snapshot.bodies.clone(),
            north_node: self.snapshot.north_node,
        })
    }
}

impl HouseProvider for StaticEphemeris {
    fn equal_houses(&self, _moment: &Moment, _lat: f64, _lon: f64) -> Result<HouseFrame, EphemerisError> {
        Ok(HouseFrame::equal(self.snapshot.ascendant))
    }
}
