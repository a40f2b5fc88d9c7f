use crate::ephemeris::Moment;
use crate::western::{Body, DignityState, Sign};
use serde::{Deserialize, Serialize};

/// One of the twelve equal-house cusps
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    pub house: u8,
    pub longitude: f64,
    pub sign: Sign,
    /// `None` only when the dignity table has no row for the sign
    pub ruler: Option<Body>,
}

/// A body placed in the chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPlacement {
    pub body: Body,
    pub longitude: f64,
    /// Degrees per day, negative when retrograde
    pub speed: f64,
    pub sign: Sign,
    pub house: u8,
    pub dignity: DignityState,
}

impl BodyPlacement {
    pub fn is_retrograde(&self) -> bool {
        self.speed < 0.0
    }
}

/// Angular, succedent or cadent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseStrength {
    Angular,
    Succedent,
    Cadent,
}

impl HouseStrength {
    pub fn of(house: u8) -> HouseStrength {
        match house {
            1 | 4 | 7 | 10 => HouseStrength::Angular,
            2 | 5 | 8 | 11 => HouseStrength::Succedent,
            _ => HouseStrength::Cadent,
        }
    }

    /// Points awarded to a significator in a house of this strength.
    pub fn points(self) -> f64 {
        match self {
            HouseStrength::Angular => 2.0,
            HouseStrength::Succedent => 1.0,
            HouseStrength::Cadent => 0.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HouseStrength::Angular => "angular",
            HouseStrength::Succedent => "succedent",
            HouseStrength::Cadent => "cadent",
        }
    }
}

/// A cast horary chart.
///
/// Always holds twelve cusps with cusp 1 on the ascendant, and one placement
/// for each classical body.
#[derive(Debug, Clone, Serialize)]
pub struct HoraryChart {
    moment: Moment,
    ascendant: f64,
    cusps: Vec<HouseCusp>,
    bodies: Vec<BodyPlacement>,
    north_node: Option<f64>,
}

impl HoraryChart {
    /// Callers must supply twelve cusps and one placement per body in
    /// [`Body::ALL`] order; the caster is the only producer.
    pub(crate) fn new(
        moment: Moment,
        ascendant: f64,
        cusps: Vec<HouseCusp>,
        bodies: Vec<BodyPlacement>,
        north_node: Option<f64>,
    ) -> Self {
        debug_assert_eq!(cusps.len(), 12);
        debug_assert!(bodies.iter().map(|p| p.body).eq(Body::ALL.iter().copied()));
        Self {
            moment,
            ascendant,
            cusps,
            bodies,
            north_node,
        }
    }

    pub fn moment(&self) -> &Moment {
        &self.moment
    }

    pub fn ascendant(&self) -> f64 {
        self.ascendant
    }

    pub fn ascendant_sign(&self) -> Sign {
        Sign::from_longitude(self.ascendant)
    }

    pub fn cusps(&self) -> &[HouseCusp] {
        &self.cusps
    }

    /// Cusp of a house numbered 1..=12.
    pub fn cusp(&self, house: u8) -> Option<&HouseCusp> {
        self.cusps.get(usize::from(house).checked_sub(1)?)
    }

    pub fn placements(&self) -> &[BodyPlacement] {
        &self.bodies
    }

    pub fn placement(&self, body: Body) -> &BodyPlacement {
        &self.bodies[body.index()]
    }

    pub fn north_node(&self) -> Option<f64> {
        self.north_node
    }

    /// Bodies occupying a house.
    pub fn occupants(&self, house: u8) -> impl Iterator<Item = &BodyPlacement> {
        self.bodies.iter().filter(move |p| p.house == house)
    }
}
