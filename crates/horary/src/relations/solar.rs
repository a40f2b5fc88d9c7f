use crate::chart::HoraryChart;
use crate::western::{angular_separation, Body};
use serde::Serialize;

pub const CAZIMI_ORB: f64 = 0.1;
pub const DEEP_COMBUST_ORB: f64 = 1.0;
pub const COMBUST_ORB: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolarCondition {
    /// In the heart of the Sun; affliction is cancelled
    Cazimi,
    DeepCombust,
    Combust,
    Clear,
}

impl SolarCondition {
    pub fn from_separation(separation: f64) -> SolarCondition {
        if separation < CAZIMI_ORB {
            SolarCondition::Cazimi
        } else if separation < DEEP_COMBUST_ORB {
            SolarCondition::DeepCombust
        } else if separation < COMBUST_ORB {
            SolarCondition::Combust
        } else {
            SolarCondition::Clear
        }
    }

    /// Weakened by the Sun (combust, not cazimi).
    pub fn is_afflicted(self) -> bool {
        matches!(self, SolarCondition::DeepCombust | SolarCondition::Combust)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarProximity {
    pub body: Body,
    pub separation: f64,
    pub condition: SolarCondition,
}

/// Distance from the Sun for every other body.
pub fn solar_proximity(chart: &HoraryChart) -> Vec<SolarProximity> {
    let sun = chart.placement(Body::Sun).longitude;
    chart
        .placements()
        .iter()
        .filter(|p| p.body != Body::Sun)
        .map(|p| {
            let separation = angular_separation(p.longitude, sun);
            SolarProximity {
                body: p.body,
                separation,
                condition: SolarCondition::from_separation(separation),
            }
        })
        .collect()
}
