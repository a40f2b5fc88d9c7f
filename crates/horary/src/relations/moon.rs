//! Condition of the Moon.
//!
//! In the default `HouseProxy` mode the benefic/malefic flags come from the
//! Moon's house alone: houses 5 and 9 stand in for benefic contact, houses 6
//! and 8 for malefic contact. No aspect to an actual benefic or malefic is
//! checked. `Aspects` mode replaces the proxy with the Moon's applying
//! aspects.

use crate::aspects::AspectRecord;
use crate::chart::HoraryChart;
use crate::western::{Body, BodyNature};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonContactMode {
    #[default]
    HouseProxy,
    Aspects,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoonPhase {
    Waxing,
    Waning,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonCondition {
    pub house: u8,
    pub speed: f64,
    pub phase: MoonPhase,
    pub aspecting_benefic: bool,
    pub aspecting_malefic: bool,
    pub mode: MoonContactMode,
}

fn applying_to(aspects: &[AspectRecord], nature: BodyNature) -> bool {
    aspects.iter().any(|a| {
        a.applying
            && a.other(Body::Moon)
                .map(|other| other.nature() == nature)
                .unwrap_or(false)
    })
}

pub fn moon_condition(chart: &HoraryChart, aspects: &[AspectRecord], mode: MoonContactMode) -> MoonCondition {
    let moon = chart.placement(Body::Moon);
    let phase = if moon.house >= 7 {
        MoonPhase::Waning
    } else {
        MoonPhase::Waxing
    };

    let (aspecting_benefic, aspecting_malefic) = match mode {
        MoonContactMode::HouseProxy => (matches!(moon.house, 5 | 9), matches!(moon.house, 6 | 8)),
        MoonContactMode::Aspects => (
            applying_to(aspects, BodyNature::Benefic),
            applying_to(aspects, BodyNature::Malefic),
        ),
    };

    MoonCondition {
        house: moon.house,
        speed: moon.speed,
        phase,
        aspecting_benefic,
        aspecting_malefic,
        mode,
    }
}
