use crate::aspects::AspectKind;
use crate::chart::{BodyPlacement, HoraryChart};
use crate::western::{angular_separation, Body, BodyNature};
use serde::Serialize;

/// Orb for benefic/malefic conjunction or opposition.
pub const HAYZ_ORB: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HayzPair {
    pub benefic: Body,
    pub malefic: Body,
    pub kind: AspectKind,
    pub separation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HayzResult {
    pub present: bool,
    pub pairs: Vec<HayzPair>,
    pub rationale: String,
}

/// Benefic/malefic contact between two placements, in either order.
pub fn hayz_between(a: &BodyPlacement, b: &BodyPlacement) -> Option<HayzPair> {
    let (benefic, malefic) = match (a.body.nature(), b.body.nature()) {
        (BodyNature::Benefic, BodyNature::Malefic) => (a, b),
        (BodyNature::Malefic, BodyNature::Benefic) => (b, a),
        _ => return None,
    };

    let separation = angular_separation(benefic.longitude, malefic.longitude);
    let kind = if separation <= HAYZ_ORB {
        AspectKind::Conjunction
    } else if (180.0 - separation) <= HAYZ_ORB {
        AspectKind::Opposition
    } else {
        return None;
    };

    Some(HayzPair {
        benefic: benefic.body,
        malefic: malefic.body,
        kind,
        separation,
    })
}

/// Every benefic/malefic pair in conjunction or opposition.
pub fn detect_hayz(chart: &HoraryChart) -> HayzResult {
    let placements = chart.placements();
    let mut pairs = Vec::new();
    for i in 0..placements.len() {
        for j in (i + 1)..placements.len() {
            if let Some(pair) = hayz_between(&placements[i], &placements[j]) {
                pairs.push(pair);
            }
        }
    }

    let rationale = if pairs.is_empty() {
        "no benefic/malefic conjunction or opposition within 10°".to_string()
    } else {
        pairs
            .iter()
            .map(|p| format!("{} {} {} ({:.1}°)", p.benefic, p.kind, p.malefic, p.separation))
            .collect::<Vec<_>>()
            .join("; ")
    };

    HayzResult {
        present: !pairs.is_empty(),
        pairs,
        rationale,
    }
}
