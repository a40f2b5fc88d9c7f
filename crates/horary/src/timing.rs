//! Outcome timing from the Moon's house and speed.

use crate::chart::{HoraryChart, HouseStrength};
use crate::western::Body;
use serde::Serialize;

/// Half-width of the band around the estimate, in days.
pub const TIMING_BAND_DAYS: f64 = 7.0;
/// Window multiplier when a swift body is prominent.
pub const SWIFT_FACTOR: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingEstimate {
    pub days: f64,
    pub low: f64,
    pub high: f64,
    pub rationale: String,
}

fn base_numerator(moon_house: u8) -> (f64, &'static str) {
    match moon_house {
        1..=3 => (28.0, "houses 1-3"),
        7..=9 => (21.0, "houses 7-9"),
        _ => (14.0, "houses 4-6 and 10-12"),
    }
}

/// Bodies moving faster than their mean motion from an angular or succedent house.
pub fn swift_bodies(chart: &HoraryChart) -> Vec<Body> {
    chart
        .placements()
        .iter()
        .filter(|p| p.speed.abs() > p.body.mean_daily_motion())
        .filter(|p| HouseStrength::of(p.house) != HouseStrength::Cadent)
        .map(|p| p.body)
        .collect()
}

pub fn estimate_timing(chart: &HoraryChart) -> TimingEstimate {
    let moon = chart.placement(Body::Moon);
    let (numerator, bucket) = base_numerator(moon.house);

    let mut speed = moon.speed.abs();
    let mut rationale = Vec::new();
    if speed <= f64::EPSILON {
        speed = Body::Moon.mean_daily_motion();
        rationale.push("Moon stationary; mean motion used".to_string());
    }

    let mut days = numerator / speed;
    rationale.push(format!(
        "Moon in house {} ({}): {} / {:.2}°/day = {:.2} days",
        moon.house, bucket, numerator, speed, days
    ));

    let swift = swift_bodies(chart);
    if !swift.is_empty() {
        days *= SWIFT_FACTOR;
        let names = swift.iter().map(|b| b.name()).collect::<Vec<_>>().join(", ");
        rationale.push(format!("swift: {}; window x{}", names, SWIFT_FACTOR));
    }

    TimingEstimate {
        days,
        low: (days - TIMING_BAND_DAYS).max(0.0),
        high: days + TIMING_BAND_DAYS,
        rationale: rationale.join("; "),
    }
}
