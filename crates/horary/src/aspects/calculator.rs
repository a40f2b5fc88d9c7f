use crate::aspects::types::{AspectKind, AspectRecord};
use crate::chart::HoraryChart;
use crate::western::{angular_separation, Body};

/// Aspect kinds in order of frequency (most common first)
const ASPECT_ORDER: &[AspectKind] = &[
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Trine,
    AspectKind::Square,
    AspectKind::Sextile,
];

/// Aspect calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct AspectCalculator;

impl AspectCalculator {
    /// Create a new aspect calculator
    pub fn new() -> Self {
        Self
    }

    /// All aspects among the seven bodies, each pair at most once.
    pub fn compute_aspects(&self, chart: &HoraryChart) -> Vec<AspectRecord> {
        let placements = chart.placements();
        let mut records = Vec::new();
        for i in 0..placements.len() {
            for j in (i + 1)..placements.len() {
                let p1 = &placements[i];
                let p2 = &placements[j];
                if let Some(record) = self.calculate_aspect(
                    p1.body,
                    p2.body,
                    p1.longitude,
                    p2.longitude,
                    p1.speed,
                    p2.speed,
                ) {
                    records.push(record);
                }
            }
        }
        records
    }

    /// Aspect between two bodies, if any falls within orb.
    pub fn calculate_aspect(
        &self,
        first: Body,
        second: Body,
        lon1: f64,
        lon2: f64,
        speed1: f64,
        speed2: f64,
    ) -> Option<AspectRecord> {
        let separation = angular_separation(lon1, lon2);

        for kind in ASPECT_ORDER {
            let orb = separation - kind.angle();
            if orb.abs() <= kind.orb() {
                return Some(AspectRecord {
                    first,
                    second,
                    kind: *kind,
                    separation,
                    orb,
                    applying: self.is_aspect_applying(lon1, lon2, speed1, speed2, kind.angle(), separation),
                });
            }
        }

        None
    }

    /// Applying when the separation is currently moving toward the exact
    /// angle. An exact aspect is neither applying nor separating.
    fn is_aspect_applying(
        &self,
        lon1: f64,
        lon2: f64,
        speed1: f64,
        speed2: f64,
        aspect_angle: f64,
        current_angle: f64,
    ) -> bool {
        let relative_speed = speed1 - speed2;

        // No relative motion, nothing closes
        if relative_speed.abs() < 0.01 {
            return false;
        }

        // Signed difference in (-180, 180]
        let mut signed_diff = lon1 - lon2;
        if signed_diff > 180.0 {
            signed_diff -= 360.0;
        } else if signed_diff <= -180.0 {
            signed_diff += 360.0;
        }

        let deviation = current_angle - aspect_angle;
        if deviation == 0.0 || signed_diff == 0.0 {
            return false;
        }

        // Separation is |signed_diff|, so it moves at relative_speed * sign(signed_diff)
        let separation_rate = relative_speed * signed_diff.signum();
        deviation * separation_rate < 0.0
    }
}
