use crate::western::Body;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five Ptolemaic aspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectKind {
    /// Exact angle for this aspect (0, 60, 90, 120, 180)
    pub fn angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Opposition => 180.0,
        }
    }

    /// Allowed deviation from the exact angle
    pub fn orb(self) -> f64 {
        match self {
            AspectKind::Sextile => 6.0,
            _ => 8.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Opposition => "opposition",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Aspect between an unordered pair of bodies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectRecord {
    pub first: Body,
    pub second: Body,
    pub kind: AspectKind,
    /// Angular separation in degrees (0-180)
    pub separation: f64,
    /// Separation minus the exact angle; negative inside the exact angle
    pub orb: f64,
    /// Relative motion is closing the orb
    pub applying: bool,
}

impl AspectRecord {
    pub fn involves(&self, body: Body) -> bool {
        self.first == body || self.second == body
    }

    /// Whether this aspect joins exactly these two bodies, in either order.
    pub fn joins(&self, a: Body, b: Body) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }

    /// The other body, if `body` takes part.
    pub fn other(&self, body: Body) -> Option<Body> {
        if self.first == body {
            Some(self.second)
        } else if self.second == body {
            Some(self.first)
        } else {
            None
        }
    }
}

impl fmt::Display for AspectRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} (orb {:+.2}°, {})",
            self.first,
            self.kind,
            self.second,
            self.orb,
            if self.applying { "applying" } else { "separating" }
        )
    }
}
