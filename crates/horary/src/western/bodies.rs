//! The seven classical bodies used for judgment.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// Coarse benefic/malefic classification used by hayz detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyNature {
    Benefic,
    Malefic,
    Neutral,
}

impl Body {
    pub const ALL: [Body; 7] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
    ];

    /// Position of this body in [`Body::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
        }
    }

    pub fn nature(self) -> BodyNature {
        match self {
            Body::Sun | Body::Moon | Body::Jupiter | Body::Venus => BodyNature::Benefic,
            Body::Mars | Body::Saturn => BodyNature::Malefic,
            Body::Mercury => BodyNature::Neutral,
        }
    }

    /// Mean daily motion in degrees per day.
    ///
    /// Mercury and Venus travel with the Sun on average, so they share its
    /// mean motion.
    pub fn mean_daily_motion(self) -> f64 {
        match self {
            Body::Sun | Body::Mercury | Body::Venus => 0.9856,
            Body::Moon => 13.1764,
            Body::Mars => 0.5240,
            Body::Jupiter => 0.0831,
            Body::Saturn => 0.0335,
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
