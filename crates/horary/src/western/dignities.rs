//! Essential dignity for horary judgment.
//!
//! Each body receives exactly one [`DignityState`] per chart. When the sign
//! and degree qualify for several states the highest in precedence wins:
//! exaltation, domicile, triplicity, term, face, detriment, fall, and
//! finally peregrine.

use crate::western::bodies::Body;
use crate::western::rulers::{domicile_ruler, rules_sign};
use crate::western::signs::{degree_in_sign, Element, Sign};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DignityState {
    DomicileRuler,
    Exaltation,
    Triplicity,
    Term,
    Face,
    Detriment,
    Fall,
    Peregrine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Favorable,
    Unfavorable,
    Neutral,
}

impl DignityState {
    /// Precedence order used to pick a single state.
    pub const PRECEDENCE: [DignityState; 8] = [
        DignityState::Exaltation,
        DignityState::DomicileRuler,
        DignityState::Triplicity,
        DignityState::Term,
        DignityState::Face,
        DignityState::Detriment,
        DignityState::Fall,
        DignityState::Peregrine,
    ];

    pub fn score(self) -> i32 {
        match self {
            DignityState::DomicileRuler => 5,
            DignityState::Exaltation => 4,
            DignityState::Triplicity => 3,
            DignityState::Term => 2,
            DignityState::Face => 1,
            DignityState::Detriment => -1,
            DignityState::Fall => -2,
            DignityState::Peregrine => 0,
        }
    }

    pub fn polarity(self) -> Polarity {
        match self.score() {
            s if s > 0 => Polarity::Favorable,
            s if s < 0 => Polarity::Unfavorable,
            _ => Polarity::Neutral,
        }
    }

    /// Detriment or fall.
    pub fn is_debility(self) -> bool {
        matches!(self, DignityState::Detriment | DignityState::Fall)
    }

    pub fn label(self) -> &'static str {
        match self {
            DignityState::DomicileRuler => "domicile",
            DignityState::Exaltation => "exaltation",
            DignityState::Triplicity => "triplicity",
            DignityState::Term => "term",
            DignityState::Face => "face",
            DignityState::Detriment => "detriment",
            DignityState::Fall => "fall",
            DignityState::Peregrine => "peregrine",
        }
    }
}

const EXALTATIONS: &[(Body, Sign)] = &[
    (Body::Sun, Sign::Aries),
    (Body::Moon, Sign::Taurus),
    (Body::Mercury, Sign::Virgo),
    (Body::Venus, Sign::Pisces),
    (Body::Mars, Sign::Capricorn),
    (Body::Jupiter, Sign::Cancer),
    (Body::Saturn, Sign::Libra),
];

/// Day and night triplicity rulers per element.
const TRIPLICITIES: &[(Element, Body, Body)] = &[
    (Element::Fire, Body::Sun, Body::Jupiter),
    (Element::Earth, Body::Venus, Body::Moon),
    (Element::Air, Body::Saturn, Body::Mercury),
    (Element::Water, Body::Venus, Body::Mars),
];

/// Egyptian terms: (ruler, end degree exclusive) for each sign from Aries.
const TERMS: [[(Body, f64); 5]; 12] = [
    [(Body::Jupiter, 6.0), (Body::Venus, 12.0), (Body::Mercury, 20.0), (Body::Mars, 25.0), (Body::Saturn, 30.0)],
    [(Body::Venus, 8.0), (Body::Mercury, 14.0), (Body::Jupiter, 22.0), (Body::Saturn, 27.0), (Body::Mars, 30.0)],
    [(Body::Mercury, 6.0), (Body::Jupiter, 12.0), (Body::Venus, 17.0), (Body::Mars, 24.0), (Body::Saturn, 30.0)],
    [(Body::Mars, 7.0), (Body::Venus, 13.0), (Body::Mercury, 19.0), (Body::Jupiter, 26.0), (Body::Saturn, 30.0)],
    [(Body::Jupiter, 6.0), (Body::Venus, 11.0), (Body::Saturn, 18.0), (Body::Mercury, 24.0), (Body::Mars, 30.0)],
    [(Body::Mercury, 7.0), (Body::Venus, 17.0), (Body::Jupiter, 21.0), (Body::Mars, 28.0), (Body::Saturn, 30.0)],
    [(Body::Saturn, 6.0), (Body::Mercury, 14.0), (Body::Jupiter, 21.0), (Body::Venus, 28.0), (Body::Mars, 30.0)],
    [(Body::Mars, 7.0), (Body::Venus, 11.0), (Body::Mercury, 19.0), (Body::Jupiter, 24.0), (Body::Saturn, 30.0)],
    [(Body::Jupiter, 12.0), (Body::Venus, 17.0), (Body::Mercury, 21.0), (Body::Saturn, 26.0), (Body::Mars, 30.0)],
    [(Body::Mercury, 7.0), (Body::Jupiter, 14.0), (Body::Venus, 22.0), (Body::Saturn, 26.0), (Body::Mars, 30.0)],
    [(Body::Mercury, 7.0), (Body::Venus, 13.0), (Body::Jupiter, 20.0), (Body::Mars, 25.0), (Body::Saturn, 30.0)],
    [(Body::Venus, 12.0), (Body::Jupiter, 16.0), (Body::Mercury, 19.0), (Body::Mars, 28.0), (Body::Saturn, 30.0)],
];

/// Chaldean order; faces cycle through it starting with Mars at 0° Aries.
const CHALDEAN_ORDER: [Body; 7] = [
    Body::Mars,
    Body::Sun,
    Body::Venus,
    Body::Mercury,
    Body::Moon,
    Body::Saturn,
    Body::Jupiter,
];

/// Sign in which a body is exalted.
pub fn exaltation_sign(body: Body) -> Option<Sign> {
    EXALTATIONS
        .iter()
        .find(|(b, _)| *b == body)
        .map(|(_, sign)| *sign)
}

/// Day and night triplicity rulers of an element.
pub fn triplicity_rulers(element: Element) -> Option<(Body, Body)> {
    TRIPLICITIES
        .iter()
        .find(|(e, _, _)| *e == element)
        .map(|(_, day, night)| (*day, *night))
}

/// Term (bound) ruler at a longitude.
pub fn term_ruler(longitude: f64) -> Body {
    let sign = Sign::from_longitude(longitude);
    let degree = degree_in_sign(longitude);
    let terms = &TERMS[sign.index()];
    terms
        .iter()
        .find(|(_, end)| degree < *end)
        .map(|(ruler, _)| *ruler)
        .unwrap_or(terms[4].0)
}

/// Face (decan) ruler at a longitude.
pub fn face_ruler(longitude: f64) -> Body {
    let sign = Sign::from_longitude(longitude);
    let decan = ((degree_in_sign(longitude) / 10.0) as usize).min(2);
    CHALDEAN_ORDER[(sign.index() * 3 + decan) % CHALDEAN_ORDER.len()]
}

fn is_exalted(body: Body, sign: Sign) -> bool {
    exaltation_sign(body) == Some(sign)
}

fn in_triplicity(body: Body, sign: Sign) -> bool {
    triplicity_rulers(sign.element())
        .map(|(day, night)| day == body || night == body)
        .unwrap_or(false)
}

fn in_detriment(body: Body, sign: Sign) -> bool {
    rules_sign(body, sign.opposite())
}

fn in_fall(body: Body, sign: Sign) -> bool {
    is_exalted(body, sign.opposite())
}

/// Assigns essential dignity from the static tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct DignityEvaluator;

impl DignityEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Every state the body qualifies for at this longitude, in precedence
    /// order. Empty means peregrine.
    pub fn qualifying_states(&self, body: Body, longitude: f64) -> Vec<DignityState> {
        let sign = Sign::from_longitude(longitude);
        DignityState::PRECEDENCE
            .iter()
            .copied()
            .filter(|state| match state {
                DignityState::Exaltation => is_exalted(body, sign),
                DignityState::DomicileRuler => domicile_ruler(sign) == Some(body),
                DignityState::Triplicity => in_triplicity(body, sign),
                DignityState::Term => term_ruler(longitude) == body,
                DignityState::Face => face_ruler(longitude) == body,
                DignityState::Detriment => in_detriment(body, sign),
                DignityState::Fall => in_fall(body, sign),
                DignityState::Peregrine => false,
            })
            .collect()
    }

    /// The single dignity state assigned to a body at this longitude.
    pub fn evaluate(&self, body: Body, longitude: f64) -> DignityState {
        self.qualifying_states(body, longitude)
            .first()
            .copied()
            .unwrap_or(DignityState::Peregrine)
    }
}
