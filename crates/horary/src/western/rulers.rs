//! Sign rulers for horary judgment.
//!
//! Only the traditional rulerships apply; the outer planets play no part in
//! significator selection.

use crate::western::bodies::Body;
use crate::western::signs::Sign;

const DOMICILES: &[(Sign, Body)] = &[
    (Sign::Aries, Body::Mars),
    (Sign::Taurus, Body::Venus),
    (Sign::Gemini, Body::Mercury),
    (Sign::Cancer, Body::Moon),
    (Sign::Leo, Body::Sun),
    (Sign::Virgo, Body::Mercury),
    (Sign::Libra, Body::Venus),
    (Sign::Scorpio, Body::Mars),
    (Sign::Sagittarius, Body::Jupiter),
    (Sign::Capricorn, Body::Saturn),
    (Sign::Aquarius, Body::Saturn),
    (Sign::Pisces, Body::Jupiter),
];

/// Domicile ruler of a sign.
///
/// Returns `None` only if the table has no row for the sign, which callers
/// must treat as an error rather than guessing a ruler.
pub fn domicile_ruler(sign: Sign) -> Option<Body> {
    DOMICILES
        .iter()
        .find(|(s, _)| *s == sign)
        .map(|(_, ruler)| *ruler)
}

/// Domicile ruler of the sign containing a longitude.
pub fn domicile_ruler_from_longitude(longitude: f64) -> Option<Body> {
    domicile_ruler(Sign::from_longitude(longitude))
}

/// Whether `body` rules `sign` by domicile.
pub fn rules_sign(body: Body, sign: Sign) -> bool {
    domicile_ruler(sign) == Some(body)
}

/// Signs ruled by a body (one for the lights, two for the others).
pub fn domiciles_of(body: Body) -> impl Iterator<Item = Sign> {
    DOMICILES
        .iter()
        .filter(move |(_, ruler)| *ruler == body)
        .map(|(sign, _)| *sign)
}
