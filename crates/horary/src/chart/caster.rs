use crate::chart::types::{BodyPlacement, HoraryChart, HouseCusp};
use crate::ephemeris::{EphemerisError, EphemerisProvider, HouseProvider, Moment};
use crate::error::HoraryError;
use crate::western::{angular_separation, domicile_ruler, normalize_degrees, Body, DignityEvaluator, Sign};

/// Cusp 1 may differ from the ascendant by at most this much.
const CUSP_TOLERANCE: f64 = 1e-6;

/// House (1-12) of a longitude counted in 30° steps from the ascendant.
pub fn house_of(longitude: f64, ascendant: f64) -> u8 {
    let distance = normalize_degrees(longitude - ascendant);
    ((distance / 30.0) as u8 + 1).min(12)
}

/// Builds a [`HoraryChart`] from provider output.
pub struct ChartCaster<E, H> {
    ephemeris: E,
    houses: H,
    dignities: DignityEvaluator,
}

impl<E: EphemerisProvider, H: HouseProvider> ChartCaster<E, H> {
    pub fn new(ephemeris: E, houses: H) -> Self {
        Self {
            ephemeris,
            houses,
            dignities: DignityEvaluator::new(),
        }
    }

    pub fn cast(&self, moment: &Moment) -> Result<HoraryChart, HoraryError> {
        let location = moment.location;
        if !location.is_valid() {
            return Err(HoraryError::InvalidLocation {
                lat: location.lat,
                lon: location.lon,
            });
        }

        let unavailable = |source: EphemerisError| HoraryError::EphemerisUnavailable {
            at: moment.at,
            source,
        };

        let positions = self.ephemeris.positions(moment).map_err(unavailable)?;
        let frame = self
            .houses
            .equal_houses(moment, location.lat, location.lon)
            .map_err(unavailable)?;

        let ascendant = normalize_degrees(frame.ascendant);
        if angular_separation(frame.cusps[0], ascendant) > CUSP_TOLERANCE {
            return Err(unavailable(EphemerisError::HouseCalculationFailed {
                message: format!(
                    "cusp 1 at {:.6} does not match ascendant {:.6}",
                    frame.cusps[0], ascendant
                ),
            }));
        }

        let cusps: Vec<HouseCusp> = frame
            .cusps
            .iter()
            .enumerate()
            .map(|(i, lon)| {
                // Cusp 1 is pinned to the ascendant exactly
                let longitude = if i == 0 { ascendant } else { normalize_degrees(*lon) };
                let sign = Sign::from_longitude(longitude);
                HouseCusp {
                    house: i as u8 + 1,
                    longitude,
                    sign,
                    ruler: domicile_ruler(sign),
                }
            })
            .collect();

        let mut bodies = Vec::with_capacity(Body::ALL.len());
        for body in Body::ALL {
            let position = positions
                .get(body)
                .ok_or_else(|| unavailable(EphemerisError::MissingBody { body }))?;
            let longitude = normalize_degrees(position.lon);
            bodies.push(BodyPlacement {
                body,
                longitude,
                speed: position.speed_lon,
                sign: Sign::from_longitude(longitude),
                house: house_of(longitude, ascendant),
                dignity: self.dignities.evaluate(body, longitude),
            });
        }

        log::debug!(
            "Cast chart for {} at ({:.4}, {:.4}): ascendant {:.2} {}",
            moment.at,
            location.lat,
            location.lon,
            ascendant,
            Sign::from_longitude(ascendant)
        );

        Ok(HoraryChart::new(*moment, ascendant, cusps, bodies, positions.north_node))
    }
}
