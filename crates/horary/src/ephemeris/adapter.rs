use crate::ephemeris::provider::{EphemerisError, EphemerisProvider, HouseProvider};
use crate::ephemeris::types::{BodyPosition, BodyPositions, HouseFrame, Moment};
use crate::western::{normalize_degrees, Body};
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use swisseph::swe::{calc_ut, houses_ex, julday, set_ephe_path};
use swisseph::{AscMc, Cusp};

// Swiss Ephemeris body codes for the classical bodies
const BODY_CODES: &[(Body, u32)] = &[
    (Body::Sun, 0),
    (Body::Moon, 1),
    (Body::Mercury, 2),
    (Body::Venus, 3),
    (Body::Mars, 4),
    (Body::Jupiter, 5),
    (Body::Saturn, 6),
];

const TRUE_NODE: u32 = 11;

// FLG_SWIEPH | FLG_SPEED
const CALC_FLAGS: i32 = 2 | 256;

const EQUAL_HOUSES: u8 = b'E';

/// Years covered by the built-in Moshier fallback.
const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = -3000..=3000;

/// Swiss Ephemeris adapter implementation
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/usr/local/share/swisseph"))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        set_ephe_path(ephe_path_str(&path)?);
        log::debug!("Swiss Ephemeris data path: {}", path.display());
        Ok(Self { ephemeris_path: path })
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }

    /// Calculate position for a single body code
    fn calc_body(&self, label: &str, code: u32, jd: f64, at: DateTime<Utc>) -> Result<BodyPosition, EphemerisError> {
        let result = calc_ut(jd, code, CALC_FLAGS as u32).map_err(|e| EphemerisError::CalculationFailed {
            body: label.to_string(),
            datetime: at,
            message: format!("Swiss Ephemeris error: {}", e),
        })?;

        let out = result.out;
        let lon = normalize_degrees(out[0]);
        let speed_lon = out[3];
        if !lon.is_finite() || !speed_lon.is_finite() {
            return Err(EphemerisError::CalculationFailed {
                body: label.to_string(),
                datetime: at,
                message: "non-finite result".to_string(),
            });
        }

        Ok(BodyPosition { lon, speed_lon })
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn positions(&self, moment: &Moment) -> Result<BodyPositions, EphemerisError> {
        ensure_supported(moment.at)?;
        let jd = datetime_to_julian_day(moment.at);

        let mut bodies = BTreeMap::new();
        for (body, code) in BODY_CODES {
            let position = self.calc_body(body.name(), *code, jd, moment.at)?;
            bodies.insert(*body, position);
        }

        // The node is metadata; a failure here does not sink the chart
        let north_node = match self.calc_body("North Node", TRUE_NODE, jd, moment.at) {
            Ok(node) => Some(node.lon),
            Err(e) => {
                log::warn!("True node unavailable: {}", e);
                None
            }
        };

        Ok(BodyPositions { bodies, north_node })
    }
}

impl HouseProvider for SwissEphemerisAdapter {
    fn equal_houses(&self, moment: &Moment, lat: f64, lon: f64) -> Result<HouseFrame, EphemerisError> {
        ensure_supported(moment.at)?;
        let jd = datetime_to_julian_day(moment.at);

        let (c, a) = houses_ex(jd, CALC_FLAGS, lat, lon, EQUAL_HOUSES as i32);
        let cusps = Cusp::from_array(c);
        let ascmc = AscMc::from_array(a);

        let cusp_values = [
            cusps.first, cusps.second, cusps.third, cusps.fourth,
            cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
            cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
        ];
        if cusp_values.iter().any(|c| !c.is_finite()) || !ascmc.ascendant.is_finite() {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!("non-finite cusps at lat {lat}, lon {lon}"),
            });
        }

        let mut frame = HouseFrame {
            ascendant: normalize_degrees(ascmc.ascendant),
            cusps: [0.0; 12],
        };
        for (slot, cusp) in frame.cusps.iter_mut().zip(cusp_values) {
            *slot = normalize_degrees(cusp);
        }
        Ok(frame)
    }
}

/// The Swiss Ephemeris takes its data directory as UTF-8 text.
fn ephe_path_str(path: &Path) -> Result<&str, EphemerisError> {
    path.to_str().ok_or_else(|| EphemerisError::FileNotFound {
        path: path.display().to_string(),
        message: "Ephemeris path is not valid UTF-8.".to_string(),
    })
}

fn ensure_supported(at: DateTime<Utc>) -> Result<(), EphemerisError> {
    if SUPPORTED_YEARS.contains(&at.year()) {
        Ok(())
    } else {
        Err(EphemerisError::OutOfRange { datetime: at })
    }
}

/// Convert UTC datetime to Julian Day
fn datetime_to_julian_day(dt: DateTime<Utc>) -> f64 {
    let hour = dt.hour() as f64;
    let minute = dt.minute() as f64;
    let second = dt.second() as f64;
    let hour_decimal = hour + minute / 60.0 + second / 3600.0;

    // GREG_CAL = 1
    julday(dt.year(), dt.month() as i32, dt.day() as i32, hour_decimal, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_out_of_range_year_is_rejected() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(ensure_supported(at).is_ok());
        let far = Utc.with_ymd_and_hms(9000, 1, 1, 0, 0, 0).unwrap();
        assert!(matches!(ensure_supported(far), Err(EphemerisError::OutOfRange { .. })));
    }

    #[test]
    fn test_existing_path_is_kept() {
        let dir = env::temp_dir();
        let adapter = SwissEphemerisAdapter::new(Some(dir.clone())).unwrap();
        assert_eq!(adapter.ephemeris_path(), dir.as_path());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_is_reported() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"/tmp/swiss\xff"));
        assert!(matches!(ephe_path_str(path), Err(EphemerisError::FileNotFound { .. })));
        assert_eq!(ephe_path_str(Path::new("/usr/share/swisseph")).unwrap(), "/usr/share/swisseph");
    }

    #[test]
    fn test_missing_path_is_reported() {
        let result = SwissEphemerisAdapter::new(Some(PathBuf::from("/nonexistent/swisseph/data")));
        assert!(matches!(result, Err(EphemerisError::FileNotFound { .. })));
    }
}
