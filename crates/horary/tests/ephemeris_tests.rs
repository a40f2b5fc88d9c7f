use chrono::{TimeZone, Utc};
use horary::{
    Body, EphemerisProvider, GeoLocation, HoraryEngine, HouseProvider, JudgeOptions, Moment, SwissEphemerisAdapter,
};

fn moment() -> Moment {
    Moment::new(
        Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap(),
        GeoLocation::new(40.7128, -74.0060),
    )
}

#[test]
#[ignore] // Requires Swiss Ephemeris files
fn test_positions_at_j2000() {
    let adapter = SwissEphemerisAdapter::new(None).unwrap();
    let positions = adapter.positions(&moment()).unwrap();

    assert_eq!(positions.bodies.len(), 7);
    // Sun near 10° Capricorn at J2000
    let sun = positions.get(Body::Sun).unwrap();
    assert!((sun.lon - 280.4).abs() < 0.5);
    assert!(sun.speed_lon > 0.9 && sun.speed_lon < 1.1);
    assert!(positions.north_node.is_some());
}

#[test]
#[ignore] // Requires Swiss Ephemeris files
fn test_equal_houses() {
    let adapter = SwissEphemerisAdapter::new(None).unwrap();
    let frame = adapter.equal_houses(&moment(), 40.7128, -74.0060).unwrap();

    assert_eq!(frame.cusps[0], frame.ascendant);
    for i in 1..12 {
        let step = (frame.cusps[i] - frame.cusps[i - 1]).rem_euclid(360.0);
        assert!((step - 30.0).abs() < 1e-6);
    }
}

#[test]
#[ignore] // Requires Swiss Ephemeris files
fn test_judge_live_chart() {
    let adapter = SwissEphemerisAdapter::new(None).unwrap();
    let engine = HoraryEngine::new(adapter, JudgeOptions::default());
    let judgment = engine.judge("Will I get the job?", &moment()).unwrap();

    assert!(!judgment.verdict.factors.is_empty());
    assert!(judgment.timing.days > 0.0);
}

#[test]
#[ignore] // Requires Swiss Ephemeris files under SWISS_EPHEMERIS_PATH
fn test_explicit_data_path_is_used() {
    let dir = std::path::PathBuf::from(std::env::var("SWISS_EPHEMERIS_PATH").unwrap());
    let adapter = SwissEphemerisAdapter::new(Some(dir.clone())).unwrap();
    assert_eq!(adapter.ephemeris_path(), dir.as_path());

    let positions = adapter.positions(&moment()).unwrap();
    let moon = positions.get(Body::Moon).unwrap();
    assert!(moon.speed_lon > 11.0 && moon.speed_lon < 16.0);
}
