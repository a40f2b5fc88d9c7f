use chrono::{TimeZone, Utc};
use horary::timing::{estimate_timing, swift_bodies, SWIFT_FACTOR, TIMING_BAND_DAYS};
use horary::{Body, ChartCaster, GeoLocation, HoraryChart, Moment, PositionSnapshot, StaticEphemeris};

fn cast(snapshot: PositionSnapshot) -> HoraryChart {
    let eph = StaticEphemeris::new(snapshot);
    let moment = Moment::new(
        Utc.with_ymd_and_hms(2024, 1, 15, 18, 0, 0).unwrap(),
        GeoLocation::new(34.0522, -118.2437),
    );
    ChartCaster::new(&eph, &eph).cast(&moment).unwrap()
}

/// Moon in the 9th at 14.5°/day; every other body slower than its mean motion.
fn slow_snapshot() -> PositionSnapshot {
    PositionSnapshot::new(0.0)
        .with_body(Body::Sun, 295.0, 0.95)
        .with_body(Body::Moon, 250.0, 14.5)
        .with_body(Body::Mercury, 310.0, 0.5)
        .with_body(Body::Venus, 270.0, 0.5)
        .with_body(Body::Mars, 280.0, 0.3)
        .with_body(Body::Jupiter, 40.0, 0.05)
        .with_body(Body::Saturn, 330.0, 0.02)
}

#[test]
fn test_moon_in_ninth_house() {
    let chart = cast(slow_snapshot());
    assert_eq!(chart.placement(Body::Moon).house, 9);
    assert!(swift_bodies(&chart).is_empty());

    let timing = estimate_timing(&chart);
    assert!((timing.days - 21.0 / 14.5).abs() < 1e-9);
    assert!((timing.days - 1.448).abs() < 1e-3);
    assert_eq!(timing.low, 0.0);
    assert!((timing.high - (timing.days + TIMING_BAND_DAYS)).abs() < 1e-9);
}

#[test]
fn test_swift_body_shortens_window() {
    // Mars faster than its mean motion in the angular 10th.
    let chart = cast(slow_snapshot().with_body(Body::Mars, 280.0, 0.7));
    assert_eq!(swift_bodies(&chart), vec![Body::Mars]);

    let timing = estimate_timing(&chart);
    assert!((timing.days - 21.0 / 14.5 * SWIFT_FACTOR).abs() < 1e-9);
    assert!(timing.rationale.contains("Mars"));
}

#[test]
fn test_swift_body_in_cadent_house_is_ignored() {
    // Mars fast but in the cadent 12th.
    let chart = cast(slow_snapshot().with_body(Body::Mars, 350.0, 0.7));
    assert!(swift_bodies(&chart).is_empty());
}

#[test]
fn test_house_buckets() {
    // 2nd house: 28 / speed
    let timing = estimate_timing(&cast(slow_snapshot().with_body(Body::Moon, 40.0, 7.0)));
    assert!((timing.days - 4.0).abs() < 1e-9);

    // 5th house: 14 / speed
    let timing = estimate_timing(&cast(slow_snapshot().with_body(Body::Moon, 130.0, 7.0)));
    assert!((timing.days - 2.0).abs() < 1e-9);
}

#[test]
fn test_retrograde_speed_uses_magnitude() {
    let timing = estimate_timing(&cast(slow_snapshot().with_body(Body::Moon, 250.0, -14.5)));
    assert!((timing.days - 21.0 / 14.5).abs() < 1e-9);
}

#[test]
fn test_stationary_moon_falls_back_to_mean_motion() {
    let timing = estimate_timing(&cast(slow_snapshot().with_body(Body::Moon, 250.0, 0.0)));
    assert!((timing.days - 21.0 / Body::Moon.mean_daily_motion()).abs() < 1e-9);
    assert!(timing.days.is_finite());
    assert!(timing.rationale.contains("mean motion"));
}

#[test]
fn test_band_widens_slow_windows() {
    // Slow Moon in the 1st: 28 / 2 = 14 days.
    let timing = estimate_timing(&cast(slow_snapshot().with_body(Body::Moon, 10.0, 2.0)));
    assert!((timing.days - 14.0).abs() < 1e-9);
    assert!((timing.low - 7.0).abs() < 1e-9);
    assert!((timing.high - 21.0).abs() < 1e-9);
}
