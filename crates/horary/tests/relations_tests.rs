use chrono::{TimeZone, Utc};
use horary::aspects::AspectKind;
use horary::relations::{analyze, detect_hayz, hayz_between, mutual_reception, MoonContactMode, SolarCondition};
use horary::significators::resolve_significators;
use horary::{
    judge, Body, ChartCaster, GeoLocation, HoraryChart, JudgeOptions, Moment, PositionSnapshot, QuestionCategory,
    StaticEphemeris,
};

fn moment() -> Moment {
    Moment::new(
        Utc.with_ymd_and_hms(2023, 11, 2, 9, 0, 0).unwrap(),
        GeoLocation::new(51.5074, -0.1278),
    )
}

fn cast(snapshot: PositionSnapshot) -> HoraryChart {
    let eph = StaticEphemeris::new(snapshot);
    ChartCaster::new(&eph, &eph).cast(&moment()).unwrap()
}

/// Mars and Venus 5° from exact opposition; nothing else in contact.
fn hayz_snapshot() -> PositionSnapshot {
    PositionSnapshot::new(0.0)
        .with_body(Body::Sun, 100.0, 0.98)
        .with_body(Body::Moon, 140.0, 13.0)
        .with_body(Body::Mercury, 120.0, 1.0)
        .with_body(Body::Venus, 185.0, 1.2)
        .with_body(Body::Mars, 10.0, 0.5)
        .with_body(Body::Jupiter, 60.0, 0.1)
        .with_body(Body::Saturn, 260.0, 0.03)
}

#[test]
fn test_hayz_mars_venus_opposition() {
    let chart = cast(hayz_snapshot());
    let hayz = detect_hayz(&chart);

    assert!(hayz.present);
    assert_eq!(hayz.pairs.len(), 1);
    let pair = hayz.pairs[0];
    assert_eq!(pair.benefic, Body::Venus);
    assert_eq!(pair.malefic, Body::Mars);
    assert_eq!(pair.kind, AspectKind::Opposition);
    assert!((pair.separation - 175.0).abs() < 1e-9);
}

#[test]
fn test_hayz_produces_caution() {
    let eph = StaticEphemeris::new(hayz_snapshot());
    let judgment = judge(
        "Should I accept the business offer?",
        &moment(),
        &eph,
        &eph,
        &JudgeOptions::default(),
    )
    .unwrap();

    assert!(judgment.relations.hayz.present);
    assert!(judgment.cautions.iter().any(|c| c.starts_with("Hayz:")));
}

#[test]
fn test_hayz_is_order_independent() {
    let chart = cast(hayz_snapshot());
    let venus = chart.placement(Body::Venus);
    let mars = chart.placement(Body::Mars);
    assert_eq!(hayz_between(venus, mars), hayz_between(mars, venus));
}

#[test]
fn test_mercury_is_never_hayz() {
    let chart = cast(
        hayz_snapshot()
            .with_body(Body::Mercury, 12.0, 1.0)
            .with_body(Body::Venus, 150.0, 1.2),
    );
    let mercury = chart.placement(Body::Mercury);
    let mars = chart.placement(Body::Mars);
    assert!(hayz_between(mercury, mars).is_none());
    assert!(!detect_hayz(&chart).present);
}

#[test]
fn test_mutual_reception_is_symmetric() {
    // Mars in Taurus, Venus in Aries.
    let chart = cast(hayz_snapshot().with_body(Body::Mars, 45.0, 0.5).with_body(Body::Venus, 15.0, 1.2));

    let ab = mutual_reception(&chart, Body::Mars, Body::Venus);
    let ba = mutual_reception(&chart, Body::Venus, Body::Mars);
    assert!(ab.present);
    assert_eq!(ab, ba);
}

#[test]
fn test_one_way_reception_is_not_mutual() {
    // Mars in Taurus, Venus in Gemini.
    let chart = cast(hayz_snapshot().with_body(Body::Mars, 45.0, 0.5).with_body(Body::Venus, 80.0, 1.2));

    let result = mutual_reception(&chart, Body::Mars, Body::Venus);
    assert!(!result.present);
    assert!(result.rationale.contains("one-way"));
}

#[test]
fn test_moon_house_proxy() {
    // Moon at 140° with the ascendant at 0° is in the 5th.
    let chart = cast(hayz_snapshot());
    let significators = resolve_significators(&chart, QuestionCategory::Career).unwrap();
    let relations = analyze(&chart, &significators, MoonContactMode::HouseProxy);

    assert_eq!(relations.moon.house, 5);
    assert!(relations.moon.aspecting_benefic);
    assert!(!relations.moon.aspecting_malefic);
}

#[test]
fn test_moon_aspect_mode_reads_real_aspects() {
    // Moon applying to a trine of Saturn from the 5th.
    let chart = cast(hayz_snapshot().with_body(Body::Saturn, 257.0, 0.03).with_body(Body::Moon, 135.0, 13.0));
    let significators = resolve_significators(&chart, QuestionCategory::Career).unwrap();
    let relations = analyze(&chart, &significators, MoonContactMode::Aspects);

    assert_eq!(relations.moon.house, 5);
    assert!(relations.moon.aspecting_malefic);
    assert!(!relations.moon.aspecting_benefic);
}

#[test]
fn test_solar_proximity_bands() {
    let chart = cast(
        hayz_snapshot()
            .with_body(Body::Mercury, 100.05, 1.0)
            .with_body(Body::Moon, 104.0, 13.0),
    );
    let significators = resolve_significators(&chart, QuestionCategory::Career).unwrap();
    let relations = analyze(&chart, &significators, MoonContactMode::HouseProxy);

    assert_eq!(relations.solar_condition(Body::Mercury), Some(SolarCondition::Cazimi));
    assert_eq!(relations.solar_condition(Body::Moon), Some(SolarCondition::Combust));
    assert_eq!(relations.solar_condition(Body::Jupiter), Some(SolarCondition::Clear));
    assert_eq!(relations.solar_condition(Body::Sun), None);
}
