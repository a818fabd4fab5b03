use chrono::{NaiveDate, NaiveTime};
use synastry::aspects::classify;
use synastry::ephemeris::{house_of, EngineSettings, GeoLocation, HouseSystem, Point, ZodiacSign};
use synastry::{ChartBuilder, ChartError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn fresno() -> GeoLocation {
    GeoLocation::new(36.7378, -119.7871).unwrap()
}

#[test]
fn test_chart_has_sixteen_positions_with_houses() {
    let chart = ChartBuilder::default()
        .build(date(1990, 6, 15), time(14, 30), fresno())
        .unwrap();

    assert_eq!(chart.positions().len(), 16);
    for (pos, point) in chart.positions().iter().zip(Point::ALL) {
        assert_eq!(pos.point, point);
        assert!((0.0..360.0).contains(&pos.lon));
        assert!((1..=12).contains(&pos.house));
        assert_eq!(pos.house, house_of(pos.lon, &chart.houses().cusps));
        assert_eq!(pos.sign, ZodiacSign::from_longitude(pos.lon));
    }
    assert_eq!(chart.house(Point::Ascendant), 1);
    assert_eq!(chart.house(Point::Midheaven), 10);
    assert_eq!(chart.longitude(Point::Ascendant), chart.houses().ascendant);
    assert_eq!(chart.longitude(Point::Midheaven), chart.houses().midheaven);
}

#[test]
fn test_chart_aspects_cover_primary_pairs_only() {
    let chart = ChartBuilder::default()
        .build(date(1984, 3, 2), time(5, 10), fresno())
        .unwrap();

    let mut expected = 0;
    for i in 0..Point::PRIMARY.len() {
        for j in (i + 1)..Point::PRIMARY.len() {
            let a = chart.longitude(Point::PRIMARY[i]);
            let b = chart.longitude(Point::PRIMARY[j]);
            if classify(a, b).is_match() {
                expected += 1;
            }
        }
    }
    assert_eq!(chart.aspects().len(), expected);
    assert!(chart.aspects().len() <= 66);
    for pair in chart.aspects() {
        assert!(pair.from.is_primary() && pair.to.is_primary());
        assert!(pair.aspect.is_match());
    }
}

#[test]
fn test_chart_records_birth_data() {
    let chart = ChartBuilder::default()
        .build(date(2000, 1, 1), time(12, 0), fresno())
        .unwrap();
    assert_eq!(chart.julian_day(), 2451545.0);
    assert_eq!(chart.birth().location, fresno());
    assert_eq!(chart.birth().date, date(2000, 1, 1));
    // calibration epoch and latitude
    assert!((chart.longitude(Point::Fortuna) - 62.0).abs() < 1e-9);
    assert!((chart.longitude(Point::Vertex) - 207.0).abs() < 1e-9);
}

#[test]
fn test_same_input_same_chart() {
    let builder = ChartBuilder::new(EngineSettings {
        house_system: HouseSystem::Equal,
        ..EngineSettings::default()
    });
    let a = builder.build(date(1975, 9, 9), time(23, 59), fresno()).unwrap();
    let b = builder.build(date(1975, 9, 9), time(23, 59), fresno()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.houses().system, HouseSystem::Equal);
}

#[test]
fn test_invalid_location_rejected() {
    let err = ChartBuilder::default()
        .build(date(1990, 1, 1), time(0, 0), GeoLocation { lat: 120.0, lon: 0.0 })
        .unwrap_err();
    assert!(matches!(err, ChartError::InvalidCoordinate { .. }));
}

#[test]
fn test_chart_serializes_to_json() {
    let chart = ChartBuilder::default()
        .build(date(1990, 6, 15), time(14, 30), fresno())
        .unwrap();
    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["positions"].as_array().unwrap().len(), 16);
    assert_eq!(json["positions"][14]["point"], "asc");
    assert_eq!(json["houses"]["system"], "placidus");
}
