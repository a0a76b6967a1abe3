use super::*;

fn traffic_light() -> ColorStops {
    ColorStops::from_spec(&ColorSpec::thresholds([
        (80.0, "red"),
        (0.0, "green"),
        (50.0, "yellow"),
    ]))
    .unwrap()
}

#[test]
fn thresholds_are_sorted_numerically() {
    let table = traffic_light();
    let stops = table.stops().expect("threshold stops");
    let order: Vec<f64> = stops.iter().map(|s| s.threshold).collect();
    assert_eq!(order, vec![0.0, 50.0, 80.0]);
}

#[test]
fn lookup_uses_last_matching_threshold() {
    let stops = traffic_light();
    assert_eq!(stops.color_at(0.0), "green");
    assert_eq!(stops.color_at(49.9), "green");
    assert_eq!(stops.color_at(50.0), "yellow");
    assert_eq!(stops.color_at(79.0), "yellow");
    assert_eq!(stops.color_at(100.0), "red");
}

#[test]
fn lookup_below_first_threshold_uses_lowest_stop() {
    let stops = ColorStops::from_spec(&ColorSpec::thresholds([(20.0, "blue"), (60.0, "red")]))
        .unwrap();
    assert_eq!(stops.color_at(5.0), "blue");
}

#[test]
fn solid_color_ignores_query() {
    let stops = ColorStops::from_spec(&ColorSpec::solid("teal")).unwrap();
    assert!(stops.is_solid());
    assert!(stops.stops().is_none());
    assert_eq!(stops.color_at(-1e9), "teal");
    assert_eq!(stops.color_at(1e9), "teal");
}

#[test]
fn empty_map_is_rejected() {
    let err = ColorStops::from_spec(&ColorSpec::Thresholds(Default::default())).unwrap_err();
    assert!(matches!(err, GaugeError::ColorStops(_)));
    assert!(err.to_string().contains("empty"));
}

#[test]
fn non_numeric_key_is_rejected() {
    let mut map = std::collections::BTreeMap::new();
    map.insert("0".to_string(), "green".to_string());
    map.insert("half".to_string(), "yellow".to_string());
    let err = ColorStops::from_spec(&ColorSpec::Thresholds(map)).unwrap_err();
    assert!(err.to_string().contains("'half'"));
}

#[test]
fn empty_colors_are_rejected() {
    assert!(ColorStops::from_spec(&ColorSpec::solid("  ")).is_err());
    assert!(ColorStops::from_spec(&ColorSpec::thresholds([(0.0, "")])).is_err());
}

#[test]
fn direct_tables_are_validated_and_sorted() {
    let stop = |threshold: f64, color: &str| ColorStop {
        threshold,
        color: color.to_string(),
    };
    let table = ColorStops::thresholds([stop(60.0, "red"), stop(10.0, "blue")]).unwrap();
    assert_eq!(table.stops().unwrap()[0].color, "blue");
    assert_eq!(table.color_at(0.0), "blue");
    assert_eq!(table.color_at(70.0), "red");

    assert!(ColorStops::thresholds(Vec::new()).is_err());
    assert!(ColorStops::thresholds([stop(f64::NAN, "red")]).is_err());
    assert!(ColorStops::thresholds([stop(1.0, " ")]).is_err());
}

#[test]
fn fractions_follow_range() {
    let stops = traffic_light();
    let fr = stops.fractions(0.0, 200.0);
    assert_eq!(fr.color_at(0.1), "green");
    assert_eq!(fr.color_at(0.25), "yellow");
    assert_eq!(fr.color_at(0.4), "red");
    let inside: Vec<f64> = fr.boundaries_within(0.0, 0.3).collect();
    assert_eq!(inside, vec![0.25]);
}

#[test]
fn boundaries_exclude_endpoints() {
    let stops = traffic_light();
    let fr = stops.fractions(0.0, 100.0);
    let inside: Vec<f64> = fr.boundaries_within(0.0, 0.8).collect();
    assert_eq!(inside, vec![0.5]);
}
