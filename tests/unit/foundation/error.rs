use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GaugeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        GaugeError::color_stops("x")
            .to_string()
            .contains("color stop error:")
    );
    assert!(
        GaugeError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        GaugeError::scheduler("x")
            .to_string()
            .contains("scheduler error:")
    );
    assert!(
        GaugeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn invalid_range_names_both_bounds() {
    let msg = GaugeError::InvalidRange {
        min: 10.0,
        max: 10.0,
    }
    .to_string();
    assert!(msg.contains("max (10)"));
    assert!(msg.contains("min (10)"));
}

#[test]
fn config_errors_are_classified() {
    assert!(GaugeError::validation("x").is_config_error());
    assert!(GaugeError::color_stops("x").is_config_error());
    assert!(GaugeError::InvalidRange { min: 1.0, max: 0.0 }.is_config_error());
    assert!(!GaugeError::scheduler("x").is_config_error());
    assert!(!GaugeError::animation("x").is_config_error());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GaugeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
