use super::*;
use crate::animation::driver::AnimationOpts;
use crate::animation::ease::Ease;
use crate::animation::scheduler::UnsupportedScheduler;

fn animated(value: f64) -> GaugeConfig {
    GaugeConfig {
        show_animation: true,
        show_value: true,
        animation: AnimationOpts {
            duration_ms: 1000.0,
            easing: Ease::Linear,
            ..AnimationOpts::default()
        },
        ..GaugeConfig::new(value)
    }
}

#[test]
fn static_gauge_shows_configured_value() {
    let s = GaugeSession::new(GaugeConfig::new(30.0), ManualScheduler::new());
    assert_eq!(s.displayed_value(), 30.0);
    assert!(!s.is_animating());
    assert_eq!(s.resolve().geometry, resolve(s.config()).geometry);
}

#[test]
fn animated_gauge_replays_on_creation() {
    let mut s = GaugeSession::new(animated(75.0), ManualScheduler::new());
    assert!(s.is_animating());
    assert_eq!(s.resolve().geometry.fraction, 0.0);

    s.pump(500.0);
    let mid = s.resolve().geometry;
    assert!((mid.fraction - 0.375).abs() < 1e-9);
    assert_eq!(mid.value_label.text, "38");

    s.pump(1000.0);
    assert!(!s.is_animating());
    assert_eq!(s.resolve().geometry, resolve(s.config()).geometry);
}

#[test]
fn set_value_while_idle_updates_geometry() {
    let mut s = GaugeSession::new(GaugeConfig::new(10.0), ManualScheduler::new());
    s.set_value(90.0);
    assert_eq!(s.config().value, 90.0);
    assert_eq!(s.resolve().geometry.fraction, 0.9);
}

#[test]
fn disabling_animation_snaps_to_value() {
    let mut s = GaugeSession::new(animated(60.0), ManualScheduler::new());
    s.pump(250.0);
    s.set_show_animation(false);
    assert!(!s.is_animating());
    assert_eq!(s.displayed_value(), 60.0);
    assert!(!s.driver().scheduler().has_pending());
}

#[test]
fn set_config_defers_value_during_run() {
    let mut s = GaugeSession::new(animated(50.0), ManualScheduler::new());
    s.pump(500.0);
    s.set_config(animated(20.0));
    assert_eq!(s.driver().target_value(), 20.0);
    s.pump(1000.0);
    assert_eq!(s.displayed_value(), 50.0);

    s.replay();
    s.pump(2000.0);
    assert_eq!(s.displayed_value(), 20.0);
}

#[test]
fn set_config_toggling_animation_off_snaps() {
    let mut s = GaugeSession::new(animated(50.0), ManualScheduler::new());
    s.pump(100.0);
    let still = GaugeConfig {
        show_animation: false,
        ..animated(70.0)
    };
    s.set_config(still);
    assert_eq!(s.displayed_value(), 70.0);
    assert!(!s.is_animating());
}

#[test]
fn set_config_updates_replay_options() {
    let mut s = GaugeSession::new(GaugeConfig::new(40.0), ManualScheduler::new());
    let mut cfg = GaugeConfig::new(40.0);
    cfg.animation.duration_ms = 200.0;
    s.set_config(cfg);
    s.replay();
    s.pump(100.0);
    assert!((s.displayed_value() - 20.0).abs() < 1e-9);
}

#[test]
fn stop_freezes_geometry() {
    let mut s = GaugeSession::new(animated(100.0), ManualScheduler::new());
    s.pump(400.0);
    s.stop();
    let frozen = s.resolve().geometry;
    assert_eq!(s.pump(900.0), 0);
    assert_eq!(s.resolve().geometry, frozen);
}

#[test]
fn unsupported_host_renders_final_value() {
    let s = GaugeSession::new(animated(80.0), UnsupportedScheduler);
    assert!(!s.is_animating());
    assert_eq!(s.displayed_value(), 80.0);
}
