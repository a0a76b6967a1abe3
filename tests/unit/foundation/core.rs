use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_frame_duration() {
    let fps = Fps::new(50, 1).unwrap();
    assert_eq!(fps.frame_duration_ms(), 20.0);
    assert_eq!(fps.frames_to_ms(25), 500.0);
    assert_eq!(fps.ms_to_frames_ceil(1000.0), 50);
    assert_eq!(fps.ms_to_frames_ceil(1001.0), 51);
    assert_eq!(fps.ms_to_frames_ceil(-5.0), 0);
}

#[test]
fn fps_rational_ntsc() {
    let fps = Fps::new(30_000, 1001).unwrap();
    assert!((fps.as_f64() - 29.97).abs() < 1e-2);
    assert!((fps.frame_duration_ms() - 33.366_666).abs() < 1e-4);
}

#[test]
fn fps_default_is_sixty() {
    assert_eq!(Fps::default(), Fps::new(60, 1).unwrap());
}
