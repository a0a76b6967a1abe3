use kurbo::PathEl;

use super::*;
use crate::config::model::{GaugeConfig, SizePreset};
use crate::geometry::resolve::resolve;

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-6
}

fn end_point(path: &BezPath) -> Point {
    match path.elements().last() {
        Some(PathEl::CurveTo(_, _, p)) | Some(PathEl::LineTo(p)) | Some(PathEl::MoveTo(p)) => *p,
        other => panic!("unexpected final element {other:?}"),
    }
}

#[test]
fn compass_points_on_unit_circle() {
    let c = Point::new(50.0, 50.0);
    assert!(close(point_at(c, 10.0, 0.0), Point::new(50.0, 40.0)));
    assert!(close(point_at(c, 10.0, 90.0), Point::new(60.0, 50.0)));
    assert!(close(point_at(c, 10.0, 180.0), Point::new(50.0, 60.0)));
    assert!(close(point_at(c, 10.0, 270.0), Point::new(40.0, 50.0)));
    assert!(close(point_at(c, 10.0, 450.0), Point::new(60.0, 50.0)));
}

#[test]
fn segment_path_starts_and_ends_on_its_angles() {
    let g = resolve(&GaugeConfig {
        size: SizePreset::Lg.into(),
        ..GaugeConfig::new(40.0)
    })
    .geometry;
    for seg in &g.segments {
        let path = seg.to_path(g.center, g.track_radius, DEFAULT_TOLERANCE);
        let Some(PathEl::MoveTo(start)) = path.elements().first().copied() else {
            panic!("path must start with MoveTo");
        };
        assert!(close(start, point_at(g.center, g.track_radius, seg.start_angle)));
        assert!(close(
            end_point(&path),
            point_at(g.center, g.track_radius, seg.end_angle)
        ));
    }
}

#[test]
fn descending_arc_sweeps_backwards() {
    let seg = ArcSegment {
        kind: SegmentKind::Fill,
        start_angle: 170.0,
        end_angle: 80.0,
        start_fraction: 0.0,
        end_fraction: 0.25,
        color: "red".into(),
        order: 1,
    };
    let arc = seg.to_arc(Point::ORIGIN, 1.0);
    assert!((arc.sweep_angle + 90f64.to_radians()).abs() < 1e-12);
}

#[test]
fn segment_paths_skip_empty_segments() {
    let g = resolve(&GaugeConfig::new(0.0)).geometry;
    let paths = g.segment_paths(DEFAULT_TOLERANCE);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].kind, SegmentKind::Track);
    assert!(paths[0].d.starts_with('M'));
    assert_eq!(paths[0].stroke_width, g.stroke_width);
}

#[test]
fn value_point_tracks_fill_end() {
    let g = resolve(&GaugeConfig {
        gap_percent: 0.0,
        ..GaugeConfig::new(25.0)
    })
    .geometry;
    // 25% clockwise from 6 o'clock lands on 9 o'clock.
    let expected = Point::new(g.center.x - g.track_radius, g.center.y);
    assert!(close(g.value_point().unwrap(), expected));
}
