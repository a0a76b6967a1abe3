//! Outline helpers for rendering backends that draw arcs as paths instead of dashed circles.

use kurbo::Shape as _;

use crate::foundation::core::{BezPath, Point, Vec2};
use crate::foundation::math::compass_to_radians;
use crate::geometry::resolve::{ArcSegment, GaugeGeometry, SegmentKind};

/// Default flattening tolerance, in box units.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Point on a circle at a compass angle (degrees, 0 at 12 o'clock, clockwise).
pub fn point_at(center: Point, radius: f64, compass_deg: f64) -> Point {
    center + Vec2::from_angle(compass_to_radians(compass_deg)) * radius
}

impl ArcSegment {
    /// The segment's centerline as a kurbo arc.
    pub fn to_arc(&self, center: Point, radius: f64) -> kurbo::Arc {
        kurbo::Arc {
            center,
            radii: Vec2::new(radius, radius),
            start_angle: compass_to_radians(self.start_angle),
            sweep_angle: (self.end_angle - self.start_angle).to_radians(),
            x_rotation: 0.0,
        }
    }

    /// The segment's centerline as cubic Béziers, to be stroked with the gauge stroke width.
    pub fn to_path(&self, center: Point, radius: f64, tolerance: f64) -> BezPath {
        self.to_arc(center, radius).to_path(tolerance)
    }
}

/// SVG-ready outline of one segment.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentPath {
    /// Track or fill.
    pub kind: SegmentKind,
    /// Paint order.
    pub order: u32,
    /// CSS stroke color.
    pub color: String,
    /// Stroke width.
    pub stroke_width: f64,
    /// SVG path data.
    pub d: String,
}

impl GaugeGeometry {
    /// Centerline paths for every non-empty segment, in paint order.
    pub fn segment_paths(&self, tolerance: f64) -> Vec<SegmentPath> {
        self.segments
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| SegmentPath {
                kind: s.kind,
                order: s.order,
                color: s.color.clone(),
                stroke_width: self.stroke_width,
                d: s.to_path(self.center, self.track_radius, tolerance).to_svg(),
            })
            .collect()
    }

    /// Where the filled arc currently ends, e.g. for a knob or cap marker.
    pub fn value_point(&self) -> Option<Point> {
        self.fill_segments()
            .last()
            .map(|s| point_at(self.center, self.track_radius, s.end_angle))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path.rs"]
mod tests;
