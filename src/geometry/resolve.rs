use smallvec::{SmallVec, smallvec};

use crate::config::model::{
    ColorSpec, DEFAULT_GAP_PERCENT, DEFAULT_PRIMARY, DEFAULT_SECONDARY, GaugeConfig, GaugeSize,
    REFERENCE_BOX, SizePreset, Variant,
};
use crate::config::stops::ColorStops;
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{GaugeError, GaugeResult};
use crate::foundation::math::{normalize, round_to};

/// Degrees in a full turn.
pub const FULL_CIRCLE: f64 = 360.0;

/// Angle at the center of the gap (6 o'clock).
const GAP_CENTER: f64 = 180.0;

/// Whether a segment belongs to the filled value arc or to the background track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Unfilled remainder of the arc.
    Track,
    /// Part of the filled value arc.
    Fill,
}

/// One contiguous, single-colored slice of the gauge ring.
///
/// Angles are in degrees, 0 at 12 o'clock, increasing clockwise. They are unwrapped, so a
/// segment may end past 360 and descending segments have `end_angle < start_angle`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcSegment {
    /// Track or fill.
    pub kind: SegmentKind,
    /// Compass angle where the stroke starts.
    pub start_angle: f64,
    /// Compass angle where the stroke ends.
    pub end_angle: f64,
    /// Start position as a fraction of the available arc.
    pub start_fraction: f64,
    /// End position as a fraction of the available arc.
    pub end_fraction: f64,
    /// CSS stroke color.
    pub color: String,
    /// Paint order; the track is 0, fill segments count up from 1.
    pub order: u32,
}

impl ArcSegment {
    /// Angular length in degrees.
    pub fn span(&self) -> f64 {
        (self.end_angle - self.start_angle).abs()
    }

    /// Zero-length segment.
    pub fn is_empty(&self) -> bool {
        self.span() == 0.0
    }
}

/// Segment list of one gauge; rarely more than a handful.
pub type Segments = SmallVec<[ArcSegment; 4]>;

/// Drawing box handed to the rendering backend.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    /// Box width in pixels or reference units.
    pub width: f64,
    /// Box height; always equal to `width`.
    pub height: f64,
    /// Coordinate system of the segments.
    pub view_box: Rect,
    /// `width`/`height` attribute, passed through verbatim for CSS sizes.
    pub size_attr: String,
}

/// Optional numeric label drawn in the middle of the ring.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueLabel {
    /// Clamped value rounded to the label precision.
    pub value: f64,
    /// Formatted `value`.
    pub text: String,
    /// Anchor point; the ring center.
    pub position: Point,
    /// Whether the label should be drawn.
    pub visible: bool,
}

/// Render-ready gauge geometry.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeGeometry {
    /// Segments in paint order.
    pub segments: Segments,
    /// Center label.
    pub value_label: ValueLabel,
    /// Ring center.
    pub center: Point,
    /// Radius of the stroke centerline.
    pub track_radius: f64,
    /// Ring thickness.
    pub stroke_width: f64,
    /// Angular size of the gap in degrees.
    pub gap_degrees: f64,
    /// Filled share of the available arc, in `[0, 1]`.
    pub fraction: f64,
    /// Fill direction.
    pub variant: Variant,
    /// Drawing box.
    pub viewport: Viewport,
}

impl GaugeGeometry {
    /// Fill segments in paint order.
    pub fn fill_segments(&self) -> impl Iterator<Item = &ArcSegment> {
        self.segments.iter().filter(|s| s.kind == SegmentKind::Fill)
    }

    /// The track segment, absent when the gauge is full.
    pub fn track(&self) -> Option<&ArcSegment> {
        self.segments.iter().find(|s| s.kind == SegmentKind::Track)
    }

    /// Total filled angle in degrees.
    pub fn fill_span(&self) -> f64 {
        self.fill_segments().map(ArcSegment::span).sum()
    }

    /// Track angle in degrees.
    pub fn track_span(&self) -> f64 {
        self.track().map_or(0.0, ArcSegment::span)
    }

    /// `true` when the range was unusable and no arc could be laid out.
    pub fn is_degenerate(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Geometry plus every configuration problem found while producing it.
///
/// The geometry is always renderable; issues describe which fallbacks were applied.
#[derive(Debug, serde::Serialize)]
pub struct Resolution {
    /// Geometry after fallbacks.
    pub geometry: GaugeGeometry,
    /// Problems found, in detection order.
    #[serde(serialize_with = "issues_as_strings")]
    pub issues: Vec<GaugeError>,
}

impl Resolution {
    /// No fallback was needed.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Strict view: the geometry when the configuration was clean, else the first issue.
    pub fn into_result(self) -> GaugeResult<GaugeGeometry> {
        match self.issues.into_iter().next() {
            None => Ok(self.geometry),
            Some(err) => Err(err),
        }
    }
}

fn issues_as_strings<S: serde::Serializer>(
    issues: &[GaugeError],
    s: S,
) -> Result<S::Ok, S::Error> {
    s.collect_seq(issues.iter().map(ToString::to_string))
}

/// Resolve the geometry for `config.value`.
pub fn resolve(config: &GaugeConfig) -> Resolution {
    resolve_at(config, config.value)
}

/// Resolve the geometry for `config` as if it showed `value`.
///
/// This is the per-frame entry point: animation drivers pass their displayed value here while the
/// configured value is their target.
pub fn resolve_at(config: &GaugeConfig, value: f64) -> Resolution {
    let mut issues = Vec::new();

    let (diameter, size_attr) = resolve_size(&config.size, &mut issues);
    let stroke_width = resolve_stroke_width(config.stroke_width, diameter, &mut issues);
    let gap_percent = resolve_gap_percent(config.gap_percent, &mut issues);
    let primary = resolve_colors(&config.primary, DEFAULT_PRIMARY, "primary", &mut issues);
    let secondary = resolve_colors(
        &config.secondary,
        DEFAULT_SECONDARY,
        "secondary",
        &mut issues,
    );

    let center = Point::new(diameter / 2.0, diameter / 2.0);
    let viewport = Viewport {
        width: diameter,
        height: diameter,
        view_box: Rect::new(0.0, 0.0, diameter, diameter),
        size_attr,
    };
    let gap_degrees = gap_percent * FULL_CIRCLE / 100.0;

    let range_ok = config.min.is_finite() && config.max.is_finite() && config.max > config.min;
    if !range_ok {
        issues.push(GaugeError::InvalidRange {
            min: config.min,
            max: config.max,
        });
    }
    let value = if value.is_nan() {
        issues.push(GaugeError::validation("value is NaN; showing min"));
        if config.min.is_finite() {
            config.min
        } else {
            0.0
        }
    } else {
        value
    };

    for issue in &issues {
        tracing::debug!(%issue, "gauge configuration degraded");
    }

    let (segments, fraction, shown) = if range_ok {
        let fraction = normalize(value, config.min, config.max);
        let arc = ArcLayout::new(gap_degrees, config.variant);
        let segments = layout_segments(
            &arc,
            fraction,
            &primary,
            &secondary,
            config.min,
            config.max,
        );
        (segments, fraction, value.clamp(config.min, config.max))
    } else {
        let shown = if value.is_finite() { value } else { 0.0 };
        (Segments::new(), 0.0, shown)
    };

    let shown = round_to(shown, config.label_precision);
    let value_label = ValueLabel {
        value: shown,
        text: format!("{:.*}", usize::from(config.label_precision), shown),
        position: center,
        visible: config.show_value,
    };

    Resolution {
        geometry: GaugeGeometry {
            segments,
            value_label,
            center,
            track_radius: diameter / 2.0 - stroke_width / 2.0,
            stroke_width,
            gap_degrees,
            fraction,
            variant: config.variant,
            viewport,
        },
        issues,
    }
}

/// Strict resolution: any configuration issue is an error.
pub fn try_resolve(config: &GaugeConfig) -> GaugeResult<GaugeGeometry> {
    resolve(config).into_result()
}

/// Maps fractions of the available arc onto compass angles.
struct ArcLayout {
    origin: f64,
    available: f64,
    direction: f64,
}

impl ArcLayout {
    fn new(gap_degrees: f64, variant: Variant) -> Self {
        let (origin, direction) = match variant {
            Variant::Ascending => (GAP_CENTER + gap_degrees / 2.0, 1.0),
            Variant::Descending => (GAP_CENTER - gap_degrees / 2.0, -1.0),
        };
        Self {
            origin,
            available: FULL_CIRCLE - gap_degrees,
            direction,
        }
    }

    fn angle(&self, fraction: f64) -> f64 {
        self.origin + self.direction * fraction * self.available
    }

    fn segment(
        &self,
        kind: SegmentKind,
        from: f64,
        to: f64,
        color: &str,
        order: u32,
    ) -> ArcSegment {
        ArcSegment {
            kind,
            start_angle: self.angle(from),
            end_angle: self.angle(to),
            start_fraction: from,
            end_fraction: to,
            color: color.to_string(),
            order,
        }
    }
}

fn layout_segments(
    arc: &ArcLayout,
    fraction: f64,
    primary: &ColorStops,
    secondary: &ColorStops,
    min: f64,
    max: f64,
) -> Segments {
    let primary = primary.fractions(min, max);
    let secondary = secondary.fractions(min, max);

    let mut segments: Segments = smallvec![];
    if fraction < 1.0 {
        segments.push(arc.segment(
            SegmentKind::Track,
            fraction,
            1.0,
            secondary.color_at(fraction),
            0,
        ));
    }

    let mut from = 0.0;
    let mut order = 1;
    for boundary in primary.boundaries_within(0.0, fraction) {
        segments.push(arc.segment(
            SegmentKind::Fill,
            from,
            boundary,
            primary.color_at(from),
            order,
        ));
        from = boundary;
        order += 1;
    }
    segments.push(arc.segment(
        SegmentKind::Fill,
        from,
        fraction,
        primary.color_at(from),
        order,
    ));
    segments
}

fn resolve_size(size: &GaugeSize, issues: &mut Vec<GaugeError>) -> (f64, String) {
    match size.pixels() {
        Some(px) if px.is_finite() && px > 0.0 => (px, size.attr()),
        Some(px) => {
            issues.push(GaugeError::validation(format!(
                "size must be a positive number of pixels, got {px}; using md"
            )));
            let md = GaugeSize::Preset(SizePreset::Md);
            (SizePreset::Md.diameter(), md.attr())
        }
        None => (REFERENCE_BOX, size.attr()),
    }
}

fn resolve_stroke_width(width: Option<f64>, diameter: f64, issues: &mut Vec<GaugeError>) -> f64 {
    let fallback = diameter / 10.0;
    match width {
        None => fallback,
        Some(w) if w.is_finite() && w > 0.0 && w < diameter => w,
        Some(w) => {
            issues.push(GaugeError::validation(format!(
                "strokeWidth must be in (0, {diameter}), got {w}; using {fallback}"
            )));
            fallback
        }
    }
}

fn resolve_gap_percent(gap: f64, issues: &mut Vec<GaugeError>) -> f64 {
    if gap.is_finite() && (0.0..100.0).contains(&gap) {
        gap
    } else {
        issues.push(GaugeError::validation(format!(
            "gapPercent must be in [0, 100), got {gap}; using {DEFAULT_GAP_PERCENT}"
        )));
        DEFAULT_GAP_PERCENT
    }
}

fn resolve_colors(
    spec: &ColorSpec,
    fallback: &str,
    which: &str,
    issues: &mut Vec<GaugeError>,
) -> ColorStops {
    ColorStops::from_spec(spec).unwrap_or_else(|err| {
        let reason = match err {
            GaugeError::ColorStops(msg) => msg,
            other => other.to_string(),
        };
        issues.push(GaugeError::color_stops(format!(
            "{which}: {reason}; using {fallback}"
        )));
        ColorStops::solid(fallback)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/resolve.rs"]
mod tests;
