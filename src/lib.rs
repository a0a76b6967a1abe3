//! Geometry and animation engine for circular ("radial") gauges.
//!
//! The crate produces plain data for a rendering backend:
//!
//! - [`resolve`] turns a [`GaugeConfig`] into [`ArcSegment`]s, a viewport and a value label
//! - [`AnimationDriver`] advances a displayed value towards its target along an [`Ease`] curve,
//!   driven by host frame callbacks through a [`FrameScheduler`]
//! - [`GaugeSession`] wires both together for one gauge instance
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod config;
pub(crate) mod geometry;
pub(crate) mod session;

pub use crate::foundation::core::{BezPath, Fps, Point, Rect, Vec2};
pub use crate::foundation::error::{GaugeError, GaugeResult};

pub use crate::animation::driver::{
    AnimationDriver, AnimationOpts, AnimationState, RetargetPolicy,
};
pub use crate::animation::ease::Ease;
pub use crate::animation::scheduler::{
    FrameScheduler, FrameToken, ManualScheduler, UnsupportedScheduler,
};
pub use crate::config::model::{
    ColorSpec, DEFAULT_GAP_PERCENT, DEFAULT_PRIMARY, DEFAULT_SECONDARY, GaugeConfig, GaugeSize,
    REFERENCE_BOX, SizePreset, Variant,
};
pub use crate::config::stops::{ColorStop, ColorStops};
pub use crate::geometry::path::{DEFAULT_TOLERANCE, SegmentPath, point_at};
pub use crate::geometry::resolve::{
    ArcSegment, FULL_CIRCLE, GaugeGeometry, Resolution, SegmentKind, Segments, ValueLabel,
    Viewport, resolve, resolve_at, try_resolve,
};
pub use crate::session::gauge::GaugeSession;
