use crate::foundation::error::{GaugeError, GaugeResult};

/// Geometry primitives shared with render backends.
pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Frames-per-second represented as a rational `num/den`.
///
/// Used to step simulated frame clocks; real hosts deliver their own timestamps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> GaugeResult<Self> {
        if den == 0 {
            return Err(GaugeError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(GaugeError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in milliseconds.
    pub fn frame_duration_ms(self) -> f64 {
        1000.0 * f64::from(self.den) / f64::from(self.num)
    }

    /// Timestamp of frame `frames` relative to frame zero, in milliseconds.
    pub fn frames_to_ms(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_ms()
    }

    /// Number of whole frames needed to cover `ms` (ceil semantics, never negative).
    pub fn ms_to_frames_ceil(self, ms: f64) -> u64 {
        (ms / self.frame_duration_ms()).ceil().max(0.0) as u64
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
