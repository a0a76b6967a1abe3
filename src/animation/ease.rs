use std::fmt;
use std::str::FromStr;

use crate::foundation::error::GaugeError;

const BACK_C1: f64 = 1.70158;
const BACK_C2: f64 = BACK_C1 * 1.525;
const BACK_C3: f64 = BACK_C1 + 1.0;

/// Easing functions used to map normalized animation progress.
///
/// Every function maps `0 -> 0` and `1 -> 1` exactly. The back variants overshoot `[0, 1]` in
/// between.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Ease {
    /// Constant speed.
    #[default]
    #[serde(rename = "linear")]
    Linear,
    /// Quadratic, accelerating.
    #[serde(rename = "easeInQuad")]
    InQuad,
    /// Quadratic, decelerating.
    #[serde(rename = "easeOutQuad")]
    OutQuad,
    /// Quadratic, accelerating then decelerating.
    #[serde(rename = "easeInOutQuad")]
    InOutQuad,
    /// Overshoots the end, then settles.
    #[serde(rename = "easeOutBack")]
    OutBack,
    /// Pulls back first and overshoots the end.
    #[serde(rename = "easeInOutBack")]
    InOutBack,
}

impl Ease {
    /// Every easing, in table order.
    pub const ALL: [Ease; 6] = [
        Self::Linear,
        Self::InQuad,
        Self::OutQuad,
        Self::InOutQuad,
        Self::OutBack,
        Self::InOutBack,
    ];

    /// Configuration name, e.g. `"easeOutBack"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InQuad => "easeInQuad",
            Self::OutQuad => "easeOutQuad",
            Self::InOutQuad => "easeInOutQuad",
            Self::OutBack => "easeOutBack",
            Self::InOutBack => "easeInOutBack",
        }
    }

    /// Look up an easing by its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }

    /// Whether the curve leaves `[0, 1]` before settling.
    pub fn overshoots(self) -> bool {
        matches!(self, Self::OutBack | Self::InOutBack)
    }

    /// Apply this easing function to normalized progress `t`, clamped into `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        // Pinned so that floating-point error in the curves never moves the endpoints.
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => t * (2.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::OutBack => 1.0 + BACK_C3 * (t - 1.0).powi(3) + BACK_C1 * (t - 1.0).powi(2),
            Self::InOutBack => {
                if t < 0.5 {
                    ((2.0 * t).powi(2) * ((BACK_C2 + 1.0) * 2.0 * t - BACK_C2)) / 2.0
                } else {
                    ((2.0 * t - 2.0).powi(2) * ((BACK_C2 + 1.0) * (t * 2.0 - 2.0) + BACK_C2)
                        + 2.0)
                        / 2.0
                }
            }
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ease {
    type Err = GaugeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|e| e.name()).collect();
            GaugeError::animation(format!(
                "unknown easing '{s}' (expected one of: {})",
                known.join(", ")
            ))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
