/// Convenience alias for `Result<T, GaugeError>`.
pub type GaugeResult<T> = Result<T, GaugeError>;

/// Errors reported by the gauge engine.
///
/// Configuration problems are usually surfaced as *issues* next to a still-renderable geometry
/// (see [`crate::Resolution`]) rather than returned as hard failures.
#[derive(thiserror::Error, Debug)]
pub enum GaugeError {
    /// A configuration value was rejected.
    #[error("validation error: {0}")]
    Validation(String),

    /// `max` is not greater than `min`, or a bound is not finite.
    #[error("invalid range: max ({max}) must be greater than min ({min})")]
    InvalidRange {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },

    /// A color or threshold map could not be used.
    #[error("color stop error: {0}")]
    ColorStops(String),

    /// Animation options or easing names were invalid.
    #[error("animation error: {0}")]
    Animation(String),

    /// The host could not schedule a frame callback.
    #[error("scheduler error: {0}")]
    Scheduler(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GaugeError {
    /// Build a [`GaugeError::Validation`] error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GaugeError::ColorStops`] error.
    pub fn color_stops(msg: impl Into<String>) -> Self {
        Self::ColorStops(msg.into())
    }

    /// Build a [`GaugeError::Animation`] error.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`GaugeError::Scheduler`] error.
    pub fn scheduler(msg: impl Into<String>) -> Self {
        Self::Scheduler(msg.into())
    }

    /// Build a [`GaugeError::Serde`] error.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// `true` for problems in the caller-supplied configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidRange { .. } | Self::ColorStops(_)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
