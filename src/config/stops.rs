use smallvec::SmallVec;

use crate::config::model::ColorSpec;
use crate::foundation::error::{GaugeError, GaugeResult};

/// One threshold band: values at or above `threshold` use `color`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ColorStop {
    /// Lower bound of the band, in value space.
    pub threshold: f64,
    /// CSS color for the band.
    pub color: String,
}

/// Validated color input.
///
/// Threshold stops are sorted ascending and non-empty. Lookups follow last-matching-threshold
/// semantics: the color of the largest threshold `<=` the query wins.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct ColorStops {
    repr: Repr,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
enum Repr {
    Solid(String),
    Thresholds(Vec<ColorStop>),
}

impl ColorStops {
    /// A single color for the whole range.
    pub fn solid(color: impl Into<String>) -> Self {
        Self {
            repr: Repr::Solid(color.into()),
        }
    }

    /// Build a threshold table, sorting the stops by threshold.
    ///
    /// Fails on an empty table, a non-finite threshold or a blank color.
    pub fn thresholds(stops: impl IntoIterator<Item = ColorStop>) -> GaugeResult<Self> {
        let mut stops: Vec<ColorStop> = stops.into_iter().collect();
        if stops.is_empty() {
            return Err(GaugeError::color_stops("threshold map is empty"));
        }
        for stop in &stops {
            if !stop.threshold.is_finite() {
                return Err(GaugeError::color_stops(format!(
                    "threshold {} is not a finite number",
                    stop.threshold
                )));
            }
            if stop.color.trim().is_empty() {
                return Err(GaugeError::color_stops(format!(
                    "color for threshold '{}' must not be empty",
                    stop.threshold
                )));
            }
        }
        stops.sort_by(|a, b| a.threshold.total_cmp(&b.threshold));
        Ok(Self {
            repr: Repr::Thresholds(stops),
        })
    }

    /// Validate a configured [`ColorSpec`].
    pub fn from_spec(spec: &ColorSpec) -> GaugeResult<Self> {
        match spec {
            ColorSpec::Solid(color) => {
                if color.trim().is_empty() {
                    return Err(GaugeError::color_stops("color must not be empty"));
                }
                Ok(Self::solid(color.clone()))
            }
            ColorSpec::Thresholds(map) => {
                let mut stops = Vec::with_capacity(map.len());
                for (key, color) in map {
                    let threshold = key
                        .trim()
                        .parse::<f64>()
                        .ok()
                        .filter(|t| t.is_finite())
                        .ok_or_else(|| {
                            GaugeError::color_stops(format!(
                                "threshold key '{key}' is not a finite number"
                            ))
                        })?;
                    stops.push(ColorStop {
                        threshold,
                        color: color.clone(),
                    });
                }
                Self::thresholds(stops)
            }
        }
    }

    /// True for a single color.
    pub fn is_solid(&self) -> bool {
        matches!(self.repr, Repr::Solid(_))
    }

    /// Threshold stops in ascending order; `None` for a single color.
    pub fn stops(&self) -> Option<&[ColorStop]> {
        match &self.repr {
            Repr::Solid(_) => None,
            Repr::Thresholds(stops) => Some(stops),
        }
    }

    /// Color for a value-space query.
    ///
    /// Queries below the lowest threshold use the lowest stop's color.
    pub fn color_at(&self, value: f64) -> &str {
        match &self.repr {
            Repr::Solid(color) => color.as_str(),
            Repr::Thresholds(stops) => {
                let idx = stops.partition_point(|s| s.threshold <= value);
                &stops[idx.saturating_sub(1)].color
            }
        }
    }

    /// Stops projected onto the normalized `[min, max]` fraction axis.
    pub(crate) fn fractions(&self, min: f64, max: f64) -> StopFractions<'_> {
        let items = match &self.repr {
            Repr::Solid(color) => std::iter::once((f64::NEG_INFINITY, color.as_str())).collect(),
            Repr::Thresholds(stops) => stops
                .iter()
                .map(|s| ((s.threshold - min) / (max - min), s.color.as_str()))
                .collect(),
        };
        StopFractions { items }
    }
}

/// Threshold stops expressed as fractions of the gauge range, ascending.
pub(crate) struct StopFractions<'a> {
    items: SmallVec<[(f64, &'a str); 8]>,
}

impl<'a> StopFractions<'a> {
    pub(crate) fn color_at(&self, fraction: f64) -> &'a str {
        let idx = self.items.partition_point(|(at, _)| *at <= fraction);
        self.items.get(idx.saturating_sub(1)).map_or("", |(_, c)| *c)
    }

    /// Stop fractions strictly inside `(lo, hi)`, ascending and de-duplicated.
    pub(crate) fn boundaries_within(&self, lo: f64, hi: f64) -> impl Iterator<Item = f64> + '_ {
        let mut last = lo;
        self.items.iter().filter_map(move |(at, _)| {
            if *at > last && *at < hi {
                last = *at;
                Some(*at)
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/stops.rs"]
mod tests;
