use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::driver::AnimationOpts;
use crate::foundation::error::{GaugeError, GaugeResult};

/// Primary (filled arc) color used when none is configured or the configured one is invalid.
pub const DEFAULT_PRIMARY: &str = "#3b82f6";
/// Secondary (track) color used when none is configured or the configured one is invalid.
pub const DEFAULT_SECONDARY: &str = "#e5e7eb";
/// Gap between the arc ends, in percent of the full circle.
pub const DEFAULT_GAP_PERCENT: f64 = 5.0;
/// Side length of the reference box used when the size is a non-pixel CSS length.
pub const REFERENCE_BOX: f64 = 100.0;

/// Named gauge sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SizePreset {
    /// 24 px.
    #[serde(rename = "xs")]
    Xs,
    /// 32 px.
    #[serde(rename = "sm")]
    Sm,
    /// 48 px.
    #[serde(rename = "md")]
    Md,
    /// 96 px.
    #[serde(rename = "lg")]
    Lg,
    /// 128 px.
    #[serde(rename = "xl")]
    Xl,
    /// 160 px.
    #[serde(rename = "2xl")]
    Xxl,
}

impl SizePreset {
    /// Every preset, smallest first.
    pub const ALL: [SizePreset; 6] = [
        Self::Xs,
        Self::Sm,
        Self::Md,
        Self::Lg,
        Self::Xl,
        Self::Xxl,
    ];

    /// Pixel diameter of this preset.
    pub fn diameter(self) -> f64 {
        match self {
            Self::Xs => 24.0,
            Self::Sm => 32.0,
            Self::Md => 48.0,
            Self::Lg => 96.0,
            Self::Xl => 128.0,
            Self::Xxl => 160.0,
        }
    }

    /// Configuration name (`"xs"` .. `"2xl"`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }

    /// Look up a preset by its configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

/// Gauge size: a named preset, a pixel diameter, or a CSS length passed through verbatim.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "RawSize", into = "RawSize")]
pub enum GaugeSize {
    /// Named preset.
    Preset(SizePreset),
    /// Diameter in pixels.
    Pixels(f64),
    /// Any other CSS length, e.g. `"5em"`.
    Css(String),
}

impl GaugeSize {
    /// Pixel diameter, when the size expresses one.
    ///
    /// CSS strings count as pixels when they are a bare number or carry a `px` suffix.
    pub fn pixels(&self) -> Option<f64> {
        match self {
            Self::Preset(p) => Some(p.diameter()),
            Self::Pixels(px) => Some(*px),
            Self::Css(s) => {
                let s = s.trim();
                s.strip_suffix("px").unwrap_or(s).trim().parse::<f64>().ok()
            }
        }
    }

    /// Value for the `width`/`height` attributes of the rendered box.
    pub fn attr(&self) -> String {
        match self {
            Self::Preset(p) => format_number(p.diameter()),
            Self::Pixels(px) => format_number(*px),
            Self::Css(s) => s.clone(),
        }
    }
}

impl Default for GaugeSize {
    fn default() -> Self {
        Self::Preset(SizePreset::Md)
    }
}

impl From<SizePreset> for GaugeSize {
    fn from(p: SizePreset) -> Self {
        Self::Preset(p)
    }
}

impl From<f64> for GaugeSize {
    fn from(px: f64) -> Self {
        Self::Pixels(px)
    }
}

#[derive(Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum RawSize {
    Number(f64),
    Text(String),
}

impl From<RawSize> for GaugeSize {
    fn from(raw: RawSize) -> Self {
        match raw {
            RawSize::Number(px) => Self::Pixels(px),
            RawSize::Text(s) => match SizePreset::from_name(s.trim()) {
                Some(p) => Self::Preset(p),
                None => Self::Css(s),
            },
        }
    }
}

impl From<GaugeSize> for RawSize {
    fn from(size: GaugeSize) -> Self {
        match size {
            GaugeSize::Preset(p) => Self::Text(p.name().to_string()),
            GaugeSize::Pixels(px) => Self::Number(px),
            GaugeSize::Css(s) => Self::Text(s),
        }
    }
}

/// Traversal direction of the filled arc.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Clockwise.
    #[default]
    Ascending,
    /// Counter-clockwise.
    Descending,
}

/// Color input as written in configuration: one color, or a threshold → color mapping.
///
/// Threshold keys are strings so that JSON objects map onto them directly; they are parsed and
/// validated by [`crate::ColorStops::from_spec`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// One color for the whole range.
    Solid(String),
    /// Threshold (as a decimal string) to color.
    Thresholds(BTreeMap<String, String>),
}

impl ColorSpec {
    /// Single color.
    pub fn solid(color: impl Into<String>) -> Self {
        Self::Solid(color.into())
    }

    /// Threshold map from numeric thresholds.
    pub fn thresholds<I, C>(stops: I) -> Self
    where
        I: IntoIterator<Item = (f64, C)>,
        C: Into<String>,
    {
        Self::Thresholds(
            stops
                .into_iter()
                .map(|(at, color)| (at.to_string(), color.into()))
                .collect(),
        )
    }

    fn default_primary() -> Self {
        Self::solid(DEFAULT_PRIMARY)
    }

    fn default_secondary() -> Self {
        Self::solid(DEFAULT_SECONDARY)
    }
}

/// Immutable per-render gauge configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeConfig {
    /// Value to display; clamped into `[min, max]` for drawing.
    pub value: f64,
    /// Lower bound of the range.
    #[serde(default)]
    pub min: f64,
    /// Upper bound of the range; must exceed `min`.
    #[serde(default = "default_max")]
    pub max: f64,
    /// Rendered diameter.
    #[serde(default)]
    pub size: GaugeSize,
    /// Gap between the arc ends, in percent of the circle, within `[0, 100)`.
    #[serde(default = "default_gap_percent")]
    pub gap_percent: f64,
    /// Stroke width in box units; `None` means one tenth of the diameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    /// Direction of the fill.
    #[serde(default)]
    pub variant: Variant,
    /// Fill color(s).
    #[serde(default = "ColorSpec::default_primary")]
    pub primary: ColorSpec,
    /// Track color(s).
    #[serde(default = "ColorSpec::default_secondary")]
    pub secondary: ColorSpec,
    /// Show the value label.
    #[serde(default)]
    pub show_value: bool,
    /// Replay the value animation when the gauge is created.
    #[serde(default)]
    pub show_animation: bool,
    /// Decimal places of the value label.
    #[serde(default)]
    pub label_precision: u8,
    /// Replay options.
    #[serde(default)]
    pub animation: AnimationOpts,
}

fn default_max() -> f64 {
    100.0
}

fn default_gap_percent() -> f64 {
    DEFAULT_GAP_PERCENT
}

impl GaugeConfig {
    /// Configuration with every optional field at its default.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            min: 0.0,
            max: default_max(),
            size: GaugeSize::default(),
            gap_percent: DEFAULT_GAP_PERCENT,
            stroke_width: None,
            variant: Variant::default(),
            primary: ColorSpec::default_primary(),
            secondary: ColorSpec::default_secondary(),
            show_value: false,
            show_animation: false,
            label_precision: 0,
            animation: AnimationOpts::default(),
        }
    }

    /// Parse a gauge configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> GaugeResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| GaugeError::serde(format!("parse gauge config JSON: {e}")))
    }

    /// Parse a gauge configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> GaugeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            GaugeError::validation(format!("open gauge config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse a gauge configuration from a JSON string.
    pub fn from_json_str(s: &str) -> GaugeResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| GaugeError::serde(format!("parse gauge config JSON: {e}")))
    }
}

fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
