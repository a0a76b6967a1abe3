/// Map `value` in `[min, max]` onto `[0, 1]`, clamping out-of-range input.
///
/// Callers must guarantee `min < max`.
pub(crate) fn normalize(value: f64, min: f64, max: f64) -> f64 {
    ((value.clamp(min, max) - min) / (max - min)).clamp(0.0, 1.0)
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Round `value` to `precision` decimal places, ties towards positive infinity.
///
/// Never returns negative zero, so labels never read `-0`.
pub(crate) fn round_to(value: f64, precision: u8) -> f64 {
    let scale = 10f64.powi(i32::from(precision));
    let rounded = (value * scale + 0.5).floor() / scale;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Convert a compass angle (degrees, 0 at 12 o'clock, clockwise) into the kurbo angle
/// convention (radians, 0 along +x, towards +y which is down on screen).
pub(crate) fn compass_to_radians(deg: f64) -> f64 {
    (deg - 90.0).to_radians()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
