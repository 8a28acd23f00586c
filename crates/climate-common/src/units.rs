//! Unit conversion for display values.

/// Convert a temperature in degrees Celsius to degrees Fahrenheit.
///
/// NaN passes through unchanged.
#[inline]
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}
