/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use crate::prefix::SiPrefix;

/// Decompose a value into `(base, exponent)` with `base ∈ [1,10)`,
/// or `(0, 0)` for zero. The sign is dropped; callers that care
/// about it keep the original value around.
pub fn normalize(value: f64) -> (f64, i32) {
    let mut base = value.abs();
    if !base.is_finite() {
        return (base, 0);
    }
    let mut exponent = 0;
    while base >= 10.0 {
        exponent += 1;
        base /= 10.0;
    }
    while base < 1.0 && base != 0.0 {
        exponent -= 1;
        base *= 10.0;
    }
    (base, exponent)
}

/// Render a value in SI shorthand: the value rescaled into its
/// prefix bucket, `precision` fractional digits, a space and the
/// prefix symbol (empty for the unity range, leaving a trailing
/// space). Magnitudes beyond ±24 are clamped into the boundary
/// prefix rather than rejected, so the scaled number may run
/// outside the usual 1-3 integer digits there.
pub fn format_notation(value: f64, precision: usize) -> String {
    let (_, exponent) = normalize(value);
    let (_, prefix) = SiPrefix::from_power(exponent as i64);
    let scaled = value / prefix.multiplier();
    format!("{:.*} {}", precision, scaled, prefix)
}
