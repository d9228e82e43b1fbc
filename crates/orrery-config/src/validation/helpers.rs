//! Shared range-validation helpers used by all section validators.

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float).
///
/// NaN is always out of range.
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is not strictly positive and finite.
pub(crate) fn validate_positive(errors: &mut Vec<String>, name: &str, value: f64) {
    if !(value.is_finite() && value > 0.0) {
        errors.push(format!("{name} = {value} must be greater than 0"));
    }
}

/// Validate each channel of an RGB triple against `[0, 1]`.
pub(crate) fn validate_color(errors: &mut Vec<String>, name: &str, color: [f64; 3]) {
    for (channel, value) in ["r", "g", "b"].iter().zip(color) {
        validate_range_f64(errors, &format!("{name}.{channel}"), value, 0.0, 1.0);
    }
}

/// Push an error if any component of a vector is not finite.
pub(crate) fn validate_finite(errors: &mut Vec<String>, name: &str, v: [f64; 3]) {
    if v.iter().any(|c| !c.is_finite()) {
        errors.push(format!("{name} = {v:?} must be finite"));
    }
}
