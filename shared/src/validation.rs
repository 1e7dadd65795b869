//! Validation utilities for grain grading inputs
//!
//! Checks return `&'static str` reasons; constructors attach the field name
//! when turning them into a `GradingError`.

use crate::error::{GradingError, GradingResult};

// ============================================================================
// Weight Validations
// ============================================================================

/// Validate that a weight (grams or kilograms) is strictly positive
pub fn validate_positive_weight(weight: f64) -> Result<(), &'static str> {
    if !weight.is_finite() {
        return Err("Weight must be a finite number");
    }
    if weight <= 0.0 {
        return Err("Weight must be greater than zero");
    }
    Ok(())
}

/// Validate a part weight against the sample it was taken from
pub fn validate_fraction_weight(part: f64, sample: f64) -> Result<(), &'static str> {
    if !part.is_finite() {
        return Err("Weight must be a finite number");
    }
    if part < 0.0 {
        return Err("Weight cannot be negative");
    }
    if part > sample {
        return Err("Weight cannot exceed the sample weight");
    }
    Ok(())
}

// ============================================================================
// Percentage Validations
// ============================================================================

/// Validate a percentage lies in 0-100 (inclusive on both ends)
pub fn validate_percentage(value: f64) -> Result<(), &'static str> {
    if !(0.0..=100.0).contains(&value) {
        return Err("Percentage must be between 0 and 100");
    }
    Ok(())
}

/// Validate a tier ceiling. Infinity is allowed and means "no limit".
pub fn validate_limit(value: f64) -> Result<(), &'static str> {
    if value.is_nan() {
        return Err("Threshold limit must be a number");
    }
    if value < 0.0 {
        return Err("Threshold limit cannot be negative");
    }
    Ok(())
}

/// Share of `part` in `whole`, as a percentage
pub fn percentage_of(part: f64, whole: f64) -> f64 {
    part / whole * 100.0
}

/// Run a check and attach the field name on failure
pub(crate) fn check(
    field: &'static str,
    result: Result<(), &'static str>,
) -> GradingResult<()> {
    result.map_err(|message| GradingError::invalid(field, message))
}
