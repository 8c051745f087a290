//! Fixed-point amount handling.
//!
//! Amounts are stored as `NUMERIC(12,2)` and carried around as [`Decimal`].
//! They only become `f64` when written into a response body.

use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};

use crate::error::AppError;

/// Fractional digits kept for every amount.
pub const SCALE: u32 = 2;

/// Largest amount a `NUMERIC(12,2)` column accepts.
fn max_amount() -> Decimal {
    Decimal::new(9_999_999_999_99, SCALE)
}

/// Rounds to cents the way Postgres does and rejects negative or oversized values.
pub fn amount(field: &str, value: Decimal) -> Result<Decimal, AppError> {
    let rounded = value.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        return Err(AppError::validation(format!("{field} must not be negative")));
    }
    if rounded > max_amount() {
        return Err(AppError::validation(format!("{field} is too large")));
    }
    Ok(rounded.abs())
}

pub fn to_display(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Trims `value` and checks it is non-empty and at most `max` characters.
pub fn text(field: &str, value: &str, max: usize) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    if trimmed.chars().count() > max {
        return Err(AppError::validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Like [`text`] but blank input becomes `None`.
pub fn optional_text(field: &str, value: Option<&str>, max: usize) -> Result<Option<String>, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => text(field, v, max).map(Some),
    }
}
