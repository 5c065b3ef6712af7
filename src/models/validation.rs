use rust_decimal::Decimal;

use super::{ValidationError, ValidationResult};

/// Lowest rating a restaurant can receive
pub const MIN_RATING: i32 = 0;
/// Highest rating a restaurant can receive
pub const MAX_RATING: i32 = 5;

/// Validate an entity name (category, restaurant or dish).
///
/// Names are opaque text compared by exact equality; only the empty name is rejected.
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validate a dish price
pub fn validate_dish_price(price: &Decimal) -> ValidationResult<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::InvalidValue {
            field: "dish_price".to_string(),
            value: price.to_string(),
            reason: "Price cannot be negative".to_string(),
        });
    }

    Ok(())
}

/// Whether a rating falls in the accepted range; out-of-range ratings are discarded, not rejected
pub fn is_valid_rating(rating: i32) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}
