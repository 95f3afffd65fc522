// Validation utilities module
// Custom validation functions for decoded data records

use rust_decimal::Decimal;
use validator::ValidationError;

/// Validates that a variant tag is one of the accepted values
/// Valid values: "D" (drink), "F" (food)
pub fn validate_variant_tag(tag: &str) -> Result<(), ValidationError> {
    if tag == "D" || tag == "F" {
        Ok(())
    } else {
        Err(ValidationError::new("unknown_variant_tag"))
    }
}

/// Validates that a price is not negative
pub fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        Err(ValidationError::new("price_must_not_be_negative"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_variant_tag() {
        assert!(validate_variant_tag("D").is_ok());
        assert!(validate_variant_tag("F").is_ok());
        assert!(validate_variant_tag("X").is_err());
        assert!(validate_variant_tag("d").is_err());
    }

    #[test]
    fn test_price_sign() {
        assert!(validate_price(&dec!(0.00)).is_ok());
        assert!(validate_price(&dec!(1.99)).is_ok());
        assert!(validate_price(&dec!(-0.01)).is_err());
    }
}
