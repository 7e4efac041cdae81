use rust_decimal::Decimal;
use validator::ValidationError;

/// Largest value a `NUMERIC(10, 2)` price column holds.
pub(crate) const MAX_PRICE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Prices are stored as whole cents: non-negative, at most two decimal
/// places, and within the column's range.
pub(crate) fn valid_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::new("price").with_message("price must not be negative".into()));
    }
    if price.normalize().scale() > 2 {
        return Err(ValidationError::new("price")
            .with_message("price must have at most two decimal places".into()));
    }
    if *price > MAX_PRICE {
        return Err(ValidationError::new("price")
            .with_message(format!("price must not exceed {}", MAX_PRICE).into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_accepts_whole_cents() {
        for ok in ["0", "19.99", "40", "19.990", "99999999.99"] {
            assert!(valid_price(&dec(ok)).is_ok(), "{} should pass", ok);
        }
    }

    #[test]
    fn test_rejects_negative() {
        assert!(valid_price(&dec("-0.01")).is_err());
    }

    #[test]
    fn test_rejects_sub_cent_digits() {
        let err = valid_price(&dec("19.999")).unwrap_err();
        assert_eq!(
            err.message.as_deref(),
            Some("price must have at most two decimal places")
        );
    }

    #[test]
    fn test_rejects_values_past_column_range() {
        assert_eq!(MAX_PRICE, dec("99999999.99"));
        assert!(valid_price(&dec("100000000")).is_err());
        assert!(valid_price(&dec("1000000000")).is_err());
    }
}
