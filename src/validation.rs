/// Input validation for the dish form
///
/// Every value that reaches the ledger passes through here first. Blank
/// strings (empty or whitespace only) count as missing, and a price must
/// parse to a finite, non-negative decimal.
use crate::error::ValidationError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Validate that a required text field is present
///
/// # Returns
/// * `Ok(trimmed)` if the field has visible content
/// * `Err(MissingField)` if it is empty or whitespace only
pub fn require_field<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(trimmed)
}

/// Parse a price entered as text
///
/// Accepts plain decimal notation (`45`, `12.50`, `0.99`). A leading `+`
/// is tolerated; anything else that `Decimal` cannot read is rejected
/// instead of being coerced.
pub fn parse_price(raw: &str) -> Result<Decimal, ValidationError> {
    let trimmed = require_field(raw, "price")?;

    let price = Decimal::from_str(trimmed).map_err(|e| ValidationError::InvalidPrice {
        raw: raw.to_string(),
        reason: e.to_string(),
    })?;

    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::InvalidPrice {
            raw: raw.to_string(),
            reason: "price cannot be negative".to_string(),
        });
    }

    // -0 parses as a negative zero; store it as plain zero
    Ok(price.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationKind;
    use rust_decimal_macros::dec;

    #[test]
    fn test_require_field() {
        assert_eq!(require_field("  Soup ", "dish").unwrap(), "Soup");
        assert_eq!(
            require_field("", "dish").unwrap_err(),
            ValidationError::MissingField { field: "dish" }
        );
        assert_eq!(
            require_field(" \t ", "description").unwrap_err(),
            ValidationError::MissingField { field: "description" }
        );
    }

    #[test]
    fn test_parse_price_valid() {
        assert_eq!(parse_price("45").unwrap(), dec!(45));
        assert_eq!(parse_price(" 12.50 ").unwrap(), dec!(12.50));
        assert_eq!(parse_price("0").unwrap(), Decimal::ZERO);
        assert_eq!(parse_price("-0").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        for raw in ["abc", "12,50", "R45", "1.2.3", "NaN", "inf"] {
            let err = parse_price(raw).unwrap_err();
            assert_eq!(err.kind(), ValidationKind::InvalidPrice, "raw = {raw}");
        }
    }

    #[test]
    fn test_parse_price_rejects_negative() {
        let err = parse_price("-5").unwrap_err();
        assert_eq!(err.kind(), ValidationKind::InvalidPrice);
    }

    #[test]
    fn test_parse_price_empty_is_missing() {
        let err = parse_price("   ").unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "price" });
    }
}
