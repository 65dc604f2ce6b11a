//! # Quantity Resolution Module
//!
//! This module resolves the amount half of a quantity token extracted from a
//! product name, and holds the rounding policy applied to every computed
//! unitary price.
//!
//! ## Features
//!
//! - Comma accepted as the decimal separator (source pages use the Spanish
//!   locale: "1,5 litro")
//! - Compound amounts: a multiplier prefix ("3x60" → 180) or an additive
//!   bonus-pack prefix ("2+1" → 3), collapsed to a single value before unit
//!   conversion
//! - The double-rounding policy shared by every retailer profile

use crate::errors::NormalizeError;
use log::trace;

/// An amount/unit pair as it appears in a product name, before conversion.
///
/// Derived once per product name, consumed immediately to produce the
/// unitary price, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct RawQuantity {
    /// The resolved amount, compound expressions already collapsed.
    pub amount: f64,
    /// The unit token exactly as matched in the name (e.g. "g", "unid.").
    pub raw_unit: String,
}

/// Resolve an amount token into a single value.
///
/// Handles the comma decimal separator and compound expressions: a token
/// containing `x`/`X` is split at the first separator and the two operands
/// multiplied; otherwise a token containing `+` is split and the operands
/// added; otherwise the token is parsed as a plain decimal. Operands are
/// taken left to right exactly as written.
///
/// # Examples
///
/// ```rust
/// use shopunit::quantity::resolve_amount;
///
/// assert_eq!(resolve_amount("3x60").unwrap(), 180.0);
/// assert_eq!(resolve_amount("2+1").unwrap(), 3.0);
/// assert_eq!(resolve_amount("1,5").unwrap(), 1.5);
/// ```
pub fn resolve_amount(token: &str) -> Result<f64, NormalizeError> {
    let token = token.replace(',', ".");

    let amount = if let Some((left, right)) = token.split_once(['x', 'X']) {
        parse_operand(left, &token)? * parse_operand(right, &token)?
    } else if let Some((left, right)) = token.split_once('+') {
        parse_operand(left, &token)? + parse_operand(right, &token)?
    } else {
        parse_operand(&token, &token)?
    };

    trace!("Resolved amount token '{}' -> {}", token, amount);
    Ok(amount)
}

fn parse_operand(operand: &str, token: &str) -> Result<f64, NormalizeError> {
    operand
        .trim()
        .parse::<f64>()
        .map_err(|_| NormalizeError::UnitParse(token.to_string()))
}

/// Round a computed unitary price to 4 decimal places, then to 2.
///
/// The double rounding is intentional, inherited behavior: it is numerically
/// imprecise (a value can land on a different cent than a single rounding
/// would give), but collapsing it to one step would silently change computed
/// prices. Ties round away from zero.
pub fn round_price(value: f64) -> f64 {
    round_to(round_to(value, 4), 2)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_amounts() {
        assert_eq!(resolve_amount("60").unwrap(), 60.0);
        assert_eq!(resolve_amount("0.5").unwrap(), 0.5);
    }

    #[test]
    fn test_comma_decimal_separator() {
        assert_eq!(resolve_amount("1,5").unwrap(), 1.5);
        assert_eq!(resolve_amount("0,33").unwrap(), 0.33);
    }

    #[test]
    fn test_multiplier_compound() {
        assert_eq!(resolve_amount("3x60").unwrap(), 180.0);
        assert_eq!(resolve_amount("2X500").unwrap(), 1000.0);
    }

    #[test]
    fn test_additive_compound() {
        assert_eq!(resolve_amount("2+1").unwrap(), 3.0);
        assert_eq!(resolve_amount("4+2").unwrap(), 6.0);
    }

    #[test]
    fn test_compound_with_comma_decimals() {
        // "2x1,5" -> 2 bottles of 1.5 litres
        assert_eq!(resolve_amount("2x1,5").unwrap(), 3.0);
    }

    #[test]
    fn test_operands_taken_left_to_right() {
        // Only the first separator splits; the engine parses literally.
        assert!(resolve_amount("3x2x60").is_err());
    }

    #[test]
    fn test_garbage_token_fails() {
        assert!(matches!(
            resolve_amount("muchos"),
            Err(NormalizeError::UnitParse(_))
        ));
        assert!(resolve_amount("").is_err());
        assert!(resolve_amount("x60").is_err());
    }

    #[test]
    fn test_round_price_basic() {
        assert_eq!(round_price(16.666_666_666_666_668), 16.67);
        assert_eq!(round_price(1.0), 1.0);
        assert_eq!(round_price(0.005), 0.01);
    }

    #[test]
    fn test_round_price_keeps_cents() {
        // 12.00 / 12 for the Docena row must come out exactly 1.00
        assert_eq!(round_price(12.0 / 12.0), 1.0);
        // 3.00 / 180 * 1000
        assert_eq!(round_price(3.0 / 180.0 * 1000.0), 16.67);
    }
}
