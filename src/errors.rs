//! # Error Types Module
//!
//! This module defines the error taxonomy used throughout the normalization
//! engine. Errors are per-product: the caller decides whether to skip, log,
//! or abort the whole run; the engine never retries and never swallows an
//! error silently (the documented `N/A` sentinel path excepted).

/// Errors raised while normalizing a product's pricing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// No recognizable quantity/unit token was found in a product name where
    /// one was required (profiles with a sentinel policy return
    /// `UnitPricing::NotAvailable` instead of this error).
    UnitParse(String),
    /// A unit token was found or reported but has no conversion rule. This
    /// signals an unanticipated retailer format and is fatal for the product.
    UnrecognizedUnit(String),
    /// A named shopping list was not present in the collaborator's dump.
    ListNotFound(String),
}

impl std::fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalizeError::UnitParse(name) => {
                write!(f, "No quantity token found in product name \"{name}\"")
            }
            NormalizeError::UnrecognizedUnit(unit) => {
                write!(f, "Non recognized measurement unit \"{unit}\"")
            }
            NormalizeError::ListNotFound(list) => {
                write!(f, "List name \"{list}\" not found")
            }
        }
    }
}

impl std::error::Error for NormalizeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            NormalizeError::UnrecognizedUnit("bananas".to_string()).to_string(),
            "Non recognized measurement unit \"bananas\""
        );
        assert_eq!(
            NormalizeError::ListNotFound("semanal".to_string()).to_string(),
            "List name \"semanal\" not found"
        );
        assert!(NormalizeError::UnitParse("Leche entera".to_string())
            .to_string()
            .contains("Leche entera"));
    }
}
