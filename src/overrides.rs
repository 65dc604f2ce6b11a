//! # Override Table Module
//!
//! Each retailer ships a handful of products whose source data is known to
//! be defective: a mislabeled pack size, a per-unit price reported for half
//! the pack, a dose count only present in the display name. Those defects
//! are patched here as literal, product-id-keyed corrections loaded into the
//! retailer profile: point-fixes maintained as data, never generalized into
//! the parsing algorithm.

use crate::errors::NormalizeError;
use crate::quantity::round_price;
use log::debug;
use regex::Regex;

/// A literal correction for one known-defective product.
#[derive(Debug, Clone)]
pub enum Override {
    /// The display name itself is wrong; rewrite a substring before name
    /// parsing (e.g. a pack labelled "3x80" that actually holds 3x60).
    RewriteName {
        from: &'static str,
        to: &'static str,
    },
    /// The reported per-unit price is bogus; the item price *is* the unitary
    /// price, under the given retailer-native label.
    UnitPriceIsItemPrice { label: &'static str },
    /// The per-unit price must be re-derived from a count embedded in the
    /// product name (first capture group of `pattern`), double-rounded,
    /// under the given retailer-native label.
    UnitPriceFromName {
        pattern: Regex,
        label: &'static str,
    },
    /// The reported per-unit price is off by a constant factor (e.g. priced
    /// per half pack).
    ScaleUnitPrice { factor: f64 },
}

impl Override {
    /// Patch the display name. Identity for every variant except
    /// [`Override::RewriteName`].
    pub fn patch_name(&self, id: &str, name: &str) -> String {
        match self {
            Override::RewriteName { from, to } => {
                debug!("Override for {}: rewriting name '{}' -> '{}'", id, from, to);
                name.replace(from, to)
            }
            _ => name.to_string(),
        }
    }

    /// Patch an explicitly reported `(unitary_price, label)` pair before it
    /// reaches the unit normalizer. Identity for name-rewrite overrides.
    pub fn patch_explicit<'a>(
        &'a self,
        id: &str,
        price: f64,
        name: &str,
        unitary_price: f64,
        label: &'a str,
    ) -> Result<(f64, &'a str), NormalizeError> {
        match self {
            Override::UnitPriceIsItemPrice { label } => {
                debug!("Override for {}: unitary price taken from item price", id);
                Ok((price, label))
            }
            Override::UnitPriceFromName { pattern, label } => {
                let amount = pattern
                    .captures(name)
                    .and_then(|caps| caps.get(1))
                    .and_then(|m| m.as_str().parse::<f64>().ok())
                    .ok_or_else(|| NormalizeError::UnitParse(name.to_string()))?;
                debug!(
                    "Override for {}: unitary price derived from name count {}",
                    id, amount
                );
                Ok((round_price(price / amount), label))
            }
            Override::ScaleUnitPrice { factor } => {
                debug!("Override for {}: unitary price scaled by {}", id, factor);
                Ok((unitary_price * factor, label))
            }
            Override::RewriteName { .. } => Ok((unitary_price, label)),
        }
    }
}
