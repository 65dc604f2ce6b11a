//! # Retailer Profiles Module
//!
//! A retailer profile is a configuration binding, not code: the regex
//! vocabulary used to pull quantity tokens out of product names, the
//! declarative conversion rules behind that vocabulary, the label vocabulary
//! for pages that report explicit per-unit pricing, the override table for
//! known-defective products, and the policy applied when a name carries no
//! recognizable quantity at all. The extraction and normalization engines
//! are retailer-agnostic; everything shop-specific lives in these tables.

use crate::overrides::Override;
use crate::units::CanonicalUnit;
use regex::Regex;
use std::collections::HashMap;

mod eroski;
mod hipercor;
mod mercadona;

pub use eroski::EROSKI;
pub use hipercor::HIPERCOR;
pub use mercadona::MERCADONA;

/// The arithmetic shape used to derive a unitary price from an item price
/// and a parsed amount.
///
/// The variants spell out the exact expression instead of a scale factor so
/// the floating-point result matches the inherited behavior operation for
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountBasis {
    /// `price / amount`: amount already in the canonical unit.
    PerUnit,
    /// `price / amount * 1000`: amount in thousandths (g to kg, ml to l).
    PerThousand,
    /// `price / amount * 100`: amount in hundredths (cl to l).
    PerHundred,
    /// `price / (amount / 100)`: canonical unit is a 100-unit block
    /// (ml/cc to 100 ml).
    PerHundredBlock,
}

impl AmountBasis {
    pub fn apply(&self, price: f64, amount: f64) -> f64 {
        match self {
            AmountBasis::PerUnit => price / amount,
            AmountBasis::PerThousand => price / amount * 1000.0,
            AmountBasis::PerHundred => price / amount * 100.0,
            AmountBasis::PerHundredBlock => price / (amount / 100.0),
        }
    }
}

/// One row of a profile's name-parsing vocabulary: a unit token as it
/// appears in product names, an optional category constraint, and the
/// conversion it triggers.
#[derive(Debug, Clone)]
pub struct UnitRule {
    /// The token matched by the quantity pattern (e.g. "g", "unid.").
    pub token: &'static str,
    /// When set, the rule only applies to products of this category; rows
    /// with a constraint must precede the unconstrained row for the same
    /// token.
    pub category: Option<&'static str>,
    /// Canonical unit of the resulting price.
    pub unit: CanonicalUnit,
    /// How the unitary price is computed.
    pub basis: AmountBasis,
}

/// One row of a profile's explicit-label vocabulary: a per-unit price label
/// as printed on the page and the canonical unit it denotes.
#[derive(Debug, Clone)]
pub struct LabelRule {
    /// The label exactly as reported (e.g. "1 KILO", "Docena").
    pub label: &'static str,
    /// Canonical unit of the resulting price.
    pub unit: CanonicalUnit,
    /// When set, the label denotes a pack of this many canonical units and
    /// the reported price is divided (then double-rounded) accordingly;
    /// otherwise the reported price passes through unchanged.
    pub pack_size: Option<f64>,
}

/// What the name extractor does when a product name carries no recognizable
/// quantity token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingQuantityPolicy {
    /// Fail with `UnitParse`; the caller decides what to do with the
    /// product.
    Fail,
    /// Return the `(0.0, "N/A")` sentinel instead of failing.
    ///
    /// Whether this is an intentional fallback-to-unknown or a latent bug
    /// masking parse failures is an open question for the product owner;
    /// the observable behavior is preserved as-is per retailer.
    NotAvailable,
}

/// Everything shop-specific the engines need, as one configuration value.
#[derive(Debug)]
pub struct RetailerProfile {
    pub name: &'static str,
    /// Pattern extracting `(amount_token, unit_token)` from a product name.
    /// Greedy leading `.*` so the trailing (last) quantity token wins.
    pub quantity_pattern: Regex,
    /// Name-parsing vocabulary, checked in order.
    pub name_rules: Vec<UnitRule>,
    /// Explicit-label vocabulary, checked in order.
    pub label_rules: Vec<LabelRule>,
    /// Product-id-keyed corrections for known source defects.
    pub overrides: HashMap<&'static str, Override>,
    /// Policy for names without a quantity token.
    pub missing_quantity: MissingQuantityPolicy,
}

impl RetailerProfile {
    /// Look up the name-parsing rule for a unit token, honoring category
    /// constraints (a constrained row only matches its category; rows are
    /// tried in table order).
    pub fn name_rule(&self, token: &str, category: Option<&str>) -> Option<&UnitRule> {
        self.name_rules.iter().find(|rule| {
            rule.token == token && (rule.category.is_none() || rule.category == category)
        })
    }

    /// Look up the explicit-label rule for a reported per-unit price label.
    pub fn label_rule(&self, label: &str) -> Option<&LabelRule> {
        self.label_rules.iter().find(|rule| rule.label == label)
    }

    /// Look up the override entry for a product id.
    pub fn override_for(&self, id: &str) -> Option<&Override> {
        self.overrides.get(id)
    }
}

/// Find a built-in profile by its lowercase name.
pub fn by_name(name: &str) -> Option<&'static RetailerProfile> {
    match name {
        "mercadona" => Some(&*MERCADONA),
        "eroski" => Some(&*EROSKI),
        "hipercor" => Some(&*HIPERCOR),
        _ => None,
    }
}
