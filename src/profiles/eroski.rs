//! Eroski retailer profile.
//!
//! Eroski pages never report an explicit per-unit price, so everything is
//! derived from product names. The name vocabulary is the richest of the
//! three shops and the only one with compound amounts ("3x60", "2+1") and
//! comma decimals. This is also the profile with the lenient
//! missing-quantity policy: an unparseable name yields the `N/A` sentinel
//! instead of an error.

use super::{AmountBasis, MissingQuantityPolicy, RetailerProfile, UnitRule};
use crate::overrides::Override;
use crate::units::CanonicalUnit;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

const QUANTITY_PATTERN: &str =
    r".* ((?:\d+[x+])?\d+(?:,\d+)?) (g|litro|cl|ml|rollos|unid\.|kg|dosis)";

lazy_static! {
    pub static ref EROSKI: RetailerProfile = RetailerProfile {
        name: "eroski",
        quantity_pattern: Regex::new(QUANTITY_PATTERN)
            .expect("Eroski quantity pattern should be valid"),
        name_rules: vec![
            UnitRule {
                token: "g",
                category: None,
                unit: CanonicalUnit::Kilogram,
                basis: AmountBasis::PerThousand,
            },
            UnitRule {
                token: "kg",
                category: None,
                unit: CanonicalUnit::Kilogram,
                basis: AmountBasis::PerUnit,
            },
            UnitRule {
                token: "litro",
                category: None,
                unit: CanonicalUnit::Litre,
                basis: AmountBasis::PerUnit,
            },
            UnitRule {
                token: "cl",
                category: None,
                unit: CanonicalUnit::Litre,
                basis: AmountBasis::PerHundred,
            },
            // Perfumery is priced per 100 ml; everything else sold in ml is
            // compared per litre. The constrained row must come first.
            UnitRule {
                token: "ml",
                category: Some("Perfumería"),
                unit: CanonicalUnit::HundredMillilitres,
                basis: AmountBasis::PerHundredBlock,
            },
            UnitRule {
                token: "ml",
                category: None,
                unit: CanonicalUnit::Litre,
                basis: AmountBasis::PerThousand,
            },
            UnitRule {
                token: "rollos",
                category: None,
                unit: CanonicalUnit::Each,
                basis: AmountBasis::PerUnit,
            },
            UnitRule {
                token: "unid.",
                category: None,
                unit: CanonicalUnit::Each,
                basis: AmountBasis::PerUnit,
            },
            UnitRule {
                token: "dosis",
                category: None,
                unit: CanonicalUnit::Dose,
                basis: AmountBasis::PerUnit,
            },
        ],
        label_rules: vec![],
        overrides: overrides(),
        missing_quantity: MissingQuantityPolicy::NotAvailable,
    };
}

fn overrides() -> HashMap<&'static str, Override> {
    let mut map = HashMap::new();

    // Pack labelled 3x80 on the page, actually 3x60.
    map.insert(
        "900782_2058535",
        Override::RewriteName {
            from: "3x80",
            to: "3x60",
        },
    );

    map
}
