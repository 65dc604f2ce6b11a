//! Hipercor retailer profile.
//!
//! Hipercor uses the capitalized "Kilo" / "Docena" label family for its
//! per-unit price spans and only needs name parsing for multi-unit packs
//! and bottled goods.

use super::{AmountBasis, LabelRule, MissingQuantityPolicy, RetailerProfile, UnitRule};
use crate::overrides::Override;
use crate::units::CanonicalUnit;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

const QUANTITY_PATTERN: &str = r".* (\d+) (unidades|l)";

lazy_static! {
    pub static ref HIPERCOR: RetailerProfile = RetailerProfile {
        name: "hipercor",
        quantity_pattern: Regex::new(QUANTITY_PATTERN)
            .expect("Hipercor quantity pattern should be valid"),
        name_rules: vec![
            UnitRule {
                token: "unidades",
                category: None,
                unit: CanonicalUnit::Each,
                basis: AmountBasis::PerUnit,
            },
            UnitRule {
                token: "l",
                category: None,
                unit: CanonicalUnit::Litre,
                basis: AmountBasis::PerUnit,
            },
        ],
        label_rules: vec![
            LabelRule {
                label: "Kilo",
                unit: CanonicalUnit::Kilogram,
                pack_size: None,
            },
            LabelRule {
                label: "Litro",
                unit: CanonicalUnit::Litre,
                pack_size: None,
            },
            LabelRule {
                label: "100 ml.",
                unit: CanonicalUnit::HundredMillilitres,
                pack_size: None,
            },
            LabelRule {
                label: "Unidad",
                unit: CanonicalUnit::Each,
                pack_size: None,
            },
            LabelRule {
                label: "Docena",
                unit: CanonicalUnit::Each,
                pack_size: Some(12.0),
            },
            LabelRule {
                label: "Dosis",
                unit: CanonicalUnit::Dose,
                pack_size: None,
            },
        ],
        overrides: overrides(),
        missing_quantity: MissingQuantityPolicy::Fail,
    };
}

fn overrides() -> HashMap<&'static str, Override> {
    let mut map = HashMap::new();

    // Per-unit span reports the price of half the pack.
    map.insert("0201030800187", Override::ScaleUnitPrice { factor: 2.0 });

    map
}
