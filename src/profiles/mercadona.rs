//! Mercadona retailer profile.
//!
//! Mercadona reports explicit per-unit pricing for most products, using the
//! upper-case "1 KILO" / "100 CC" label family; the name vocabulary only
//! needs to cover the few products without the per-unit span (bottled goods
//! sold in litres or cc).

use super::{AmountBasis, LabelRule, MissingQuantityPolicy, RetailerProfile, UnitRule};
use crate::overrides::Override;
use crate::units::CanonicalUnit;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

const QUANTITY_PATTERN: &str = r".* (\d+) (l|cc)";

lazy_static! {
    pub static ref MERCADONA: RetailerProfile = RetailerProfile {
        name: "mercadona",
        quantity_pattern: Regex::new(QUANTITY_PATTERN)
            .expect("Mercadona quantity pattern should be valid"),
        name_rules: vec![
            UnitRule {
                token: "l",
                category: None,
                unit: CanonicalUnit::Litre,
                basis: AmountBasis::PerUnit,
            },
            UnitRule {
                token: "cc",
                category: None,
                unit: CanonicalUnit::HundredMillilitres,
                basis: AmountBasis::PerHundredBlock,
            },
        ],
        label_rules: vec![
            LabelRule {
                label: "1 KILO",
                unit: CanonicalUnit::Kilogram,
                pack_size: None,
            },
            LabelRule {
                label: "1 LITRO",
                unit: CanonicalUnit::Litre,
                pack_size: None,
            },
            LabelRule {
                label: "100 CC",
                unit: CanonicalUnit::HundredMillilitres,
                pack_size: None,
            },
            LabelRule {
                label: "1 UNIDAD",
                unit: CanonicalUnit::Each,
                pack_size: None,
            },
            // Casing as printed on the page.
            LabelRule {
                label: "12 UNIDADes",
                unit: CanonicalUnit::Each,
                pack_size: Some(12.0),
            },
            LabelRule {
                label: "1 LAVADO",
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

    // Per-unit span reports the kilo price of a fixed-weight piece; the item
    // price is the real per-unit price.
    map.insert("43401", Override::UnitPriceIsItemPrice { label: "1 UNIDAD" });

    // Detergent priced per kilo on the page; the wash count in the name is
    // the honest basis.
    map.insert(
        "40805",
        Override::UnitPriceFromName {
            pattern: Regex::new(r"(\d+) LAVADOS")
                .expect("Mercadona wash-count pattern should be valid"),
            label: "1 LAVADO",
        },
    );

    map
}
