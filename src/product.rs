//! # Product Model Module
//!
//! This module contains the normalized product record consumed by the
//! export/reporting layer, together with the raw per-product input handed
//! over by the (out-of-scope) crawling layer.

use crate::units::CanonicalUnit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized unitary price, or the sentinel for products whose pricing
/// could not be derived (profiles with the lenient policy only).
///
/// A price is never present without its unit: the `Per` variant carries both
/// by construction, and `NotAvailable` carries neither. The sentinel surfaces
/// to exporters as `(0.0, "N/A")` via [`UnitPricing::unitary_price`] and
/// [`UnitPricing::unit_label`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UnitPricing {
    /// Price per canonical unit.
    Per {
        unitary_price: f64,
        unit: CanonicalUnit,
    },
    /// No quantity token could be derived from the product name; serialized
    /// as `null`.
    NotAvailable,
}

impl UnitPricing {
    /// The unitary price, `0.0` for the sentinel.
    pub fn unitary_price(&self) -> f64 {
        match self {
            UnitPricing::Per { unitary_price, .. } => *unitary_price,
            UnitPricing::NotAvailable => 0.0,
        }
    }

    /// The unit label, `"N/A"` for the sentinel.
    pub fn unit_label(&self) -> &'static str {
        match self {
            UnitPricing::Per { unit, .. } => unit.label(),
            UnitPricing::NotAvailable => "N/A",
        }
    }
}

/// A product as normalized by the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    /// Retailer-native identifier, opaque to the engine.
    pub id: String,
    /// Display name, possibly patched by an override table entry.
    pub name: String,
    /// Retailer-displayed total price for the item as sold (a pack, a
    /// bottle, a dozen).
    pub price: Option<f64>,
    /// Normalized pricing, absent for products built without one.
    pub unit_pricing: Option<UnitPricing>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: None,
            unit_pricing: None,
        }
    }
}

impl fmt::Display for Product {
    /// Formats as `id - name >>> 9.99 € [1.23 €/kg]`, omitting each priced
    /// part when absent. Sentinel pricing prints nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.id, self.name)?;

        if let Some(price) = self.price {
            write!(f, " >>> {price:.2} €")?;
        }

        if let Some(UnitPricing::Per {
            unitary_price,
            unit,
        }) = &self.unit_pricing
        {
            write!(f, " [{unitary_price:.2} €/{unit}]")?;
        }

        Ok(())
    }
}

/// Per-product input consumed from the crawling/parsing layer.
///
/// `raw_unitary_price` and `raw_unit_label` are present together when the
/// retailer page exposes explicit per-unit pricing; `category` affects
/// ml-unit resolution for one retailer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawProduct {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub raw_unitary_price: Option<f64>,
    #[serde(default)]
    pub raw_unit_label: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl RawProduct {
    /// The explicit per-unit pricing pair, if the page reported both halves.
    pub fn explicit_pricing(&self) -> Option<(f64, &str)> {
        match (self.raw_unitary_price, self.raw_unit_label.as_deref()) {
            (Some(price), Some(label)) => Some((price, label)),
            _ => None,
        }
    }
}
