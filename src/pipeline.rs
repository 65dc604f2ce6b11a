//! # Normalization Pipeline Module
//!
//! The retailer-agnostic orchestrator: takes the raw per-product fields the
//! crawling layer extracted from a page and produces a normalized
//! [`Product`]. Explicit per-unit pricing goes through the unit normalizer;
//! everything else is derived from the product name. Override table entries
//! are consulted first, so a known-defective product is patched before (or
//! instead of) the general algorithm.

use crate::catalog::Catalog;
use crate::errors::NormalizeError;
use crate::name_extraction::extract_unit_pricing;
use crate::product::{Product, RawProduct};
use crate::profiles::RetailerProfile;
use crate::unit_normalization::normalize_unit_pricing;
use log::trace;

/// Normalize a single raw product through a retailer profile.
///
/// Override precedence: a product id present in the profile's override
/// table is patched before the general algorithm runs: a name rewrite
/// feeds the corrected name to the extractor, and a price override replaces
/// the reported `(unitary_price, label)` pair ahead of normalization.
///
/// # Errors
///
/// Per-product: `UnitParse` or `UnrecognizedUnit` from the underlying
/// engine. The caller decides whether to skip, log, or abort the run.
pub fn normalize_product(
    profile: &RetailerProfile,
    raw: &RawProduct,
) -> Result<Product, NormalizeError> {
    let fix = profile.override_for(&raw.id);

    let name = match fix {
        Some(fix) => fix.patch_name(&raw.id, &raw.name),
        None => raw.name.clone(),
    };

    let unit_pricing = match raw.explicit_pricing() {
        Some((unitary_price, label)) => {
            let (unitary_price, label) = match fix {
                Some(fix) => fix.patch_explicit(&raw.id, raw.price, &name, unitary_price, label)?,
                None => (unitary_price, label),
            };
            normalize_unit_pricing(profile, unitary_price, label)?
        }
        None => extract_unit_pricing(profile, raw.price, &name, raw.category.as_deref())?,
    };

    trace!("[{}] normalized product {}", profile.name, raw.id);

    Ok(Product {
        id: raw.id.clone(),
        name,
        price: Some(raw.price),
        unit_pricing: Some(unit_pricing),
    })
}

/// Normalize a batch of raw products into a catalog.
///
/// Per-product errors never abort the batch: failed products are returned
/// alongside the catalog, paired with their ids, for the caller to skip,
/// log, or escalate.
pub fn normalize_batch(
    profile: &RetailerProfile,
    raws: &[RawProduct],
) -> (Catalog, Vec<(String, NormalizeError)>) {
    let mut catalog = Catalog::new();
    let mut failures = Vec::new();

    for raw in raws {
        match normalize_product(profile, raw) {
            Ok(product) => catalog.add_product(product),
            Err(err) => failures.push((raw.id.clone(), err)),
        }
    }

    (catalog, failures)
}
