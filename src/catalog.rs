//! # Catalog Module
//!
//! An id-keyed collection of normalized products, plus the named-list
//! lookup over a collaborator dump. The crawling layer saves one dump per
//! shop containing the user's saved shopping lists; the engine only ever
//! sees the raw products of the list it is asked to normalize.

use crate::errors::NormalizeError;
use crate::product::{Product, RawProduct};
use log::debug;
use std::collections::HashMap;

/// Normalized products of one retailer run, keyed by product id.
#[derive(Debug, Default)]
pub struct Catalog {
    products: HashMap<String, Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a product, replacing any previous entry with the same id.
    pub fn add_product(&mut self, product: Product) {
        debug!("Adding product: {}", product);
        self.products.insert(product.id.clone(), product);
    }

    pub fn get_product(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}

/// Select a named shopping list from a collaborator dump.
///
/// # Errors
///
/// `ListNotFound` when the dump has no list under that name, the same
/// failure the crawling layer raises when the saved list is missing from
/// the shop page.
pub fn select_list<'a>(
    lists: &'a HashMap<String, Vec<RawProduct>>,
    name: &str,
) -> Result<&'a [RawProduct], NormalizeError> {
    lists
        .get(name)
        .map(Vec::as_slice)
        .ok_or_else(|| NormalizeError::ListNotFound(name.to_string()))
}
