//! # Shopunit
//!
//! A price-normalization and unit-extraction engine for comparing grocery
//! prices across online retailers. Raw per-product data scraped from a shop
//! page comes in; products carrying a unitary price in a canonical unit
//! (kg, l, 100 ml, ud, dosis) come out, so a litre of milk costs the same
//! kind of number everywhere.
//!
//! The engine is pure and deterministic: no I/O, no shared state, each
//! product normalized independently. Everything shop-specific (vocabulary
//! patterns, conversion rules, known data-defect overrides, the policy for
//! unparseable names) lives in a [`profiles::RetailerProfile`].

pub mod catalog;
pub mod errors;
pub mod name_extraction;
pub mod overrides;
pub mod pipeline;
pub mod product;
pub mod profiles;
pub mod quantity;
pub mod unit_normalization;
pub mod units;
