//! # Name-Based Extraction Module
//!
//! When a retailer page gives no explicit per-unit price, the only source of
//! truth is the product name itself: "Detergente máquina 3x60 g", "Agua
//! mineral 1,5 litro". This module pulls the trailing quantity token out of
//! the name with the profile's vocabulary pattern, collapses compound
//! amounts, and derives the unitary price through the profile's declarative
//! conversion rules.
//!
//! ## Features
//!
//! - Per-retailer vocabulary patterns (each shop embeds different unit
//!   tokens in its names)
//! - Greedy matching so the last quantity token in a name wins
//! - Category-sensitive rules (Perfumería is priced per 100 ml)
//! - Per-retailer missing-quantity policy: hard failure or the `N/A`
//!   sentinel (divergent on purpose, see [`MissingQuantityPolicy`])

use crate::errors::NormalizeError;
use crate::product::UnitPricing;
use crate::profiles::{MissingQuantityPolicy, RetailerProfile};
use crate::quantity::{resolve_amount, round_price, RawQuantity};
use log::{debug, trace};

/// Find the trailing quantity token in a product name.
///
/// Returns the raw amount token (compound expressions not yet resolved) and
/// the unit token, or `None` when the name carries no recognizable quantity.
pub fn find_quantity(profile: &RetailerProfile, name: &str) -> Option<RawQuantity> {
    let captures = profile.quantity_pattern.captures(name)?;
    let amount_token = captures.get(1)?.as_str();
    let unit_token = captures.get(2)?.as_str();

    trace!(
        "[{}] name '{}' -> amount token '{}', unit token '{}'",
        profile.name,
        name,
        amount_token,
        unit_token
    );

    Some(RawQuantity {
        amount: resolve_amount(amount_token).ok()?,
        raw_unit: unit_token.to_string(),
    })
}

/// Derive a unitary price from an item price and a product name.
///
/// # Arguments
///
/// * `profile` - The retailer profile supplying vocabulary, rules and policy
/// * `price` - The retailer-displayed total price for the item as sold
/// * `name` - The free-text display name
/// * `category` - The page section the product was listed under, if any
///
/// # Errors
///
/// `UnitParse` when no quantity token is found and the profile's policy is
/// [`MissingQuantityPolicy::Fail`]; `UnrecognizedUnit` when a token matched
/// lexically but has no conversion rule.
///
/// # Examples
///
/// ```rust
/// use shopunit::name_extraction::extract_unit_pricing;
/// use shopunit::product::UnitPricing;
/// use shopunit::profiles::EROSKI;
/// use shopunit::units::CanonicalUnit;
///
/// let pricing = extract_unit_pricing(&EROSKI, 3.0, "Detergente 3x60 g", None)?;
/// assert_eq!(
///     pricing,
///     UnitPricing::Per { unitary_price: 16.67, unit: CanonicalUnit::Kilogram }
/// );
/// # Ok::<(), shopunit::errors::NormalizeError>(())
/// ```
pub fn extract_unit_pricing(
    profile: &RetailerProfile,
    price: f64,
    name: &str,
    category: Option<&str>,
) -> Result<UnitPricing, NormalizeError> {
    let quantity = match find_quantity(profile, name) {
        Some(quantity) => quantity,
        None => {
            return match profile.missing_quantity {
                MissingQuantityPolicy::Fail => {
                    Err(NormalizeError::UnitParse(name.to_string()))
                }
                MissingQuantityPolicy::NotAvailable => {
                    debug!(
                        "[{}] no quantity token in '{}', using N/A sentinel",
                        profile.name, name
                    );
                    Ok(UnitPricing::NotAvailable)
                }
            };
        }
    };

    let rule = profile
        .name_rule(&quantity.raw_unit, category)
        .ok_or_else(|| NormalizeError::UnrecognizedUnit(quantity.raw_unit.clone()))?;

    let unitary_price = round_price(rule.basis.apply(price, quantity.amount));

    debug!(
        "[{}] '{}' -> {} {} -> {:.2} €/{}",
        profile.name, name, quantity.amount, quantity.raw_unit, unitary_price, rule.unit
    );

    Ok(UnitPricing::Per {
        unitary_price,
        unit: rule.unit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::{self, AmountBasis, UnitRule};
    use crate::units::CanonicalUnit;
    use regex::Regex;
    use std::collections::HashMap;

    fn priced(pricing: UnitPricing) -> (f64, CanonicalUnit) {
        match pricing {
            UnitPricing::Per {
                unitary_price,
                unit,
            } => (unitary_price, unit),
            UnitPricing::NotAvailable => panic!("expected priced result"),
        }
    }

    #[test]
    fn test_eroski_grams_to_kilo() {
        let pricing =
            extract_unit_pricing(&profiles::EROSKI, 1.5, "Arroz redondo 500 g", None).unwrap();
        assert_eq!(priced(pricing), (3.0, CanonicalUnit::Kilogram));
    }

    #[test]
    fn test_eroski_compound_multiplier() {
        let pricing =
            extract_unit_pricing(&profiles::EROSKI, 3.0, "Detergente 3x60 g", None).unwrap();
        assert_eq!(priced(pricing), (16.67, CanonicalUnit::Kilogram));
    }

    #[test]
    fn test_eroski_compound_additive() {
        // 2+1 promo pack of single-dose items
        let pricing =
            extract_unit_pricing(&profiles::EROSKI, 6.0, "Quitagrasas 2+1 unid.", None).unwrap();
        assert_eq!(priced(pricing), (2.0, CanonicalUnit::Each));
    }

    #[test]
    fn test_eroski_comma_decimal() {
        let pricing =
            extract_unit_pricing(&profiles::EROSKI, 0.75, "Agua mineral 1,5 litro", None).unwrap();
        assert_eq!(priced(pricing), (0.5, CanonicalUnit::Litre));
    }

    #[test]
    fn test_eroski_centilitres() {
        let pricing =
            extract_unit_pricing(&profiles::EROSKI, 1.2, "Refresco cola 33 cl", None).unwrap();
        // 1.2 / 33 * 100 = 3.6363... -> 3.64
        assert_eq!(priced(pricing), (3.64, CanonicalUnit::Litre));
    }

    #[test]
    fn test_eroski_ml_category_sensitive() {
        let perfumery = extract_unit_pricing(
            &profiles::EROSKI,
            2.0,
            "Colonia fresca 200 ml",
            Some("Perfumería"),
        )
        .unwrap();
        assert_eq!(priced(perfumery), (1.0, CanonicalUnit::HundredMillilitres));

        let grocery =
            extract_unit_pricing(&profiles::EROSKI, 2.0, "Colonia fresca 200 ml", None).unwrap();
        assert_eq!(priced(grocery), (10.0, CanonicalUnit::Litre));
    }

    #[test]
    fn test_eroski_rolls_and_doses() {
        let rolls =
            extract_unit_pricing(&profiles::EROSKI, 2.4, "Papel higiénico 12 rollos", None)
                .unwrap();
        assert_eq!(priced(rolls), (0.2, CanonicalUnit::Each));

        let doses =
            extract_unit_pricing(&profiles::EROSKI, 5.0, "Lavavajillas 25 dosis", None).unwrap();
        assert_eq!(priced(doses), (0.2, CanonicalUnit::Dose));
    }

    #[test]
    fn test_eroski_sentinel_on_unparseable_name() {
        let pricing =
            extract_unit_pricing(&profiles::EROSKI, 1.1, "Bolsas de congelado", None).unwrap();
        assert_eq!(pricing, UnitPricing::NotAvailable);
    }

    #[test]
    fn test_mercadona_fails_hard_on_unparseable_name() {
        let result = extract_unit_pricing(&profiles::MERCADONA, 1.1, "Bolsas de congelado", None);
        assert!(matches!(result, Err(NormalizeError::UnitParse(_))));
    }

    #[test]
    fn test_mercadona_litres_and_cc() {
        let litres =
            extract_unit_pricing(&profiles::MERCADONA, 1.2, "Aceite girasol 1 l", None).unwrap();
        assert_eq!(priced(litres), (1.2, CanonicalUnit::Litre));

        let cc = extract_unit_pricing(&profiles::MERCADONA, 2.0, "Colonia infantil 200 cc", None)
            .unwrap();
        assert_eq!(priced(cc), (1.0, CanonicalUnit::HundredMillilitres));
    }

    #[test]
    fn test_hipercor_units_and_litres() {
        let units =
            extract_unit_pricing(&profiles::HIPERCOR, 1.8, "Yogur natural pack 12 unidades", None)
                .unwrap();
        assert_eq!(priced(units), (0.15, CanonicalUnit::Each));

        let litres =
            extract_unit_pricing(&profiles::HIPERCOR, 2.4, "Leche entera brik 6 l", None).unwrap();
        assert_eq!(priced(litres), (0.4, CanonicalUnit::Litre));
    }

    #[test]
    fn test_last_quantity_token_wins() {
        // Greedy leading .* pushes the match to the trailing token.
        let pricing =
            extract_unit_pricing(&profiles::EROSKI, 4.0, "Tomate frito 3 brik 400 g", None)
                .unwrap();
        assert_eq!(priced(pricing), (10.0, CanonicalUnit::Kilogram));
    }

    #[test]
    fn test_unrecognized_unit_token() {
        // A profile whose pattern admits a token its rule table doesn't
        // cover: the lexical match succeeds, the conversion must fail loudly.
        let profile = profiles::RetailerProfile {
            name: "test",
            quantity_pattern: Regex::new(r".* (\d+) (g|bananas)").unwrap(),
            name_rules: vec![UnitRule {
                token: "g",
                category: None,
                unit: CanonicalUnit::Kilogram,
                basis: AmountBasis::PerThousand,
            }],
            label_rules: vec![],
            overrides: HashMap::new(),
            missing_quantity: profiles::MissingQuantityPolicy::Fail,
        };

        let result = extract_unit_pricing(&profile, 2.0, "Racimo 6 bananas", None);
        assert_eq!(
            result,
            Err(NormalizeError::UnrecognizedUnit("bananas".to_string()))
        );
    }

    #[test]
    fn test_find_quantity_exposes_raw_token() {
        let quantity = find_quantity(&profiles::EROSKI, "Detergente 3x60 g").unwrap();
        assert_eq!(quantity.amount, 180.0);
        assert_eq!(quantity.raw_unit, "g");

        assert!(find_quantity(&profiles::EROSKI, "Sal fina").is_none());
    }
}
