//! # Unit Normalization Module
//!
//! When a retailer page already reports an explicit per-unit price, only the
//! label needs work: each shop prints its own vocabulary ("1 KILO" here,
//! "Kilo" there) and the occasional pack label ("12 UNIDADes", "Docena")
//! whose price must be split down to a single unit. This module maps those
//! labels into the canonical unit set.

use crate::errors::NormalizeError;
use crate::product::UnitPricing;
use crate::profiles::RetailerProfile;
use crate::quantity::round_price;
use crate::units::CanonicalUnit;
use log::{debug, trace};

/// Normalize an explicitly reported `(unitary_price, label)` pair.
///
/// The profile's label vocabulary is consulted first; a label that is
/// already canonical ("kg", "l", "100 ml", "ud", "dosis") passes through
/// unchanged, which makes re-normalizing an already-normalized pair a no-op.
/// Pack labels divide the reported price by the pack size and double-round;
/// identity labels never re-round.
///
/// # Errors
///
/// `UnrecognizedUnit` for any label outside both vocabularies: an
/// unanticipated retailer format, fatal for the product.
///
/// # Examples
///
/// ```rust
/// use shopunit::profiles::HIPERCOR;
/// use shopunit::product::UnitPricing;
/// use shopunit::unit_normalization::normalize_unit_pricing;
/// use shopunit::units::CanonicalUnit;
///
/// let pricing = normalize_unit_pricing(&HIPERCOR, 12.0, "Docena")?;
/// assert_eq!(
///     pricing,
///     UnitPricing::Per { unitary_price: 1.0, unit: CanonicalUnit::Each }
/// );
/// # Ok::<(), shopunit::errors::NormalizeError>(())
/// ```
pub fn normalize_unit_pricing(
    profile: &RetailerProfile,
    unitary_price: f64,
    raw_unit: &str,
) -> Result<UnitPricing, NormalizeError> {
    if let Some(rule) = profile.label_rule(raw_unit) {
        let unitary_price = match rule.pack_size {
            Some(pack_size) => round_price(unitary_price / pack_size),
            None => unitary_price,
        };

        debug!(
            "[{}] label '{}' -> {:.2} €/{}",
            profile.name, raw_unit, unitary_price, rule.unit
        );

        return Ok(UnitPricing::Per {
            unitary_price,
            unit: rule.unit,
        });
    }

    // Already-canonical labels pass through untouched so the normalizer is
    // idempotent over its own output.
    if let Some(unit) = CanonicalUnit::from_label(raw_unit) {
        trace!("[{}] label '{}' already canonical", profile.name, raw_unit);
        return Ok(UnitPricing::Per {
            unitary_price,
            unit,
        });
    }

    Err(NormalizeError::UnrecognizedUnit(raw_unit.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles;

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
    fn test_mercadona_identity_labels() {
        let cases = [
            ("1 KILO", CanonicalUnit::Kilogram),
            ("1 LITRO", CanonicalUnit::Litre),
            ("100 CC", CanonicalUnit::HundredMillilitres),
            ("1 UNIDAD", CanonicalUnit::Each),
            ("1 LAVADO", CanonicalUnit::Dose),
        ];

        for (label, unit) in cases {
            let pricing = normalize_unit_pricing(&profiles::MERCADONA, 2.34, label).unwrap();
            assert_eq!(priced(pricing), (2.34, unit), "label {label}");
        }
    }

    #[test]
    fn test_hipercor_identity_labels() {
        let cases = [
            ("Kilo", CanonicalUnit::Kilogram),
            ("Litro", CanonicalUnit::Litre),
            ("100 ml.", CanonicalUnit::HundredMillilitres),
            ("Unidad", CanonicalUnit::Each),
            ("Dosis", CanonicalUnit::Dose),
        ];

        for (label, unit) in cases {
            let pricing = normalize_unit_pricing(&profiles::HIPERCOR, 0.99, label).unwrap();
            assert_eq!(priced(pricing), (0.99, unit), "label {label}");
        }
    }

    #[test]
    fn test_dozen_labels_split_the_pack() {
        let mercadona =
            normalize_unit_pricing(&profiles::MERCADONA, 12.0, "12 UNIDADes").unwrap();
        assert_eq!(priced(mercadona), (1.0, CanonicalUnit::Each));

        let hipercor = normalize_unit_pricing(&profiles::HIPERCOR, 2.5, "Docena").unwrap();
        // 2.5 / 12 = 0.2083... -> 0.21
        assert_eq!(priced(hipercor), (0.21, CanonicalUnit::Each));
    }

    #[test]
    fn test_identity_labels_do_not_round() {
        // Identity rows pass the reported price through verbatim, even when
        // it carries more precision than two decimals.
        let pricing = normalize_unit_pricing(&profiles::MERCADONA, 1.2345, "1 KILO").unwrap();
        assert_eq!(priced(pricing).0, 1.2345);
    }

    #[test]
    fn test_canonical_labels_are_idempotent() {
        for profile in [&*profiles::MERCADONA, &*profiles::EROSKI, &*profiles::HIPERCOR] {
            for label in ["kg", "l", "100 ml", "ud", "dosis"] {
                let pricing = normalize_unit_pricing(profile, 3.21, label).unwrap();
                let (price, unit) = priced(pricing);
                assert_eq!(price, 3.21);
                assert_eq!(unit.label(), label);
            }
        }
    }

    #[test]
    fn test_unknown_label_is_fatal() {
        assert_eq!(
            normalize_unit_pricing(&profiles::MERCADONA, 1.0, "bananas"),
            Err(NormalizeError::UnrecognizedUnit("bananas".to_string()))
        );
        // Vocabularies do not leak across retailers.
        assert!(normalize_unit_pricing(&profiles::HIPERCOR, 1.0, "1 KILO").is_err());
    }
}
