//! # Canonical Units Module
//!
//! This module defines the closed set of measurement bases every retailer's
//! pricing is normalized into, so unitary prices become comparable across
//! shops regardless of how each shop reports them.

use serde::Serialize;
use std::fmt;

/// The canonical measurement bases used for cross-retailer price comparison.
///
/// Retailer-native vocabularies ("1 KILO", "Kilo", a bare "kg" suffix in a
/// product name, ...) are all mapped into this set; no other unit ever leaves
/// the engine.
///
/// # Examples
///
/// ```rust
/// use shopunit::units::CanonicalUnit;
///
/// assert_eq!(CanonicalUnit::Kilogram.label(), "kg");
/// assert_eq!(CanonicalUnit::from_label("100 ml"), Some(CanonicalUnit::HundredMillilitres));
/// assert_eq!(CanonicalUnit::from_label("bananas"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CanonicalUnit {
    /// Price per kilogram (`kg`)
    #[serde(rename = "kg")]
    Kilogram,
    /// Price per litre (`l`)
    #[serde(rename = "l")]
    Litre,
    /// Price per 100 millilitres (`100 ml`), used for perfumery products
    #[serde(rename = "100 ml")]
    HundredMillilitres,
    /// Price per single unit (`ud`, unidad)
    #[serde(rename = "ud")]
    Each,
    /// Price per dose/wash (`dosis`), used for detergents
    #[serde(rename = "dosis")]
    Dose,
}

impl CanonicalUnit {
    /// The label under which this unit is reported to the export layer.
    pub fn label(&self) -> &'static str {
        match self {
            CanonicalUnit::Kilogram => "kg",
            CanonicalUnit::Litre => "l",
            CanonicalUnit::HundredMillilitres => "100 ml",
            CanonicalUnit::Each => "ud",
            CanonicalUnit::Dose => "dosis",
        }
    }

    /// Parse a canonical label back into its unit.
    ///
    /// Returns `None` for anything outside the canonical set; retailer-native
    /// labels are the unit normalizer's job, not this function's.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "kg" => Some(CanonicalUnit::Kilogram),
            "l" => Some(CanonicalUnit::Litre),
            "100 ml" => Some(CanonicalUnit::HundredMillilitres),
            "ud" => Some(CanonicalUnit::Each),
            "dosis" => Some(CanonicalUnit::Dose),
            _ => None,
        }
    }
}

impl fmt::Display for CanonicalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        let units = [
            CanonicalUnit::Kilogram,
            CanonicalUnit::Litre,
            CanonicalUnit::HundredMillilitres,
            CanonicalUnit::Each,
            CanonicalUnit::Dose,
        ];

        for unit in units {
            assert_eq!(CanonicalUnit::from_label(unit.label()), Some(unit));
        }
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(CanonicalUnit::HundredMillilitres.to_string(), "100 ml");
        assert_eq!(CanonicalUnit::Dose.to_string(), "dosis");
    }

    #[test]
    fn test_unknown_labels_rejected() {
        assert_eq!(CanonicalUnit::from_label("KILO"), None);
        assert_eq!(CanonicalUnit::from_label("ml"), None);
        assert_eq!(CanonicalUnit::from_label(""), None);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&CanonicalUnit::HundredMillilitres).unwrap();
        assert_eq!(json, "\"100 ml\"");
    }
}
