//! # Shared Value Types
//!
//! Money, periods, classifications, units, and addresses — the small
//! value-like pieces embedded throughout the tender document model.
//!
//! ## Design Decision
//!
//! The classification scheme enum existed once per notice shape in the
//! source DTO families. There is exactly one [`Scheme`] here.

use serde::{Deserialize, Serialize};

use ocp_core::{CountryCode, Timestamp};

// ─── Money ───────────────────────────────────────────────────────────

/// A monetary amount with its currency code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    /// The amount, in currency units.
    pub amount: f64,
    /// ISO 4217 currency code (e.g. `EUR`, `MDL`).
    pub currency: String,
}

// ─── Period ──────────────────────────────────────────────────────────

/// A start/end time window (e.g. a lot's contract period).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    /// Start of the window.
    pub start_date: Timestamp,
    /// End of the window.
    pub end_date: Timestamp,
}

// ─── Classification ──────────────────────────────────────────────────

/// Classification scheme vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Scheme {
    /// Common Procurement Vocabulary.
    Cpv,
    /// CPV supplementary vocabulary.
    Cpvs,
    /// Goods and Services Identification Number.
    Gsin,
    /// United Nations Standard Products and Services Code.
    Unspsc,
    /// Central Product Classification.
    Cpc,
    /// Russian classification of products by economic activity.
    Okdp,
    /// Russian classification of products (successor of OKDP).
    Okpd,
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Cpv => "CPV",
            Self::Cpvs => "CPVS",
            Self::Gsin => "GSIN",
            Self::Unspsc => "UNSPSC",
            Self::Cpc => "CPC",
            Self::Okdp => "OKDP",
            Self::Okpd => "OKPD",
        };
        f.write_str(s)
    }
}

/// A classification of the procured subject matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// The scheme the code is drawn from.
    pub scheme: Scheme,
    /// The code within the scheme (e.g. a CPV code).
    pub id: String,
    /// Human-readable description of the code.
    pub description: String,
}

// ─── Unit ────────────────────────────────────────────────────────────

/// Unit of measure for an item quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Unit code within the platform's unit code list.
    pub id: String,
    /// Human-readable unit name (e.g. `piece`, `tonne`).
    pub name: String,
}

// ─── Address / Place of Performance ──────────────────────────────────

/// A postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Street name and number.
    pub street_address: String,
    /// City or town.
    pub locality: String,
    /// Region within the country.
    pub region: String,
    /// Postal code, where the country uses them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Country of the address.
    pub country: CountryCode,
}

/// Where a lot will be performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceOfPerformance {
    /// The performance address.
    pub address: Address,
    /// Free-text refinement of the location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Scheme::Cpv).unwrap(), "\"CPV\"");
        let parsed: Scheme = serde_json::from_str("\"UNSPSC\"").unwrap();
        assert_eq!(parsed, Scheme::Unspsc);
    }

    #[test]
    fn test_period_uses_camel_case_keys() {
        let period = Period {
            start_date: Timestamp::parse("2026-01-01T00:00:00Z").unwrap(),
            end_date: Timestamp::parse("2026-12-31T00:00:00Z").unwrap(),
        };
        let json = serde_json::to_value(&period).unwrap();
        assert!(json.get("startDate").is_some());
        assert!(json.get("endDate").is_some());
    }

    #[test]
    fn test_money_roundtrip() {
        let money = Money { amount: 12500.5, currency: "EUR".into() };
        let json = serde_json::to_string(&money).unwrap();
        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, money);
    }
}
