//! # Procurement Identity Newtypes
//!
//! Newtype wrappers for the identifiers that flow through the
//! tender-process stack. These prevent accidental identifier confusion —
//! you cannot pass an [`OwnerId`] where a [`Cpid`] is expected, and an
//! [`OwnershipToken`] never leaks into a log line through a stray
//! `Display` of the wrong field.
//!
//! ## Invariant
//!
//! Type-level distinction between identifier namespaces means the
//! ownership checks in the lifecycle engine compare token to token and
//! owner to owner; there is no bare-string call site where the two could
//! be swapped.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::temporal::Timestamp;

// ─── Country Code ────────────────────────────────────────────────────

/// ISO 3166-1 alpha-2 country code, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryCode(String);

impl CountryCode {
    /// Validate and wrap a country code. Exactly two ASCII uppercase
    /// letters are accepted.
    pub fn new(raw: impl Into<String>) -> Result<Self, CoreError> {
        let raw = raw.into();
        let ok = raw.len() == 2 && raw.bytes().all(|b| b.is_ascii_uppercase());
        if !ok {
            return Err(CoreError::InvalidCountryCode(raw));
        }
        Ok(Self(raw))
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── Case Identifier ─────────────────────────────────────────────────

/// Case/process identifier shared by every stage of one procurement case.
///
/// Minted once when the case is opened, in the form
/// `{prefix}-{COUNTRY}-{epoch_millis}` (e.g. `ocds-b3wdp1-MD-1539843614475`),
/// and thereafter carried unchanged by every stage row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cpid(String);

impl Cpid {
    /// Wrap an existing case identifier. Empty strings are rejected.
    pub fn new(raw: impl Into<String>) -> Result<Self, CoreError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(CoreError::InvalidIdentifier(
                "case identifier must not be empty".into(),
            ));
        }
        Ok(Self(raw))
    }

    /// Mint a fresh case identifier from the platform prefix, the buyer's
    /// country, and the creation instant.
    pub fn mint(prefix: &str, country: &CountryCode, at: Timestamp) -> Self {
        Self(format!("{prefix}-{country}-{}", at.epoch_millis()))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cpid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── Owner Identity ──────────────────────────────────────────────────

/// Platform-assigned identity of the party that opened the case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(String);

impl OwnerId {
    /// Wrap an owner identity. Empty strings are rejected.
    pub fn new(raw: impl Into<String>) -> Result<Self, CoreError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(CoreError::InvalidIdentifier(
                "owner identity must not be empty".into(),
            ));
        }
        Ok(Self(raw))
    }

    /// The identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── Ownership Token ─────────────────────────────────────────────────

/// Opaque capability proving the right to write further stages of a case.
///
/// Minted together with the first stage row and reused by every later
/// stage: the caller who opened the case continues to own it. The token
/// is an authorization capability, not a concurrency-control mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnershipToken(String);

impl OwnershipToken {
    /// Wrap a minted token value.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OwnershipToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── Identifier Minting ──────────────────────────────────────────────

/// Source of unique opaque identifiers for lots, items, and tokens.
///
/// Implementations must guarantee global uniqueness across concurrent
/// callers; no ordering is guaranteed or relied upon.
pub trait IdentifierMinter {
    /// Produce a fresh, globally unique identifier.
    fn mint(&self) -> String;
}

/// The production minter, backed by random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidMinter;

impl IdentifierMinter for UuidMinter {
    fn mint(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_country_code_accepts_alpha2() {
        assert_eq!(CountryCode::new("MD").unwrap().as_str(), "MD");
        assert_eq!(CountryCode::new("UA").unwrap().to_string(), "UA");
    }

    #[test]
    fn test_country_code_rejects_malformed() {
        assert!(CountryCode::new("md").is_err());
        assert!(CountryCode::new("MDA").is_err());
        assert!(CountryCode::new("M1").is_err());
        assert!(CountryCode::new("").is_err());
    }

    #[test]
    fn test_cpid_mint_format() {
        let country = CountryCode::new("MD").unwrap();
        let at = Timestamp::from_epoch_millis(1_539_843_614_475).unwrap();
        let cpid = Cpid::mint("ocds-b3wdp1", &country, at);
        assert_eq!(cpid.as_str(), "ocds-b3wdp1-MD-1539843614475");
    }

    #[test]
    fn test_cpid_rejects_empty() {
        assert!(Cpid::new("").is_err());
    }

    #[test]
    fn test_owner_id_rejects_empty() {
        assert!(OwnerId::new("").is_err());
        assert!(OwnerId::new("owner-1").is_ok());
    }

    #[test]
    fn test_uuid_minter_produces_distinct_ids() {
        let minter = UuidMinter;
        let a = minter.mint();
        let b = minter.mint();
        assert_ne!(a, b);
    }

    #[test]
    fn test_token_equality_is_value_equality() {
        let a = OwnershipToken::new("t-1");
        let b = OwnershipToken::new("t-1");
        let c = OwnershipToken::new("t-2");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_cpid_serde_is_transparent_enough() {
        let cpid = Cpid::new("ocds-b3wdp1-MD-1").unwrap();
        let json = serde_json::to_string(&cpid).unwrap();
        let parsed: Cpid = serde_json::from_str(&json).unwrap();
        assert_eq!(cpid, parsed);
    }

    proptest! {
        #[test]
        fn prop_minted_cpid_embeds_country_and_millis(millis in 0i64..4_102_444_800_000) {
            let country = CountryCode::new("MD").unwrap();
            let at = Timestamp::from_epoch_millis(millis).unwrap();
            let cpid = Cpid::mint("ocds-b3wdp1", &country, at);
            prop_assert!(cpid.as_str().starts_with("ocds-b3wdp1-MD-"));
            prop_assert!(cpid.as_str().ends_with(&at.epoch_millis().to_string()));
        }
    }
}
