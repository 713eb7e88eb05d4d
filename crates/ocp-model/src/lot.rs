//! # Lots
//!
//! A lot is a sub-division of the procurement that bidders can bid on
//! individually. Lot identifiers are local to the enclosing tender and
//! are the anchor of the document's reference graph: items name their
//! lot through `relatedLot`, documents through `relatedLots`.

use serde::{Deserialize, Serialize};

use crate::status::{Status, StatusDetails};
use crate::value::{Money, Period, PlaceOfPerformance};

/// A lot within a tender.
///
/// The `id` a caller submits is a placeholder; the lifecycle engine
/// replaces it with a freshly minted identifier and rewrites every
/// item/document reference in the same pass. Status fields are
/// system-owned and must be `None` on submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    /// Lot identifier, unique within the tender.
    pub id: String,
    /// Short name of the lot.
    pub title: String,
    /// What the lot procures.
    pub description: String,
    /// Primary status. Assigned by the lifecycle engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// Secondary status dimension. Assigned by the lifecycle engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<StatusDetails>,
    /// Estimated value of the lot.
    pub value: Money,
    /// When the resulting contract is expected to run.
    pub contract_period: Period,
    /// Where the lot will be performed.
    pub place_of_performance: PlaceOfPerformance,
    /// Whether options are foreseen.
    #[serde(default)]
    pub has_options: bool,
    /// Whether variants may be submitted.
    #[serde(default)]
    pub has_variants: bool,
    /// Whether the contract may be renewed.
    #[serde(default)]
    pub has_renewals: bool,
    /// Whether the procurement recurs.
    #[serde(default)]
    pub is_recurrent: bool,
}

impl Lot {
    /// Whether the lot is eligible to advance to the next stage:
    /// status `active` with no finer-grained details (`empty`).
    pub fn is_active(&self) -> bool {
        self.status == Some(Status::Active) && self.status_details == Some(StatusDetails::Empty)
    }

    /// Whether the caller left the system-owned status fields unset.
    pub fn statuses_unset(&self) -> bool {
        self.status.is_none() && self.status_details.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_lot;

    #[test]
    fn test_is_active_requires_both_dimensions() {
        let mut lot = sample_lot("lot-1");
        assert!(!lot.is_active());

        lot.status = Some(Status::Active);
        lot.status_details = Some(StatusDetails::Empty);
        assert!(lot.is_active());

        lot.status_details = Some(StatusDetails::Suspended);
        assert!(!lot.is_active());

        lot.status = Some(Status::Withdrawn);
        lot.status_details = Some(StatusDetails::Empty);
        assert!(!lot.is_active());
    }

    #[test]
    fn test_statuses_unset_on_fresh_submission() {
        let lot = sample_lot("lot-1");
        assert!(lot.statuses_unset());
    }

    #[test]
    fn test_serde_omits_unset_statuses() {
        let lot = sample_lot("lot-1");
        let json = serde_json::to_value(&lot).unwrap();
        assert!(json.get("status").is_none());
        assert!(json.get("statusDetails").is_none());
        assert!(json.get("contractPeriod").is_some());
    }
}
