//! # Tender Process Rows
//!
//! The persisted unit of the stack. Each row is one stage snapshot of a
//! case, keyed by the (cpid, stage) pair. Advancing a case creates a new
//! row; the predecessor remains untouched as immutable history.

use serde::{Deserialize, Serialize};

use ocp_core::{Cpid, OwnerId, OwnershipToken, Stage, Timestamp};
use ocp_model::{Planning, Tender};

/// One persisted stage snapshot of a procurement case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderProcess {
    /// Case identifier shared by all stages of the case.
    pub cpid: Cpid,
    /// Which notice shape this row represents.
    pub stage: Stage,
    /// Capability proving the right to write further stages. Minted with
    /// the first row of the case and reused by every later row.
    pub token: OwnershipToken,
    /// Identity of the party that owns the case.
    pub owner: OwnerId,
    /// When this row was created.
    pub created_at: Timestamp,
    /// The tender snapshot of this stage.
    pub tender: Tender,
    /// Planning information carried with the case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planning: Option<Planning>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocp_model::testing::sample_tender;

    #[test]
    fn test_serde_uses_camel_case_keys() {
        let record = TenderProcess {
            cpid: Cpid::new("ocds-b3wdp1-MD-1").unwrap(),
            stage: Stage::Pn,
            token: OwnershipToken::new("token-1"),
            owner: OwnerId::new("owner-1").unwrap(),
            created_at: Timestamp::parse("2026-01-15T12:00:00Z").unwrap(),
            tender: sample_tender(vec![], vec![], vec![]),
            planning: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["cpid"], "ocds-b3wdp1-MD-1");
        assert_eq!(json["stage"], "PN");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("planning").is_none());
    }
}
