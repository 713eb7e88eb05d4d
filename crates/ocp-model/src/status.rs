//! # Status Vocabulary
//!
//! The shared status and statusDetails vocabulary for tenders and lots.
//!
//! ## Design Decision
//!
//! The source DTO families repeated these enums once per notice shape
//! (PN, PIN, CN, EIN each carried their own copy with identical string
//! lookup tables). Here there is exactly one definition per concept,
//! used at both tender and lot level — the lot-level vocabulary mirrors
//! the tender-level set, so a second enum would only reintroduce the
//! duplication.
//!
//! Status fields are system-owned: callers submit notices with both
//! fields unset, and the lifecycle engine assigns the stage-appropriate
//! pair. That is why model types carry them as `Option` — `None` is the
//! legal pre-assignment state, not a missing-data defect.

use serde::{Deserialize, Serialize};

// ─── Primary Status ──────────────────────────────────────────────────

/// Primary lifecycle status of a tender or a lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Planning phase; the case is not yet open for submissions.
    Planning,
    /// Planning completed, publication of the competitive phase pending.
    Planned,
    /// Open and running.
    Active,
    /// Cancelled by the procuring entity (terminal).
    Cancelled,
    /// Ended without a result (terminal).
    Unsuccessful,
    /// Completed normally (terminal).
    Complete,
    /// Withdrawn from the pipeline (terminal).
    Withdrawn,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Planning => "planning",
            Self::Planned => "planned",
            Self::Active => "active",
            Self::Cancelled => "cancelled",
            Self::Unsuccessful => "unsuccessful",
            Self::Complete => "complete",
            Self::Withdrawn => "withdrawn",
        };
        f.write_str(s)
    }
}

// ─── Status Details ──────────────────────────────────────────────────

/// Secondary, finer-grained status dimension alongside [`Status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusDetails {
    /// No finer-grained state; the primary status stands alone.
    Empty,
    /// Preselection phase in progress.
    Preselection,
    /// Preselection phase finished.
    Preselected,
    /// Prequalification phase in progress.
    Prequalification,
    /// Prequalification phase finished.
    Prequalified,
    /// Evaluation of submissions in progress.
    Evaluation,
    /// Evaluation finished.
    Evaluated,
    /// Contract execution in progress.
    Execution,
    /// Temporarily suspended.
    Suspended,
    /// Blocked pending an external decision.
    Blocked,
}

impl std::fmt::Display for StatusDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Empty => "empty",
            Self::Preselection => "preselection",
            Self::Preselected => "preselected",
            Self::Prequalification => "prequalification",
            Self::Prequalified => "prequalified",
            Self::Evaluation => "evaluation",
            Self::Evaluated => "evaluated",
            Self::Execution => "execution",
            Self::Suspended => "suspended",
            Self::Blocked => "blocked",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Planning).unwrap(), "\"planning\"");
        assert_eq!(serde_json::to_string(&Status::Unsuccessful).unwrap(), "\"unsuccessful\"");
        let parsed: Status = serde_json::from_str("\"withdrawn\"").unwrap();
        assert_eq!(parsed, Status::Withdrawn);
    }

    #[test]
    fn test_status_details_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&StatusDetails::Empty).unwrap(), "\"empty\"");
        let parsed: StatusDetails = serde_json::from_str("\"prequalification\"").unwrap();
        assert_eq!(parsed, StatusDetails::Prequalification);
    }

    #[test]
    fn test_display_matches_wire_form() {
        assert_eq!(Status::Active.to_string(), "active");
        assert_eq!(StatusDetails::Blocked.to_string(), "blocked");
    }
}
