//! # Lifecycle Error Types
//!
//! The failure vocabulary of the stage-transition engine. Every error is
//! synchronous and terminal for the operation that raised it: nothing is
//! retried internally, and because all checks run strictly before the
//! single persistence call, a failed operation never leaves a partial
//! write behind.
//!
//! Transport layers map these kinds to their own representations (HTTP
//! status codes and the like); that mapping lives with the transport.

use thiserror::Error;

use ocp_core::{Cpid, Stage};
use ocp_model::ReferenceError;

/// Errors raised by the stage-transition engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// No tender process exists at the requested case/stage pair.
    #[error("no tender process found for case {cpid} at stage {stage}")]
    NotFound {
        /// The requested case identifier.
        cpid: Cpid,
        /// The requested stage.
        stage: Stage,
    },

    /// The caller's owner identity or token does not match the stored row.
    #[error("access to case {cpid} denied: {reason}")]
    Forbidden {
        /// The case the caller tried to write.
        cpid: Cpid,
        /// Which credential failed the check.
        reason: String,
    },

    /// A payload identifier or lot reference points at nothing.
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// A system-owned field was supplied by the caller, or a stage guard
    /// rejected the predecessor's state.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// No lot of the predecessor is eligible to carry forward.
    #[error("case {cpid} has no active lots eligible to carry forward")]
    NoActiveLots {
        /// The case whose lots were all ineligible.
        cpid: Cpid,
    },
}

impl From<ReferenceError> for LifecycleError {
    fn from(err: ReferenceError) -> Self {
        Self::InvalidReference(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_error_converts_to_invalid_reference() {
        let err: LifecycleError = ReferenceError::UnknownItemLot {
            item_id: "item-1".into(),
            related_lot: "lot-9".into(),
        }
        .into();
        match err {
            LifecycleError::InvalidReference(detail) => {
                assert!(detail.contains("item-1"));
                assert!(detail.contains("lot-9"));
            }
            other => panic!("expected InvalidReference, got: {other:?}"),
        }
    }

    #[test]
    fn test_display_names_the_case() {
        let err = LifecycleError::NoActiveLots {
            cpid: Cpid::new("ocds-b3wdp1-MD-1").unwrap(),
        };
        assert!(err.to_string().contains("ocds-b3wdp1-MD-1"));
    }
}
