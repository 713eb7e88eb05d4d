//! # Status State Machine
//!
//! Stage-initial status defaults and the single centrally enforced
//! transition guard.
//!
//! ## Design Decision
//!
//! The machine governs "is this case ready to progress", not "which
//! exact successor shape is legal". Any eligible predecessor can spawn
//! any successor stage — the caller's choice of operation picks the
//! shape — so the only guard here is the one for slimming an existing
//! snapshot into its next stage: the source must be `active`/`empty`
//! with at least one `active`/`empty` lot. Everything else is an
//! un-guarded document derivation whose child always opens in the
//! stage-initial status, regardless of what the predecessor's own
//! status was.

use std::collections::HashSet;

use ocp_core::{Cpid, Stage};
use ocp_model::{Status, StatusDetails, Tender};

use crate::error::LifecycleError;

/// The status pair a tender (and its lots) opens in at the given stage.
///
/// Planning-phase notices (PN, PIN, EIN) open in `planning`/`empty`; a
/// contract notice opens in `active`/`empty`, whether created standalone
/// or derived.
pub fn initial_status_for(stage: Stage) -> (Status, StatusDetails) {
    if stage.is_planning_notice() {
        (Status::Planning, StatusDetails::Empty)
    } else {
        (Status::Active, StatusDetails::Empty)
    }
}

/// Check the stage-advance guard and collect the lots that survive it.
///
/// The source tender must be `active`/`empty`; of its lots, only those
/// that are themselves `active`/`empty` advance, and there must be at
/// least one.
pub fn ensure_ready_to_advance(
    cpid: &Cpid,
    tender: &Tender,
) -> Result<HashSet<String>, LifecycleError> {
    if !tender.is_active() {
        return Err(LifecycleError::InvalidState(format!(
            "case {cpid} cannot advance: tender status is {}/{}, expected active/empty",
            tender.status.map(|s| s.to_string()).unwrap_or_else(|| "unset".into()),
            tender
                .status_details
                .map(|s| s.to_string())
                .unwrap_or_else(|| "unset".into()),
        )));
    }

    let eligible: HashSet<String> = tender
        .lots
        .iter()
        .filter(|lot| lot.is_active())
        .map(|lot| lot.id.clone())
        .collect();

    if eligible.is_empty() {
        return Err(LifecycleError::NoActiveLots { cpid: cpid.clone() });
    }

    Ok(eligible)
}
