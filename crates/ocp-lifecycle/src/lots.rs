//! # Lot Lifecycle Management
//!
//! Identifier assignment and status defaulting for the lots of a tender,
//! plus the carry-forward rule used when one stage is derived from
//! another.
//!
//! ## Identifier rewrite cascade
//!
//! Callers submit lots under placeholder ids and wire their items and
//! documents to those placeholders. [`assign_fresh_identifiers`] replaces
//! each lot id with a minted one and rewrites every reference equal to
//! the lot's *old* id in the same pass, lot by lot. The rewrite is only
//! sound if the old ids are distinct, so uniqueness is checked before
//! anything is rewritten — a duplicated placeholder would otherwise
//! misattribute references between lots.
//!
//! All transforms here take the tender by value and return a new value;
//! nothing mutates a snapshot the caller might still hold.

use ocp_core::{Cpid, IdentifierMinter};
use ocp_model::{unique_lot_ids, Lot, Status, StatusDetails, Tender};

use crate::error::LifecycleError;

/// Replace placeholder identifiers with minted ones.
///
/// Sets the tender id to the case identifier if absent, mints a new id
/// for every lot (rewriting `relatedLot`/`relatedLots` references from
/// the old id to the new one), and mints a new id for every item.
///
/// # Errors
///
/// Fails with an `InvalidReference` kind if two lots share a placeholder
/// id; no rewrite is performed in that case.
pub fn assign_fresh_identifiers(
    mut tender: Tender,
    cpid: &Cpid,
    minter: &impl IdentifierMinter,
) -> Result<Tender, LifecycleError> {
    unique_lot_ids(&tender.lots)?;

    if tender.id.is_none() {
        tender.id = Some(cpid.clone());
    }

    let mut lots = std::mem::take(&mut tender.lots);
    for lot in &mut lots {
        let old_id = std::mem::replace(&mut lot.id, minter.mint());
        for item in &mut tender.items {
            if item.related_lot == old_id {
                item.related_lot.clone_from(&lot.id);
            }
        }
        for document in &mut tender.documents {
            for related in &mut document.related_lots {
                if *related == old_id {
                    related.clone_from(&lot.id);
                }
            }
        }
    }
    tender.lots = lots;

    for item in &mut tender.items {
        item.id = minter.mint();
    }

    Ok(tender)
}

/// Set the tender's and every lot's status pair to the stage default.
pub fn apply_stage_defaults(
    mut tender: Tender,
    status: Status,
    details: StatusDetails,
) -> Tender {
    tender.status = Some(status);
    tender.status_details = Some(details);
    for lot in &mut tender.lots {
        lot.status = Some(status);
        lot.status_details = Some(details);
    }
    tender
}

/// The carry-forward rule for stage derivation.
///
/// If the incoming document omits lots, the predecessor's lots are
/// reused verbatim, ids preserved. If it supplies its own, those are
/// used instead and the predecessor's lots are discarded; the reference
/// validator vets them before anything is persisted.
pub fn carry_forward_lots(predecessor: &[Lot], incoming: Option<Vec<Lot>>) -> Vec<Lot> {
    match incoming {
        Some(lots) if !lots.is_empty() => lots,
        _ => predecessor.to_vec(),
    }
}
