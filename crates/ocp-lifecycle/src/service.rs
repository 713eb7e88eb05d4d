//! # Stage Transition Orchestrator
//!
//! The top-level entry point of the engine. Three operations cover the
//! whole lifecycle:
//!
//! - [`StageTransitionService::create_initial`] — open a case from
//!   scratch at a given stage.
//! - [`StageTransitionService::derive_from_predecessor`] — publish the
//!   next stage from a differently-shaped payload, carrying immutable
//!   descriptive fields forward.
//! - [`StageTransitionService::start_new_stage`] — advance the existing
//!   snapshot without an external payload, slimming it to its still
//!   active lots.
//!
//! Every operation runs its authorization checks, the lot lifecycle
//! transforms, and the cross-reference validator strictly before the
//! single `save` call, so a failed operation never writes anything.
//! Collaborators (repository, identifier minter, clock) are passed at
//! construction; the service holds no global state.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use ocp_core::{Clock, CountryCode, Cpid, IdentifierMinter, OwnerId, OwnershipToken, Stage};
use ocp_model::{verify_references, Item, Lot, Planning, Tender, TenderDocument};

use crate::error::LifecycleError;
use crate::lots::{apply_stage_defaults, assign_fresh_identifiers, carry_forward_lots};
use crate::machine::{ensure_ready_to_advance, initial_status_for};
use crate::process::TenderProcess;
use crate::repository::TenderRepository;

// ─── Derivation Payload ──────────────────────────────────────────────

/// The caller-supplied payload of a stage derivation.
///
/// Only the overridable parts of the successor stage appear here; the
/// immutable descriptive fields are always taken from the predecessor.
/// Omitted parts fall back to the predecessor's values, and omitted
/// lots trigger the carry-forward rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderFragment {
    /// The tender id of the payload; must equal the case identifier.
    pub id: Cpid,
    /// Replacement lots, when the successor reshapes the lot set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lots: Option<Vec<Lot>>,
    /// Replacement items, wired to the replacement lots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
    /// Replacement documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<TenderDocument>>,
    /// Replacement submission languages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_languages: Option<Vec<String>>,
}

impl TenderFragment {
    /// A fragment that overrides nothing: every overridable part falls
    /// back to the predecessor.
    pub fn empty(id: Cpid) -> Self {
        Self {
            id,
            lots: None,
            items: None,
            documents: None,
            submission_languages: None,
        }
    }
}

// ─── Service ─────────────────────────────────────────────────────────

/// The stage-transition orchestrator.
#[derive(Debug, Clone)]
pub struct StageTransitionService<R, M, C> {
    repository: R,
    minter: M,
    clock: C,
    cpid_prefix: String,
}

impl<R, M, C> StageTransitionService<R, M, C>
where
    R: TenderRepository,
    M: IdentifierMinter,
    C: Clock,
{
    /// Build a service around its collaborators. `cpid_prefix` is the
    /// platform's registered OCDS prefix (e.g. `ocds-b3wdp1`).
    pub fn new(repository: R, minter: M, clock: C, cpid_prefix: impl Into<String>) -> Self {
        Self {
            repository,
            minter,
            clock,
            cpid_prefix: cpid_prefix.into(),
        }
    }

    /// Open a new case at the given stage.
    ///
    /// The submitted tender must leave every system-owned field unset:
    /// the tender id, the tender status pair, and each lot's status
    /// pair. A fresh case identifier is minted from the platform prefix,
    /// the buyer's country, and the creation instant; lot and item
    /// identifiers are minted with the reference cascade; the
    /// stage-initial statuses are applied; and the row is persisted with
    /// a freshly minted ownership token.
    pub fn create_initial(
        &self,
        stage: Stage,
        country: &CountryCode,
        owner: &OwnerId,
        tender: Tender,
        planning: Option<Planning>,
    ) -> Result<TenderProcess, LifecycleError> {
        if tender.id.is_some() {
            return Err(LifecycleError::InvalidState(
                "tender id is system-owned and must be unset on creation".into(),
            ));
        }
        if !tender.statuses_unset() {
            return Err(LifecycleError::InvalidState(
                "status fields are system-owned and must be unset on creation".into(),
            ));
        }

        let created_at = self.clock.now();
        let cpid = Cpid::mint(&self.cpid_prefix, country, created_at);
        debug!(%cpid, %stage, "minted case identifier");

        let tender = assign_fresh_identifiers(tender, &cpid, &self.minter)?;
        let (status, details) = initial_status_for(stage);
        let tender = apply_stage_defaults(tender, status, details);
        verify_references(&tender)?;

        let record = TenderProcess {
            cpid: cpid.clone(),
            stage,
            token: OwnershipToken::new(self.minter.mint()),
            owner: owner.clone(),
            created_at,
            tender,
            planning,
        };
        self.repository.save(record.clone());
        info!(%cpid, %stage, lots = record.tender.lots.len(), "created initial stage");
        Ok(record)
    }

    /// Publish the next stage of a case from a caller-supplied payload.
    ///
    /// Loads the predecessor at `(cpid, from_stage)`, checks ownership,
    /// and builds the successor: immutable descriptive fields come from
    /// the predecessor, overridable parts from the fragment where
    /// present, lots via the carry-forward rule. The successor opens in
    /// the stage-initial status for `to_stage` and reuses the
    /// predecessor's token — the caller who owns the case owns every
    /// later stage.
    pub fn derive_from_predecessor(
        &self,
        cpid: &Cpid,
        token: &OwnershipToken,
        owner: &OwnerId,
        from_stage: Stage,
        to_stage: Stage,
        fragment: TenderFragment,
    ) -> Result<TenderProcess, LifecycleError> {
        let predecessor = self.load_authorized(cpid, from_stage, owner, token)?;
        if fragment.id != *cpid {
            return Err(LifecycleError::InvalidReference(format!(
                "payload tender id {} does not match case {cpid}",
                fragment.id
            )));
        }

        let source = &predecessor.tender;
        let lots = carry_forward_lots(&source.lots, fragment.lots);
        let items = fragment.items.unwrap_or_else(|| source.items.clone());
        let documents = fragment.documents.unwrap_or_else(|| source.documents.clone());
        let submission_languages = fragment
            .submission_languages
            .unwrap_or_else(|| source.submission_languages.clone());

        let tender = Tender {
            id: Some(cpid.clone()),
            title: source.title.clone(),
            description: source.description.clone(),
            status: None,
            status_details: None,
            classification: source.classification.clone(),
            procuring_entity: source.procuring_entity.clone(),
            value: source.value.clone(),
            legal_basis: source.legal_basis,
            procurement_method: source.procurement_method,
            procurement_method_details: source.procurement_method_details.clone(),
            main_procurement_category: source.main_procurement_category,
            award_criteria: source.award_criteria,
            submission_languages,
            lots,
            items,
            documents,
            lot_groups: source.lot_groups.clone(),
            flags: source.flags,
        };

        let (status, details) = initial_status_for(to_stage);
        let tender = apply_stage_defaults(tender, status, details);
        verify_references(&tender)?;

        let record = TenderProcess {
            cpid: cpid.clone(),
            stage: to_stage,
            token: predecessor.token.clone(),
            owner: owner.clone(),
            created_at: self.clock.now(),
            tender,
            planning: predecessor.planning.clone(),
        };
        self.repository.save(record.clone());
        info!(%cpid, from = %from_stage, to = %to_stage, "derived stage from predecessor");
        Ok(record)
    }

    /// Advance a case to its next stage without an external payload.
    ///
    /// The predecessor must pass the stage-advance guard (tender
    /// `active`/`empty` with at least one `active`/`empty` lot). The
    /// successor retains only the eligible lots, the items wired to
    /// them, and the documents that still apply — whole-tender documents
    /// unconditionally, lot-scoped documents with their `relatedLots`
    /// pruned to the retained set.
    pub fn start_new_stage(
        &self,
        cpid: &Cpid,
        token: &OwnershipToken,
        from_stage: Stage,
        to_stage: Stage,
        owner: &OwnerId,
    ) -> Result<TenderProcess, LifecycleError> {
        let predecessor = self.load_authorized(cpid, from_stage, owner, token)?;
        let retained = ensure_ready_to_advance(cpid, &predecessor.tender)?;

        let mut tender = predecessor.tender.clone();
        tender.lots.retain(|lot| retained.contains(&lot.id));
        tender.items.retain(|item| retained.contains(&item.related_lot));
        tender.documents.retain(|doc| {
            doc.applies_to_whole_tender()
                || doc.related_lots.iter().any(|id| retained.contains(id))
        });
        for doc in &mut tender.documents {
            doc.related_lots.retain(|id| retained.contains(id));
        }
        verify_references(&tender)?;

        let dropped = predecessor.tender.lots.len() - tender.lots.len();
        let record = TenderProcess {
            cpid: cpid.clone(),
            stage: to_stage,
            token: predecessor.token.clone(),
            owner: owner.clone(),
            created_at: self.clock.now(),
            tender,
            planning: predecessor.planning.clone(),
        };
        self.repository.save(record.clone());
        info!(%cpid, from = %from_stage, to = %to_stage, dropped_lots = dropped, "started new stage");
        Ok(record)
    }

    /// Load a row and verify the caller may write the case.
    ///
    /// Check order is fixed: existence, then owner, then token.
    fn load_authorized(
        &self,
        cpid: &Cpid,
        stage: Stage,
        owner: &OwnerId,
        token: &OwnershipToken,
    ) -> Result<TenderProcess, LifecycleError> {
        let record = self
            .repository
            .get(cpid, stage)
            .ok_or_else(|| LifecycleError::NotFound {
                cpid: cpid.clone(),
                stage,
            })?;

        if record.owner != *owner {
            warn!(%cpid, %stage, "owner mismatch");
            return Err(LifecycleError::Forbidden {
                cpid: cpid.clone(),
                reason: "owner mismatch".into(),
            });
        }
        if record.token != *token {
            warn!(%cpid, %stage, "token mismatch");
            return Err(LifecycleError::Forbidden {
                cpid: cpid.clone(),
                reason: "token mismatch".into(),
            });
        }
        Ok(record)
    }
}
