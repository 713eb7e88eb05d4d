//! # Tender Document
//!
//! The tender snapshot embedded in every persisted stage row, together
//! with the descriptive enums the snapshot carries (legal basis,
//! procurement method, award criteria) and the planning block.
//!
//! Each stage holds its own deep copy of this structure. Nothing here is
//! shared by reference across stages — deriving a new stage copies the
//! predecessor's values, so mutating one stage can never alias another.

use serde::{Deserialize, Serialize};

use ocp_core::Cpid;

use crate::document::TenderDocument;
use crate::item::Item;
use crate::lot::Lot;
use crate::status::{Status, StatusDetails};
use crate::value::{Classification, Money, Period};

// ─── Descriptive Enums ───────────────────────────────────────────────

/// Legal basis of the procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegalBasis {
    /// Directive 2014/23/EU (concessions).
    #[serde(rename = "DIRECTIVE_2014_23_EU")]
    Directive2014_23Eu,
    /// Directive 2014/24/EU (classic public procurement).
    #[serde(rename = "DIRECTIVE_2014_24_EU")]
    Directive2014_24Eu,
    /// Directive 2014/25/EU (utilities).
    #[serde(rename = "DIRECTIVE_2014_25_EU")]
    Directive2014_25Eu,
    /// Directive 2009/81/EC (defence and security).
    #[serde(rename = "DIRECTIVE_2009_81_EC")]
    Directive2009_81Ec,
    /// National procurement law.
    #[serde(rename = "NATIONAL_PROCUREMENT_LAW")]
    NationalProcurementLaw,
    /// The buyer's own regulation.
    #[serde(rename = "REGULATION_OF_BUYER")]
    RegulationOfBuyer,
}

/// Procurement method vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcurementMethod {
    /// Open procedure.
    Open,
    /// Selective procedure with a shortlisting phase.
    Selective,
    /// Limited procedure.
    Limited,
    /// Direct award.
    Direct,
}

/// Main category of the procured subject matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MainProcurementCategory {
    /// Physical goods.
    Goods,
    /// Construction and civil works.
    Works,
    /// Services.
    Services,
}

/// How submissions will be ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AwardCriteria {
    /// Lowest price wins.
    #[serde(rename = "priceOnly")]
    PriceOnly,
    /// Lowest whole-life cost wins.
    #[serde(rename = "costOnly")]
    CostOnly,
    /// Quality criteria only.
    #[serde(rename = "qualityOnly")]
    QualityOnly,
    /// Weighted price/quality criteria.
    #[serde(rename = "ratedCriteria")]
    RatedCriteria,
}

// ─── Organization Reference ──────────────────────────────────────────

/// Reference to a registered organization (the procuring entity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationReference {
    /// Registry identifier of the organization.
    pub id: String,
    /// Legal name.
    pub name: String,
}

// ─── Procedure Flags ─────────────────────────────────────────────────

/// Administrative flags of the procedure.
///
/// Flattened into the tender on the wire, so each flag appears as its
/// own camelCase field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcedureFlags {
    /// Shortened deadlines under an accelerated procedure.
    #[serde(default)]
    pub accelerated_procedure: bool,
    /// The procedure is a design contest.
    #[serde(default)]
    pub design_contest: bool,
    /// Workflows are handled electronically end to end.
    #[serde(default)]
    pub electronic_workflows: bool,
    /// Several buyers procure jointly.
    #[serde(default)]
    pub joint_procurement: bool,
    /// A dynamic purchasing system is involved.
    #[serde(default)]
    pub dynamic_purchasing_system: bool,
    /// A framework agreement is involved.
    #[serde(default)]
    pub framework_agreement: bool,
}

// ─── Planning Block ──────────────────────────────────────────────────

/// Budget allocation backing the case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Free-text description of the budget line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Allocated amount.
    pub amount: Money,
    /// Budget period, where the allocation is time-bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

/// Planning information carried alongside the tender through every stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planning {
    /// Why the procurement is being carried out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    /// Budget backing the case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,
}

// ─── Lot Groups ──────────────────────────────────────────────────────

/// A grouping of lots that may be awarded together.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotGroup {
    /// Whether bidders may combine the grouped lots in one award.
    #[serde(default)]
    pub option_to_combine: bool,
    /// The lots in the group.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_lots: Vec<String>,
}

// ─── Tender ──────────────────────────────────────────────────────────

/// The tender snapshot of one stage of a procurement case.
///
/// On submission the `id`, `status`, and `status_details` fields (and
/// the status fields of every lot) must be unset; the lifecycle engine
/// owns them. Once persisted, `id` equals the case identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tender {
    /// Tender identifier; the case identifier once minted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Cpid>,
    /// Title of the procurement.
    pub title: String,
    /// What is being procured.
    pub description: String,
    /// Primary status. Assigned by the lifecycle engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// Secondary status dimension. Assigned by the lifecycle engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<StatusDetails>,
    /// Primary classification of the whole procurement.
    pub classification: Classification,
    /// The buyer running the procedure.
    pub procuring_entity: OrganizationReference,
    /// Total estimated value.
    pub value: Money,
    /// Legal basis of the procedure.
    pub legal_basis: LegalBasis,
    /// Procurement method.
    pub procurement_method: ProcurementMethod,
    /// Free-text refinement of the method (national procedure name).
    pub procurement_method_details: String,
    /// Goods, works, or services.
    pub main_procurement_category: MainProcurementCategory,
    /// How submissions will be ranked, once known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub award_criteria: Option<AwardCriteria>,
    /// Languages submissions may be made in (ISO 639-1 codes).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submission_languages: Vec<String>,
    /// The lots of the procurement.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lots: Vec<Lot>,
    /// The procured items, each tied to one lot.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
    /// Attached documents.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<TenderDocument>,
    /// Groupings of lots that may be awarded together.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lot_groups: Vec<LotGroup>,
    /// Administrative flags of the procedure.
    #[serde(flatten)]
    pub flags: ProcedureFlags,
}

impl Tender {
    /// Whether every system-owned status field — the tender's own pair
    /// and each lot's pair — is unset, as required on creation.
    pub fn statuses_unset(&self) -> bool {
        self.status.is_none()
            && self.status_details.is_none()
            && self.lots.iter().all(|lot| lot.statuses_unset())
    }

    /// Whether the tender is eligible to advance: status `active` with
    /// no finer-grained details.
    pub fn is_active(&self) -> bool {
        self.status == Some(Status::Active) && self.status_details == Some(StatusDetails::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_lot, sample_tender};

    #[test]
    fn test_statuses_unset_covers_lots() {
        let mut tender = sample_tender(vec![sample_lot("lot-1")], vec![], vec![]);
        assert!(tender.statuses_unset());

        tender.lots[0].status = Some(Status::Planning);
        assert!(!tender.statuses_unset());
    }

    #[test]
    fn test_is_active_requires_empty_details() {
        let mut tender = sample_tender(vec![], vec![], vec![]);
        tender.status = Some(Status::Active);
        tender.status_details = Some(StatusDetails::Empty);
        assert!(tender.is_active());

        tender.status_details = Some(StatusDetails::Evaluation);
        assert!(!tender.is_active());
    }

    #[test]
    fn test_flags_flatten_onto_the_tender() {
        let mut tender = sample_tender(vec![], vec![], vec![]);
        tender.flags.joint_procurement = true;
        let json = serde_json::to_value(&tender).unwrap();
        assert_eq!(json["jointProcurement"], true);
        assert!(json.get("flags").is_none());
    }

    #[test]
    fn test_legal_basis_wire_form() {
        let json = serde_json::to_string(&LegalBasis::Directive2014_24Eu).unwrap();
        assert_eq!(json, "\"DIRECTIVE_2014_24_EU\"");
    }

    #[test]
    fn test_tender_serde_roundtrip() {
        let tender = sample_tender(vec![sample_lot("lot-1")], vec![], vec![]);
        let json = serde_json::to_string(&tender).unwrap();
        let parsed: Tender = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.title, tender.title);
        assert_eq!(parsed.lots.len(), 1);
        assert_eq!(parsed.lots[0].id, "lot-1");
    }
}
