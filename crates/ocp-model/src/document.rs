//! # Tender Documents
//!
//! Attachments published with a notice. A document either applies to the
//! whole tender (`relatedLots` empty) or to a subset of its lots.

use serde::{Deserialize, Serialize};

/// Kinds of documents attached to a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// The notice itself.
    #[serde(rename = "tenderNotice")]
    TenderNotice,
    /// Documents bidders need to prepare a submission.
    #[serde(rename = "biddingDocuments")]
    BiddingDocuments,
    /// Technical specifications of the procured subject matter.
    #[serde(rename = "technicalSpecifications")]
    TechnicalSpecifications,
    /// How submissions will be evaluated.
    #[serde(rename = "evaluationCriteria")]
    EvaluationCriteria,
    /// Who may participate.
    #[serde(rename = "eligibilityCriteria")]
    EligibilityCriteria,
    /// Clarifications issued during the procedure.
    #[serde(rename = "clarifications")]
    Clarifications,
    /// Bill of quantities.
    #[serde(rename = "billOfQuantity")]
    BillOfQuantity,
    /// The published procurement plan.
    #[serde(rename = "procurementPlan")]
    ProcurementPlan,
    /// Details of a cancellation.
    #[serde(rename = "cancellationDetails")]
    CancellationDetails,
}

/// A document attached to a tender.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderDocument {
    /// Document identifier, unique within the tender.
    pub id: String,
    /// What kind of document this is.
    pub document_type: DocumentType,
    /// Document title.
    pub title: String,
    /// Optional free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The lots the document pertains to. Empty means the document
    /// applies to the whole tender; non-empty entries must name
    /// existing lot ids.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_lots: Vec<String>,
}

impl TenderDocument {
    /// Whether the document applies to the whole tender rather than to
    /// specific lots.
    pub fn applies_to_whole_tender(&self) -> bool {
        self.related_lots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::sample_document;

    #[test]
    fn test_empty_related_lots_means_whole_tender() {
        let doc = sample_document("doc-1", &[]);
        assert!(doc.applies_to_whole_tender());

        let scoped = sample_document("doc-2", &["lot-1"]);
        assert!(!scoped.applies_to_whole_tender());
    }

    #[test]
    fn test_serde_omits_empty_related_lots() {
        let doc = sample_document("doc-1", &[]);
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("relatedLots").is_none());
        assert_eq!(json["documentType"], "biddingDocuments");
    }
}
