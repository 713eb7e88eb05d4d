//! # Cross-Reference Validator
//!
//! Verifies the reference graph of a tender snapshot: lot ids are unique,
//! every item names an existing lot, and every lot-scoped document names
//! only existing lots.
//!
//! The validator runs as the last step before persistence on every
//! creation and derivation path. A failure aborts the whole operation —
//! nothing is written, so no persisted row ever violates referential
//! closure.
//!
//! Duplicate lot ids are checked explicitly rather than assumed away:
//! the identifier-rewrite cascade in the lifecycle engine maps old id to
//! new id per lot, and duplicated old ids would silently misattribute
//! item and document references. Failing fast here keeps that rewrite
//! sound.

use std::collections::HashSet;

use thiserror::Error;

use crate::lot::Lot;
use crate::tender::Tender;

/// A violation of the tender's reference graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    /// Two lots share the same identifier.
    #[error("duplicate lot id {id:?} within tender")]
    DuplicateLotId {
        /// The duplicated lot identifier.
        id: String,
    },

    /// An item names a lot that does not exist.
    #[error("item {item_id:?} references unknown lot {related_lot:?}")]
    UnknownItemLot {
        /// The offending item.
        item_id: String,
        /// The missing lot identifier.
        related_lot: String,
    },

    /// A document names a lot that does not exist.
    #[error("document {document_id:?} references unknown lot {related_lot:?}")]
    UnknownDocumentLot {
        /// The offending document.
        document_id: String,
        /// The missing lot identifier.
        related_lot: String,
    },
}

/// Collect the set of lot ids, failing on the first duplicate.
pub fn unique_lot_ids(lots: &[Lot]) -> Result<HashSet<&str>, ReferenceError> {
    let mut ids = HashSet::with_capacity(lots.len());
    for lot in lots {
        if !ids.insert(lot.id.as_str()) {
            return Err(ReferenceError::DuplicateLotId { id: lot.id.clone() });
        }
    }
    Ok(ids)
}

/// Verify the full reference graph of a tender.
///
/// Checks, in order: lot-id uniqueness, item `relatedLot` references,
/// document `relatedLots` references. Documents with an empty
/// `relatedLots` apply to the whole tender and reference nothing.
pub fn verify_references(tender: &Tender) -> Result<(), ReferenceError> {
    let lot_ids = unique_lot_ids(&tender.lots)?;

    for item in &tender.items {
        if !lot_ids.contains(item.related_lot.as_str()) {
            return Err(ReferenceError::UnknownItemLot {
                item_id: item.id.clone(),
                related_lot: item.related_lot.clone(),
            });
        }
    }

    for document in &tender.documents {
        for related in &document.related_lots {
            if !lot_ids.contains(related.as_str()) {
                return Err(ReferenceError::UnknownDocumentLot {
                    document_id: document.id.clone(),
                    related_lot: related.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_document, sample_item, sample_lot, sample_tender};

    #[test]
    fn test_closed_reference_graph_passes() {
        let tender = sample_tender(
            vec![sample_lot("lot-1"), sample_lot("lot-2")],
            vec![sample_item("item-1", "lot-1"), sample_item("item-2", "lot-2")],
            vec![
                sample_document("doc-1", &[]),
                sample_document("doc-2", &["lot-1", "lot-2"]),
            ],
        );
        assert!(verify_references(&tender).is_ok());
    }

    #[test]
    fn test_item_referencing_missing_lot_fails() {
        let tender = sample_tender(
            vec![sample_lot("lot-1")],
            vec![sample_item("item-1", "lot-9")],
            vec![],
        );
        assert_eq!(
            verify_references(&tender),
            Err(ReferenceError::UnknownItemLot {
                item_id: "item-1".into(),
                related_lot: "lot-9".into(),
            })
        );
    }

    #[test]
    fn test_document_referencing_missing_lot_fails() {
        let tender = sample_tender(
            vec![sample_lot("lot-1")],
            vec![],
            vec![sample_document("doc-1", &["lot-1", "lot-9"])],
        );
        assert_eq!(
            verify_references(&tender),
            Err(ReferenceError::UnknownDocumentLot {
                document_id: "doc-1".into(),
                related_lot: "lot-9".into(),
            })
        );
    }

    #[test]
    fn test_whole_tender_document_never_fails() {
        let tender = sample_tender(vec![], vec![], vec![sample_document("doc-1", &[])]);
        assert!(verify_references(&tender).is_ok());
    }

    #[test]
    fn test_duplicate_lot_ids_fail_fast() {
        let tender = sample_tender(vec![sample_lot("lot-1"), sample_lot("lot-1")], vec![], vec![]);
        assert_eq!(
            verify_references(&tender),
            Err(ReferenceError::DuplicateLotId { id: "lot-1".into() })
        );
    }

    #[test]
    fn test_empty_tender_passes() {
        let tender = sample_tender(vec![], vec![], vec![]);
        assert!(verify_references(&tender).is_ok());
    }
}
