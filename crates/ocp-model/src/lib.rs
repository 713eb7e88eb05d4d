//! # ocp-model — Tender Document Model
//!
//! The differently-shaped snapshots a procurement case publishes (PN,
//! PIN, CN, EIN) all share this model: a [`Tender`] carrying [`Lot`]s,
//! [`Item`]s, and [`TenderDocument`]s cross-referenced by local
//! identifiers, plus the planning block that travels with the case.
//!
//! ## Design
//!
//! - **One enum per concept.** Status, statusDetails, classification
//!   scheme, legal basis — each vocabulary is defined exactly once and
//!   shared by every notice shape, instead of one copy per DTO family.
//! - **Immutable value construction.** There are no setters; every stage
//!   transition builds a brand-new `Tender` value, so a predecessor
//!   snapshot can never be mutated through an alias held by its
//!   successor.
//! - **System-owned status fields are `Option`s.** Callers submit
//!   notices with `status`/`statusDetails` unset; the lifecycle engine
//!   assigns them. `None` is the legal pre-assignment state.
//! - **The reference graph is checked, not trusted.** The
//!   [`validate`] module verifies lot-id uniqueness and every
//!   item/document reference before anything is persisted.

pub mod document;
pub mod item;
pub mod lot;
pub mod status;
pub mod tender;
pub mod validate;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub mod value;

// Re-export primary types for ergonomic imports.
pub use document::{DocumentType, TenderDocument};
pub use item::Item;
pub use lot::Lot;
pub use status::{Status, StatusDetails};
pub use tender::{
    AwardCriteria, Budget, LegalBasis, LotGroup, MainProcurementCategory, OrganizationReference,
    Planning, ProcedureFlags, ProcurementMethod, Tender,
};
pub use validate::{unique_lot_ids, verify_references, ReferenceError};
pub use value::{Address, Classification, Money, Period, PlaceOfPerformance, Scheme, Unit};
