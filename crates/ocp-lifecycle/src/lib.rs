//! # ocp-lifecycle — Stage-Transition Engine
//!
//! Manages the lifecycle of a procurement case as it advances through
//! the notice stages of the publication pipeline: PN → PIN → CN, with
//! the EIN variant. Each stage is a separately persisted snapshot of the
//! same case, keyed by (cpid, stage); advancing never mutates an
//! existing row.
//!
//! ## Components
//!
//! - [`service::StageTransitionService`] — the orchestrator: create a
//!   stage from scratch, derive one from a predecessor payload, or slim
//!   the existing snapshot into the next stage.
//! - [`lots`] — identifier minting with the reference cascade, stage
//!   status defaults, and the lot carry-forward rule.
//! - [`machine`] — stage-initial statuses and the stage-advance guard.
//! - [`repository`] — the persistence seam plus an in-memory
//!   implementation.
//!
//! ## Design
//!
//! Collaborators are constructor-passed (`TenderRepository`,
//! `IdentifierMinter`, `Clock`); there is no global state. Transforms
//! take values and return values — each transition produces a brand-new
//! snapshot, never a mutation of a shared one. All precondition checks
//! and the cross-reference validator run strictly before the single
//! persistence call, so failures never leave partial state behind.

pub mod error;
pub mod lots;
pub mod machine;
pub mod process;
pub mod repository;
pub mod service;

// Re-export primary types for ergonomic imports.
pub use error::LifecycleError;
pub use lots::{apply_stage_defaults, assign_fresh_identifiers, carry_forward_lots};
pub use machine::{ensure_ready_to_advance, initial_status_for};
pub use process::TenderProcess;
pub use repository::{InMemoryRepository, TenderRepository};
pub use service::{StageTransitionService, TenderFragment};
