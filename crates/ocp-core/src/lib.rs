//! # ocp-core — Foundational Types for the Tender-Process Stack
//!
//! This crate is the bedrock of the stack. It defines the validated
//! primitives every other crate builds on; it depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain identifiers.** [`Cpid`],
//!    [`CountryCode`], [`OwnerId`], [`OwnershipToken`] — all newtypes
//!    with validated constructors. No bare strings for identifiers at
//!    the seams where authorization decisions are made.
//!
//! 2. **Explicit seams for time and uniqueness.** The lifecycle engine
//!    receives a [`Clock`] and an [`IdentifierMinter`] at construction.
//!    There are no framework-managed singletons and no global mutable
//!    state; tests pin time and identifier sequences by passing their
//!    own implementations.
//!
//! 3. **UTC-only timestamps.** [`Timestamp`] enforces UTC with Z suffix,
//!    truncated to milliseconds, because case identifiers embed the
//!    creation instant in epoch milliseconds.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ocp-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod stage;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::CoreError;
pub use identity::{CountryCode, Cpid, IdentifierMinter, OwnerId, OwnershipToken, UuidMinter};
pub use stage::Stage;
pub use temporal::{Clock, SystemClock, Timestamp};
