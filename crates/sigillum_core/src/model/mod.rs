//! Domain model for contract lifecycle records.
//!
//! # Responsibility
//! - Define the canonical contract record shared by store and UI callers.
//! - Hold the built-in read-only template catalog.
//!
//! # Invariants
//! - Every contract is identified by a stable `ContractId`.
//! - Templates are process-lifetime constants and never mutated.

pub mod contract;
pub mod template;
