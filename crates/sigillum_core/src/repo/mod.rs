//! Repository layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define the use-case oriented data access contract for contracts.
//! - Isolate storage details from service orchestration.
//!
//! # Invariants
//! - Missing-id lookups are absent results (`Ok(None)` / `Ok(false)`),
//!   never errors; callers branch on presence.

pub mod contract_repo;
