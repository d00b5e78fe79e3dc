//! Contract domain model.
//!
//! # Responsibility
//! - Define the canonical contract record and its lifecycle status.
//! - Provide construction helpers that pin creation-time invariants.
//!
//! # Invariants
//! - `id` is stable and never reused for another contract.
//! - `created_at` is set once at construction and never rewritten.
//! - `updated_at` never moves backwards across mutations.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every contract tracked by the store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ContractId = Uuid;

/// Lifecycle status of a contract.
///
/// A closed set at the type boundary so business rules can attach to it
/// later; no transition logic is enforced anywhere today and callers may
/// set any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    /// Authored but not yet under review.
    Draft,
    /// Circulated to parties for review.
    Review,
    /// Accepted by all parties.
    Approved,
    /// Executed/signed.
    Signed,
}

/// Canonical record for a user-authored contract document.
///
/// `kind` and `jurisdiction` stay free text on purpose: the UI offers
/// fixed dropdowns, but the data layer accepts arbitrary values so
/// template content remains unconstrained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    /// Stable global ID used for lookup, edits and deletion.
    pub id: ContractId,
    /// Display title.
    pub title: String,
    /// Full contract body (free text, usually template-seeded).
    pub content: String,
    /// Lifecycle status; starts as `Draft` on creation.
    pub status: ContractStatus,
    /// Creation time in Unix epoch milliseconds. Immutable after creation.
    pub created_at: i64,
    /// Last mutation time in Unix epoch milliseconds.
    pub updated_at: i64,
    /// Ordered party names, free text.
    pub parties: Vec<String>,
    /// Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub kind: String,
    /// Governing jurisdiction, free text.
    pub jurisdiction: String,
}

impl Contract {
    /// Creates a new draft contract with a generated stable ID.
    ///
    /// # Invariants
    /// - `status` starts as `ContractStatus::Draft`.
    /// - `created_at == updated_at == now_epoch_ms`.
    pub fn new_draft(
        title: impl Into<String>,
        content: impl Into<String>,
        kind: impl Into<String>,
        jurisdiction: impl Into<String>,
        parties: Vec<String>,
        now_epoch_ms: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            status: ContractStatus::Draft,
            created_at: now_epoch_ms,
            updated_at: now_epoch_ms,
            parties,
            kind: kind.into(),
            jurisdiction: jurisdiction.into(),
        }
    }

    /// Advances `updated_at` after a mutation.
    ///
    /// Strictly monotonic: two edits landing in the same millisecond still
    /// produce distinct, increasing timestamps.
    pub fn touch(&mut self, now_epoch_ms: i64) {
        self.updated_at = now_epoch_ms.max(self.updated_at + 1);
    }
}
