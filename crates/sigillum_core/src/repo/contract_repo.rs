//! Contract repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide CRUD access to the session's authoritative contract list.
//! - Keep partial-update merge semantics in one place.
//!
//! # Invariants
//! - Insertion order is preserved across reads.
//! - `updated_at` strictly advances on every successful mutation;
//!   `created_at` and `id` are never rewritten.
//! - Absent ids surface as `Ok(None)` / `Ok(false)`, never as errors.

use crate::model::contract::{Contract, ContractId, ContractStatus};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for contract storage operations.
///
/// Deliberately small: missing ids are not errors, so the only failure the
/// in-memory backend can hit is an unusable system clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// System clock reports a time before the Unix epoch.
    Clock(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clock(details) => write!(f, "system clock unusable: {details}"),
        }
    }
}

impl Error for RepoError {}

/// Partial-field update for one contract.
///
/// `None` fields are left untouched by the merge. `id` and `created_at`
/// are not representable here, which is what keeps them immutable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<ContractStatus>,
    pub parties: Option<Vec<String>>,
    pub kind: Option<String>,
    pub jurisdiction: Option<String>,
}

/// Repository interface for contract CRUD operations.
///
/// Single-session, single-thread contract: mutating calls take `&mut self`
/// and are not atomic against concurrent actors. A multi-actor adaptation
/// must add whole-store mutual exclusion at this seam.
pub trait ContractRepository {
    /// Appends one contract and returns its stable id.
    fn insert(&mut self, contract: Contract) -> RepoResult<ContractId>;
    /// Gets one contract by id.
    fn get(&self, id: ContractId) -> RepoResult<Option<Contract>>;
    /// Returns a snapshot copy of all contracts in insertion order.
    fn list(&self) -> RepoResult<Vec<Contract>>;
    /// Merges patch fields into an existing contract and refreshes
    /// `updated_at`. Returns the updated record, or `None` for absent ids.
    fn update(&mut self, id: ContractId, patch: ContractPatch) -> RepoResult<Option<Contract>>;
    /// Removes one contract. Returns whether a removal occurred.
    fn remove(&mut self, id: ContractId) -> RepoResult<bool>;
}

/// In-memory contract repository.
///
/// Owns the session's contract list; all state is lost when the process
/// ends, by contract. Construct one per session (or per test).
#[derive(Debug, Default)]
pub struct InMemoryContractRepository {
    contracts: Vec<Contract>,
}

impl InMemoryContractRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}

impl ContractRepository for InMemoryContractRepository {
    fn insert(&mut self, contract: Contract) -> RepoResult<ContractId> {
        let id = contract.id;
        self.contracts.push(contract);
        Ok(id)
    }

    fn get(&self, id: ContractId) -> RepoResult<Option<Contract>> {
        Ok(self
            .contracts
            .iter()
            .find(|contract| contract.id == id)
            .cloned())
    }

    fn list(&self) -> RepoResult<Vec<Contract>> {
        Ok(self.contracts.clone())
    }

    fn update(&mut self, id: ContractId, patch: ContractPatch) -> RepoResult<Option<Contract>> {
        let now = now_epoch_ms()?;
        let Some(contract) = self
            .contracts
            .iter_mut()
            .find(|contract| contract.id == id)
        else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            contract.title = title;
        }
        if let Some(content) = patch.content {
            contract.content = content;
        }
        if let Some(status) = patch.status {
            contract.status = status;
        }
        if let Some(parties) = patch.parties {
            contract.parties = parties;
        }
        if let Some(kind) = patch.kind {
            contract.kind = kind;
        }
        if let Some(jurisdiction) = patch.jurisdiction {
            contract.jurisdiction = jurisdiction;
        }
        contract.touch(now);

        Ok(Some(contract.clone()))
    }

    fn remove(&mut self, id: ContractId) -> RepoResult<bool> {
        let before = self.contracts.len();
        self.contracts.retain(|contract| contract.id != id);
        Ok(self.contracts.len() < before)
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> RepoResult<i64> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|err| RepoError::Clock(err.to_string()))?;
    Ok(elapsed.as_millis() as i64)
}
