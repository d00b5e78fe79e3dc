//! Contract use-case service.
//!
//! # Responsibility
//! - Provide create/get/list/update/delete entry points for UI callers.
//! - Seed new contracts from the built-in template catalog.
//!
//! # Invariants
//! - New contracts start as `Draft` with `created_at == updated_at`.
//! - Missing ids surface as absent results, never as errors.
//! - The service is constructed explicitly and injected at session start;
//!   one fresh instance per session (or per test).

use crate::model::contract::{Contract, ContractId};
use crate::model::template::{template_by_id, ContractTemplate, CONTRACT_TEMPLATES};
use crate::repo::contract_repo::{now_epoch_ms, ContractPatch, ContractRepository, RepoResult};
use log::{debug, info};

/// Contract store facade over repository implementations.
pub struct ContractService<R: ContractRepository> {
    repo: R,
}

impl<R: ContractRepository> ContractService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one draft contract and returns the created record.
    pub fn create_contract(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        kind: impl Into<String>,
        jurisdiction: impl Into<String>,
        parties: Vec<String>,
    ) -> RepoResult<Contract> {
        let contract = Contract::new_draft(
            title,
            content,
            kind,
            jurisdiction,
            parties,
            now_epoch_ms()?,
        );
        self.repo.insert(contract.clone())?;
        info!(
            "event=contract_created module=store status=ok id={} type={}",
            contract.id, contract.kind
        );
        Ok(contract)
    }

    /// Creates one draft contract seeded from a catalog template.
    ///
    /// Returns `None` when the template id is unknown.
    pub fn create_from_template(
        &mut self,
        template_id: &str,
        title: impl Into<String>,
        jurisdiction: impl Into<String>,
        parties: Vec<String>,
    ) -> RepoResult<Option<Contract>> {
        let Some(template) = template_by_id(template_id) else {
            debug!(
                "event=template_lookup module=store status=missing template_id={template_id}"
            );
            return Ok(None);
        };

        self.create_contract(title, template.content, template.id, jurisdiction, parties)
            .map(Some)
    }

    /// Returns a snapshot copy of all contracts in insertion order.
    ///
    /// Mutating the returned vector does not affect the store.
    pub fn get_contracts(&self) -> RepoResult<Vec<Contract>> {
        self.repo.list()
    }

    /// Gets one contract by stable id.
    pub fn get_contract(&self, id: ContractId) -> RepoResult<Option<Contract>> {
        self.repo.get(id)
    }

    /// Merges patch fields into an existing contract.
    ///
    /// Returns the updated record with a refreshed `updated_at`, or `None`
    /// when the id is absent.
    pub fn update_contract(
        &mut self,
        id: ContractId,
        patch: ContractPatch,
    ) -> RepoResult<Option<Contract>> {
        let updated = self.repo.update(id, patch)?;
        if updated.is_some() {
            info!("event=contract_updated module=store status=ok id={id}");
        }
        Ok(updated)
    }

    /// Removes one contract. Returns whether a removal occurred.
    pub fn delete_contract(&mut self, id: ContractId) -> RepoResult<bool> {
        let removed = self.repo.remove(id)?;
        if removed {
            info!("event=contract_deleted module=store status=ok id={id}");
        }
        Ok(removed)
    }

    /// Returns the built-in template catalog.
    pub fn templates(&self) -> &'static [ContractTemplate] {
        CONTRACT_TEMPLATES
    }

    /// Returns one template by catalog id.
    pub fn template(&self, template_id: &str) -> Option<&'static ContractTemplate> {
        template_by_id(template_id)
    }
}
