//! Core domain logic for Sigillum contract lifecycle management.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod wallet;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contract::{Contract, ContractId, ContractStatus};
pub use model::template::{template_by_id, ContractTemplate, CONTRACT_TEMPLATES};
pub use repo::contract_repo::{
    ContractPatch, ContractRepository, InMemoryContractRepository, RepoError, RepoResult,
};
pub use service::contract_service::ContractService;
pub use wallet::connector::{shorten_address, WalletConnector, WalletError, WalletSession};
pub use wallet::provider::{
    FreighterApi, ProviderCallError, SignOptions, WalletInfo, WalletType, SUPPORTED_WALLETS,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
