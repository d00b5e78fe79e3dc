//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `sigillum_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use sigillum_core::{ContractService, InMemoryContractRepository};

fn main() {
    println!("sigillum_core version={}", sigillum_core::core_version());

    let service = ContractService::new(InMemoryContractRepository::new());
    for template in service.templates() {
        println!("template id={} category={}", template.id, template.category);
    }
}
