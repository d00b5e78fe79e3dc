//! Built-in contract template catalog.
//!
//! # Responsibility
//! - Provide read-only boilerplate used to seed new contracts.
//!
//! # Invariants
//! - Template ids are unique within the catalog.
//! - Catalog entries live for the whole process and are never mutated.

use serde::Serialize;

/// Read-only catalog entry used to seed a new contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContractTemplate {
    /// Stable catalog id, doubles as the seeded contract `type`.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Short description for the template picker.
    pub description: &'static str,
    /// Boilerplate body copied into the new contract.
    pub content: &'static str,
    /// Display category.
    pub category: &'static str,
}

/// Built-in templates, in catalog display order.
pub const CONTRACT_TEMPLATES: &[ContractTemplate] = &[
    ContractTemplate {
        id: "nda",
        name: "Non-Disclosure Agreement",
        description: "Standard NDA for protecting confidential information",
        category: "Confidentiality",
        content: r#"NON-DISCLOSURE AGREEMENT

This Non-Disclosure Agreement (the "Agreement") is entered into as of [DATE] by and between:

Party A: [PARTY A NAME]
Address: [PARTY A ADDRESS]

AND

Party B: [PARTY B NAME]
Address: [PARTY B ADDRESS]

WHEREAS, the parties wish to explore a business relationship and may disclose confidential information to one another.

NOW, THEREFORE, in consideration of the mutual covenants and agreements herein contained, the parties agree as follows:

1. DEFINITION OF CONFIDENTIAL INFORMATION
"Confidential Information" means any information disclosed by one party to the other party, either directly or indirectly, in writing, orally, or by inspection of tangible objects.

2. OBLIGATIONS OF RECEIVING PARTY
Each party agrees to hold and maintain the Confidential Information in strictest confidence for the sole and exclusive benefit of the disclosing party.

3. TERM
This Agreement shall remain in effect for a period of [TIME PERIOD] from the date of disclosure.

4. GOVERNING LAW
This Agreement shall be governed by and construed in accordance with the laws of [JURISDICTION]."#,
    },
    ContractTemplate {
        id: "service",
        name: "Service Agreement",
        description: "Contract for provision of services",
        category: "Service",
        content: r#"SERVICE AGREEMENT

This Service Agreement (the "Agreement") is entered into as of [DATE] by and between:

Service Provider: [PROVIDER NAME]
Address: [PROVIDER ADDRESS]

AND

Client: [CLIENT NAME]
Address: [CLIENT ADDRESS]

1. SERVICES
The Service Provider agrees to provide the following services to the Client:
[DESCRIPTION OF SERVICES]

2. COMPENSATION
The Client agrees to pay the Service Provider:
Amount: [PAYMENT AMOUNT]
Payment Terms: [PAYMENT TERMS]

3. TERM AND TERMINATION
This Agreement shall commence on [START DATE] and continue until [END DATE], unless terminated earlier.

4. CONFIDENTIALITY
Both parties agree to maintain confidentiality of proprietary information.

5. GOVERNING LAW
This Agreement shall be governed by the laws of [JURISDICTION]."#,
    },
    ContractTemplate {
        id: "partnership",
        name: "Partnership Agreement",
        description: "Agreement for business partnership",
        category: "Partnership",
        content: r#"PARTNERSHIP AGREEMENT

This Partnership Agreement (the "Agreement") is entered into as of [DATE] by and between:

Partner 1: [PARTNER 1 NAME]
Address: [PARTNER 1 ADDRESS]

AND

Partner 2: [PARTNER 2 NAME]
Address: [PARTNER 2 ADDRESS]

1. FORMATION
The partners hereby form a partnership to conduct business as [BUSINESS NAME].

2. CAPITAL CONTRIBUTIONS
Each partner shall contribute the following to the partnership:
Partner 1: [CONTRIBUTION]
Partner 2: [CONTRIBUTION]

3. PROFIT AND LOSS DISTRIBUTION
Profits and losses shall be distributed as follows:
Partner 1: [PERCENTAGE]%
Partner 2: [PERCENTAGE]%

4. MANAGEMENT
Partners shall have equal rights in the management of the partnership business.

5. GOVERNING LAW
This Agreement shall be governed by the laws of [JURISDICTION]."#,
    },
];

/// Returns one template by catalog id.
pub fn template_by_id(id: &str) -> Option<&'static ContractTemplate> {
    CONTRACT_TEMPLATES
        .iter()
        .find(|template| template.id == id)
}
