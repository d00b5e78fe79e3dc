use sigillum_core::{
    ContractPatch, ContractService, ContractStatus, InMemoryContractRepository,
};
use std::collections::HashSet;
use uuid::Uuid;

fn service() -> ContractService<InMemoryContractRepository> {
    ContractService::new(InMemoryContractRepository::new())
}

#[test]
fn create_yields_draft_with_unique_id_and_equal_timestamps() {
    let mut service = service();

    let mut ids = HashSet::new();
    for n in 0..5 {
        let contract = service
            .create_contract(
                format!("Contract {n}"),
                "body",
                "nda",
                "us",
                vec!["Acme".to_string()],
            )
            .unwrap();
        assert_eq!(contract.status, ContractStatus::Draft);
        assert_eq!(contract.created_at, contract.updated_at);
        assert!(ids.insert(contract.id), "ids must be unique");
    }
}

#[test]
fn get_contracts_preserves_insertion_order() {
    let mut service = service();
    let first = service
        .create_contract("first", "a", "nda", "us", vec![])
        .unwrap();
    let second = service
        .create_contract("second", "b", "service", "uk", vec![])
        .unwrap();

    let all = service.get_contracts().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[1].id, second.id);
}

#[test]
fn update_changes_only_given_fields_and_advances_updated_at() {
    let mut service = service();
    let created = service
        .create_contract("NDA Draft", "body", "nda", "us", vec!["Acme".to_string()])
        .unwrap();

    let patch = ContractPatch {
        title: Some("X".to_string()),
        ..ContractPatch::default()
    };
    let updated = service
        .update_contract(created.id, patch)
        .unwrap()
        .expect("existing id");

    assert_eq!(updated.title, "X");
    assert_eq!(updated.content, created.content);
    assert_eq!(updated.status, created.status);
    assert_eq!(updated.parties, created.parties);
    assert_eq!(updated.kind, created.kind);
    assert_eq!(updated.jurisdiction, created.jurisdiction);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[test]
fn repeated_updates_keep_advancing_updated_at() {
    let mut service = service();
    let created = service
        .create_contract("doc", "body", "nda", "us", vec![])
        .unwrap();

    let mut last = created.updated_at;
    for n in 0..3 {
        let patch = ContractPatch {
            content: Some(format!("revision {n}")),
            ..ContractPatch::default()
        };
        let updated = service
            .update_contract(created.id, patch)
            .unwrap()
            .expect("existing id");
        assert!(updated.updated_at > last);
        last = updated.updated_at;
    }
}

#[test]
fn update_missing_id_is_absent_and_list_is_unaffected() {
    let mut service = service();
    service
        .create_contract("kept", "body", "nda", "us", vec![])
        .unwrap();

    let patch = ContractPatch {
        title: Some("X".to_string()),
        ..ContractPatch::default()
    };
    let result = service.update_contract(Uuid::new_v4(), patch).unwrap();

    assert!(result.is_none());
    assert_eq!(service.get_contracts().unwrap().len(), 1);
}

#[test]
fn delete_removes_exactly_one_record_and_reports_misses() {
    let mut service = service();
    let doomed = service
        .create_contract("doomed", "body", "nda", "us", vec![])
        .unwrap();
    let kept = service
        .create_contract("kept", "body", "nda", "us", vec![])
        .unwrap();

    assert!(service.delete_contract(doomed.id).unwrap());
    let all = service.get_contracts().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, kept.id);

    assert!(!service.delete_contract(doomed.id).unwrap());
    assert!(!service.delete_contract(Uuid::new_v4()).unwrap());
    assert_eq!(service.get_contracts().unwrap().len(), 1);
}

#[test]
fn get_contracts_returns_an_isolated_snapshot() {
    let mut service = service();
    service
        .create_contract("stable", "body", "nda", "us", vec![])
        .unwrap();

    let mut snapshot = service.get_contracts().unwrap();
    snapshot[0].title = "tampered".to_string();
    snapshot.clear();

    let fresh = service.get_contracts().unwrap();
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].title, "stable");
}

#[test]
fn permissive_kind_and_jurisdiction_accept_arbitrary_strings() {
    let mut service = service();
    let contract = service
        .create_contract("odd", "body", "interpretive-dance", "moon", vec![])
        .unwrap();

    assert_eq!(contract.kind, "interpretive-dance");
    assert_eq!(contract.jurisdiction, "moon");
}

#[test]
fn nda_end_to_end_lifecycle() {
    let mut service = service();

    let created = service
        .create_contract(
            "NDA Draft",
            "body",
            "nda",
            "us",
            vec!["Acme".to_string(), "Globex".to_string()],
        )
        .unwrap();

    let listed = service.get_contracts().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].status, ContractStatus::Draft);
    assert_eq!(listed[0].parties, vec!["Acme", "Globex"]);

    let patch = ContractPatch {
        title: Some("NDA Final".to_string()),
        ..ContractPatch::default()
    };
    service
        .update_contract(created.id, patch)
        .unwrap()
        .expect("existing id");

    let reloaded = service
        .get_contract(created.id)
        .unwrap()
        .expect("existing id");
    assert_eq!(reloaded.title, "NDA Final");
    assert!(reloaded.updated_at > created.created_at);

    assert!(service.delete_contract(created.id).unwrap());
    assert!(service.get_contract(created.id).unwrap().is_none());
    assert!(service.get_contracts().unwrap().is_empty());
}
