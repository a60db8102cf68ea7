use std::fs;
use std::path::Path;

use chain_importer::*;

fn seed(store: &MemoryDataStore, emails: &[&str]) -> ChainId {
    let chain_id = store
        .insert_chain(&NewChain::builder().build())
        .unwrap()
        .into_id();
    let accounts: Vec<NewAccount> = emails
        .iter()
        .enumerate()
        .map(|(i, email)| {
            NewAccount::builder()
                .chain_id(chain_id.clone())
                .email(*email)
                .account_index(i + 1)
                .account_group(AccountGroup::Default)
                .build()
        })
        .collect();
    store.insert_accounts(&accounts).unwrap();
    chain_id
}

#[test]
fn test_import_example_file() {
    let store = MemoryDataStore::new();
    let importer = ChainImporter::new(&store);

    let outcome = importer
        .import_file(Path::new("tests/data/chain-example.txt"), AccountGroup::Default)
        .unwrap();

    let chain_id = outcome.chain_id().cloned().unwrap();
    assert_eq!(outcome.inserted(), 2);
    assert_eq!(store.chains().unwrap().len(), 1);

    let accounts = store.accounts_for_chain(&chain_id).unwrap();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].email(), "a@x.com");
    assert_eq!(accounts[0].account_index(), 1);
    assert_eq!(accounts[1].email(), "b@x.com");
    assert_eq!(accounts[1].account_index(), 2);
    for account in &accounts {
        assert_eq!(account.account_group(), AccountGroup::Default);
        assert_eq!(account.state(), UNUSED_STATE);
        assert_eq!(account.password(), DEFAULT_PASSWORD);
        assert!(!account.disabled());
        assert!(account.updated_at().is_none());
    }
}

#[test]
fn test_import_indices_follow_line_order() {
    let store = MemoryDataStore::new();
    let outcome = ChainImporter::new(&store)
        .import_file(Path::new("tests/data/chain-three.txt"), AccountGroup::Squirtle)
        .unwrap();

    let accounts = store
        .accounts_for_chain(outcome.chain_id().unwrap())
        .unwrap();
    let rows: Vec<_> = accounts
        .iter()
        .map(|a| (a.account_index(), a.email().to_string(), a.account_group()))
        .collect();

    assert_eq!(
        rows,
        vec![
            (1, "mia.hart@outlook.com".to_string(), AccountGroup::Squirtle),
            (2, "leo.park@outlook.com".to_string(), AccountGroup::Squirtle),
            (3, "zoe.ward@outlook.com".to_string(), AccountGroup::Squirtle),
        ]
    );
}

#[test]
fn test_import_blank_file_creates_nothing() {
    let store = MemoryDataStore::new();
    let outcome = ChainImporter::new(&store)
        .import_file(Path::new("tests/data/chain-blank.txt"), AccountGroup::Default)
        .unwrap();

    assert_eq!(outcome, ImportOutcome::Skipped(SkipReason::NoAccounts));
    assert!(store.chains().unwrap().is_empty());
    assert!(store.accounts().unwrap().is_empty());
}

#[test]
fn test_import_skips_when_last_alias_exists() {
    let store = MemoryDataStore::new();
    seed(&store, &["zoe.ward@balldfaiof.com"]);

    let outcome = ChainImporter::new(&store)
        .import_file(Path::new("tests/data/chain-three.txt"), AccountGroup::Default)
        .unwrap();

    assert_eq!(
        outcome,
        ImportOutcome::Skipped(SkipReason::Duplicate("zoe.ward@outlook.com".to_string()))
    );
    assert_eq!(store.chains().unwrap().len(), 1);
    assert_eq!(store.accounts().unwrap().len(), 1);
}

#[test]
fn test_import_ignores_aliases_of_earlier_lines() {
    let store = MemoryDataStore::new();
    seed(&store, &["mia.hart@gmail.com"]);

    let outcome = ChainImporter::new(&store)
        .import_file(Path::new("tests/data/chain-three.txt"), AccountGroup::Default)
        .unwrap();

    assert_eq!(outcome.inserted(), 3);
    assert_eq!(store.chains().unwrap().len(), 2);
}

#[test]
fn test_import_ignores_exact_address_in_other_domain() {
    let store = MemoryDataStore::new();
    seed(&store, &["b@x.com"]);

    let outcome = ChainImporter::new(&store)
        .import_file(Path::new("tests/data/chain-example.txt"), AccountGroup::Default)
        .unwrap();

    assert!(outcome.chain_id().is_some());
}

#[test]
fn test_delete_chain() {
    let store = MemoryDataStore::new();
    let kept = seed(&store, &["keep@gmail.com"]);
    let importer = ChainImporter::new(&store);
    let outcome = importer
        .import_file(Path::new("tests/data/chain-example.txt"), AccountGroup::Default)
        .unwrap();
    let chain_id = outcome.chain_id().cloned().unwrap();

    importer.delete_chain(&chain_id).unwrap();

    assert!(store.accounts_for_chain(&chain_id).unwrap().is_empty());
    let chains: Vec<_> = store.chains().unwrap().into_iter().map(|c| c.id).collect();
    assert_eq!(chains, vec![kept.clone()]);
    assert_eq!(store.accounts_for_chain(&kept).unwrap().len(), 1);
}

#[test]
fn test_delete_unknown_chain_is_noop() {
    let store = MemoryDataStore::new();
    seed(&store, &["keep@gmail.com"]);

    ChainImporter::new(&store)
        .delete_chain(&RecordId::from("does-not-exist"))
        .unwrap();

    assert_eq!(store.chains().unwrap().len(), 1);
    assert_eq!(store.accounts().unwrap().len(), 1);
}

#[test]
fn test_pipeline_over_directory() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["chain-example.txt", "chain-blank.txt", "chain-three.txt"] {
        fs::copy(Path::new("tests/data").join(name), dir.path().join(name)).unwrap();
    }

    let store = MemoryDataStore::new();
    seed(&store, &["b@gmail.com"]);

    let reports = ChainFilePipeline::new(&store, dir.path(), AccountGroup::Squirtle)
        .run()
        .unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].file, dir.path().join("chain-three.txt"));
    assert_eq!(reports[0].inserted, 3);
    assert_eq!(store.chains().unwrap().len(), 2);
}
