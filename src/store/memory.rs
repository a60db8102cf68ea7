//! Memory implementation of the data store.
use log::debug;
use std::fmt;
use std::sync::RwLock;

use chrono::{DateTime, Utc};

use super::DataStore;
use crate::domain::AccountId;
use crate::domain::AccountRef;
use crate::domain::Chain;
use crate::domain::ChainId;
use crate::domain::NewAccount;
use crate::domain::NewChain;
use crate::domain::RecordId;
use crate::domain::StoreError;

/// A chain row kept by [`MemoryDataStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct StoredChain {
    pub id: ChainId,
    pub created_at: DateTime<Utc>,
}

/// An account row kept by [`MemoryDataStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct StoredAccount {
    pub id: AccountId,
    pub account: NewAccount,
}

#[derive(Default)]
struct Tables {
    last_id: i64,
    chains: Vec<StoredChain>,
    accounts: Vec<StoredAccount>,
}

impl Tables {
    fn next_id(&mut self) -> RecordId {
        self.last_id += 1;
        RecordId::Numeric(self.last_id)
    }
}

/// A data store that keeps both collections in memory. Ids are generated from a single
/// counter shared by chains and accounts, starting at 1.
pub struct MemoryDataStore {
    tables: RwLock<Tables>,
}

impl fmt::Debug for MemoryDataStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryDataStore").finish()
    }
}

impl MemoryDataStore {
    pub fn new() -> Self {
        MemoryDataStore {
            tables: RwLock::new(Tables::default()),
        }
    }

    /// Snapshot of the stored chains in insertion order.
    pub fn chains(&self) -> Result<Vec<StoredChain>, StoreError> {
        Ok(self.tables.read()?.chains.clone())
    }

    /// Snapshot of the stored accounts in insertion order.
    pub fn accounts(&self) -> Result<Vec<StoredAccount>, StoreError> {
        Ok(self.tables.read()?.accounts.clone())
    }

    /// Accounts belonging to the given chain, in insertion order.
    pub fn accounts_for_chain(&self, chain_id: &ChainId) -> Result<Vec<NewAccount>, StoreError> {
        Ok(self
            .tables
            .read()?
            .accounts
            .iter()
            .filter(|stored| stored.account.chain_id() == chain_id)
            .map(|stored| stored.account.clone())
            .collect())
    }
}

impl Default for MemoryDataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStore for MemoryDataStore {
    fn insert_chain(&self, chain: &NewChain) -> Result<Chain, StoreError> {
        let mut tables = self.tables.write()?;
        let id = tables.next_id();
        tables.chains.push(StoredChain {
            id: id.clone(),
            created_at: chain.created_at(),
        });
        debug!("Stored chain {} in memory", id);
        Ok(Chain::new(id))
    }

    fn find_accounts_by_email(&self, email: &str) -> Result<Vec<AccountRef>, StoreError> {
        Ok(self
            .tables
            .read()?
            .accounts
            .iter()
            .filter(|stored| stored.account.email() == email)
            .map(|stored| AccountRef::new(stored.id.clone()))
            .collect())
    }

    fn insert_accounts(&self, accounts: &[NewAccount]) -> Result<usize, StoreError> {
        let mut tables = self.tables.write()?;
        for account in accounts {
            let id = tables.next_id();
            tables.accounts.push(StoredAccount {
                id,
                account: account.clone(),
            });
        }
        Ok(accounts.len())
    }

    fn delete_accounts_by_chain(&self, chain_id: &ChainId) -> Result<(), StoreError> {
        let mut tables = self.tables.write()?;
        let before = tables.accounts.len();
        tables
            .accounts
            .retain(|stored| stored.account.chain_id() != chain_id);
        debug!(
            "Removed {} accounts of chain {} from memory",
            before - tables.accounts.len(),
            chain_id
        );
        Ok(())
    }

    fn delete_chain(&self, chain_id: &ChainId) -> Result<(), StoreError> {
        self.tables
            .write()?
            .chains
            .retain(|stored| &stored.id != chain_id);
        Ok(())
    }
}
