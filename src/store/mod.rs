//! Access to the collections holding chains and accounts.
mod memory;
mod rest;

pub use memory::MemoryDataStore;
pub use memory::StoredAccount;
pub use memory::StoredChain;
pub use rest::RestDataStore;

use crate::domain::AccountRef;
use crate::domain::Chain;
use crate::domain::ChainId;
use crate::domain::NewAccount;
use crate::domain::NewChain;
use crate::domain::StoreError;

/// Operations the importer needs from the remote store. Every call blocks until the store
/// has answered.
#[cfg_attr(test, mockall::automock)]
pub trait DataStore {
    /// Inserts one chain and returns the stored row with its generated id.
    fn insert_chain(&self, chain: &NewChain) -> Result<Chain, StoreError>;

    /// Exact-match lookup on the `email` column of `accounts`.
    fn find_accounts_by_email(&self, email: &str) -> Result<Vec<AccountRef>, StoreError>;

    /// Inserts all accounts in a single call and returns how many rows the store reports
    /// as created.
    fn insert_accounts(&self, accounts: &[NewAccount]) -> Result<usize, StoreError>;

    /// Deletes every account whose `chain_id` matches. Matching nothing is not an error.
    fn delete_accounts_by_chain(&self, chain_id: &ChainId) -> Result<(), StoreError>;

    /// Deletes the chain row itself. Matching nothing is not an error.
    fn delete_chain(&self, chain_id: &ChainId) -> Result<(), StoreError>;
}
