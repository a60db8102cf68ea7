//! Importing a credential file as a chain, and deleting a chain again.
use std::fmt;
use std::path::Path;

use log::{error, info};

use crate::domain::AccountGroup;
use crate::domain::ChainId;
use crate::domain::Credential;
use crate::domain::ImportError;
use crate::domain::NewAccount;
use crate::domain::NewChain;
use crate::domain::StoreError;
use crate::io::CredentialFileReader;
use crate::io::Source;
use crate::store::DataStore;

/// Domains appended to the local part of an email when looking for an existing account.
const ALIAS_DOMAINS: [&str; 2] = ["gmail.com", "balldfaiof.com"];

/// Builds the alias addresses checked for `email`. The original domain is discarded.
pub fn alias_variants(email: &str) -> [String; 2] {
    let local = email.split('@').next().unwrap_or(email);
    ALIAS_DOMAINS.map(|domain| format!("{}@{}", local, domain))
}

/// Why a file did not produce a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NoAccounts,
    Unreadable(String),
    Duplicate(String),
}

/// Result of importing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    Created { chain_id: ChainId, inserted: usize },
    Skipped(SkipReason),
}

impl ImportOutcome {
    pub fn chain_id(&self) -> Option<&ChainId> {
        match self {
            ImportOutcome::Created { chain_id, .. } => Some(chain_id),
            ImportOutcome::Skipped(_) => None,
        }
    }

    pub fn inserted(&self) -> usize {
        match self {
            ImportOutcome::Created { inserted, .. } => *inserted,
            ImportOutcome::Skipped(_) => 0,
        }
    }
}

/// Creates and deletes chains against a borrowed store.
pub struct ChainImporter<'a, S> {
    store: &'a S,
}

impl<S> fmt::Debug for ChainImporter<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainImporter").finish()
    }
}

impl<'a, S: DataStore> ChainImporter<'a, S> {
    pub fn new(store: &'a S) -> Self {
        ChainImporter { store }
    }

    /// Returns true when either alias of `email` is already stored. Both aliases are
    /// always queried. Store errors are returned as they are.
    pub fn account_exists(&self, email: &str) -> Result<bool, StoreError> {
        let [first, second] = alias_variants(email);
        let first = self.store.find_accounts_by_email(&first)?;
        let second = self.store.find_accounts_by_email(&second)?;
        Ok(!first.is_empty() || !second.is_empty())
    }

    /// Imports the credentials in `path` as a new chain whose accounts carry `group`.
    ///
    /// Only the last credential of the file goes through [`Self::account_exists`]. Empty,
    /// unreadable and duplicate files are skipped without writing anything. Once the chain
    /// row is written nothing is rolled back, so a failed account insert leaves an empty
    /// chain behind.
    pub fn import_file(
        &self,
        path: &Path,
        group: AccountGroup,
    ) -> Result<ImportOutcome, ImportError> {
        let credentials = match CredentialFileReader::new(path).read() {
            Ok(credentials) => credentials,
            Err(e) => {
                error!("Could not read accounts from {}: {}", path.display(), e);
                return Ok(ImportOutcome::Skipped(SkipReason::Unreadable(e.to_string())));
            }
        };

        let Some(last) = credentials.last() else {
            error!("No accounts found in {}", path.display());
            return Ok(ImportOutcome::Skipped(SkipReason::NoAccounts));
        };

        let last_email = last.email();
        info!(
            "Checking if account {} or its variant already exists in database",
            last_email
        );
        if self.account_exists(last_email)? {
            error!(
                "Account {} or its variant already exists in database. Skipping file {}",
                last_email,
                path.display()
            );
            return Ok(ImportOutcome::Skipped(SkipReason::Duplicate(
                last_email.to_string(),
            )));
        }

        self.create_chain(&credentials, group).map_err(|e| {
            error!("Error creating chain and accounts: {}", e);
            ImportError::from(e)
        })
    }

    fn create_chain(
        &self,
        credentials: &[Credential],
        group: AccountGroup,
    ) -> Result<ImportOutcome, StoreError> {
        let chain_id = self
            .store
            .insert_chain(&NewChain::builder().build())?
            .into_id();
        info!("Created chain with ID: {}", chain_id);

        let accounts: Vec<NewAccount> = credentials
            .iter()
            .enumerate()
            .map(|(i, credential)| {
                NewAccount::builder()
                    .chain_id(chain_id.clone())
                    .email(credential.email())
                    .account_index(i + 1)
                    .account_group(group)
                    .build()
            })
            .collect();

        let inserted = self.store.insert_accounts(&accounts)?;
        info!("Created {} accounts", inserted);

        Ok(ImportOutcome::Created { chain_id, inserted })
    }

    /// Deletes the accounts of `chain_id` and then the chain. Unknown ids are a no-op.
    pub fn delete_chain(&self, chain_id: &ChainId) -> Result<(), ImportError> {
        let result = self
            .store
            .delete_accounts_by_chain(chain_id)
            .and_then(|_| {
                info!("Deleted accounts for chain with ID: {}", chain_id);
                self.store.delete_chain(chain_id)
            });

        match result {
            Ok(()) => {
                info!("Deleted chain with ID: {}", chain_id);
                Ok(())
            }
            Err(e) => {
                error!("Error deleting chain: {}", e);
                Err(e.into())
            }
        }
    }
}
