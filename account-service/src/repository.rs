//! Repository for account data

use async_trait::async_trait;
use common::error::Result;
use common::model::account::Account;
use common::Cancellation;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use crate::config::AccountServiceConfig;

/// Account repository trait defining the interface for account data storage
///
/// Every call takes a cancellation signal; backends abandon the call and
/// return `Error::Cancelled` once it fires.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Get an account by ID
    async fn get(&self, id: Uuid, cancel: &Cancellation) -> Result<Option<Account>>;

    /// Insert an account, replacing any entry with the same ID
    async fn add(&self, account: Account, cancel: &Cancellation) -> Result<Account>;

    /// Store a modified account, replacing the previous value
    async fn update(&self, account: Account, cancel: &Cancellation) -> Result<Account>;

    /// Snapshot of all stored accounts
    async fn list(&self, cancel: &Cancellation) -> Result<Vec<Account>>;
}

/// In-memory repository for account data
///
/// Reads hand back owned copies, so a caller's edits only reach the store
/// through `update`. Nothing locks an account between `get` and `update`:
/// two concurrent read-modify-write sequences on the same ID can interleave
/// and the last `update` wins.
pub struct InMemoryAccountRepository {
    /// Accounts by ID
    pub accounts: DashMap<Uuid, Account>,
}

impl InMemoryAccountRepository {
    /// Create a new in-memory account repository
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Create a repository pre-sized from configuration
    pub fn with_config(config: &AccountServiceConfig) -> Self {
        Self {
            accounts: DashMap::with_capacity(config.store_capacity),
        }
    }

    fn upsert(&self, account: Account) -> Account {
        self.accounts.insert(account.id(), account.clone());
        account
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn get(&self, id: Uuid, cancel: &Cancellation) -> Result<Option<Account>> {
        cancel
            .run(async { Ok(self.accounts.get(&id).map(|a| a.clone())) })
            .await
    }

    async fn add(&self, account: Account, cancel: &Cancellation) -> Result<Account> {
        debug!("Adding account {}", account.id());
        cancel.run(async { Ok(self.upsert(account)) }).await
    }

    async fn update(&self, account: Account, cancel: &Cancellation) -> Result<Account> {
        debug!("Updating account {}", account.id());
        cancel.run(async { Ok(self.upsert(account)) }).await
    }

    async fn list(&self, cancel: &Cancellation) -> Result<Vec<Account>> {
        cancel
            .run(async {
                let accounts = self
                    .accounts
                    .iter()
                    .map(|entry| entry.value().clone())
                    .collect();
                Ok(accounts)
            })
            .await
    }
}
