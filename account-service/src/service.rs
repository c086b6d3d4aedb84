//! Account service implementation

use std::sync::Arc;

use common::decimal::Amount;
use common::error::{Error, ErrorExt, Result};
use common::model::account::Account;
use common::Cancellation;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::AccountServiceConfig;
use crate::repository::{AccountRepository, InMemoryAccountRepository};

/// Account service for opening accounts and moving their balances
pub struct AccountService {
    /// Repository for account data
    repo: Arc<dyn AccountRepository>,
    /// Log balance changes at info level
    operation_logging: bool,
}

impl AccountService {
    /// Create a new account service backed by an empty in-memory repository
    pub fn new() -> Self {
        Self {
            repo: Arc::new(InMemoryAccountRepository::new()),
            operation_logging: false,
        }
    }

    /// Create a new account service over an existing repository
    pub fn with_repository(repo: Arc<dyn AccountRepository>) -> Self {
        Self {
            repo,
            operation_logging: false,
        }
    }

    /// Create a new account service with a configuration
    pub fn with_config(config: &AccountServiceConfig) -> Self {
        info!(
            "Creating account service with store capacity: {}, operation logging: {}",
            config.store_capacity, config.operation_logging
        );

        Self {
            repo: Arc::new(InMemoryAccountRepository::with_config(config)),
            operation_logging: config.operation_logging,
        }
    }

    /// List every account
    pub async fn list_accounts(&self, cancel: &Cancellation) -> Result<Vec<Account>> {
        debug!("Listing accounts");
        self.repo
            .list(cancel)
            .await
            .with_context(|| "Failed to list accounts")
    }

    /// Get an account by ID
    pub async fn get_account(&self, id: Uuid, cancel: &Cancellation) -> Result<Option<Account>> {
        debug!("Getting account {}", id);
        self.repo
            .get(id, cancel)
            .await
            .with_context(|| format!("Failed to retrieve account {}", id))
    }

    /// Open a new account
    pub async fn open_account(
        &self,
        owner_name: &str,
        initial_deposit: Amount,
        cancel: &Cancellation,
    ) -> Result<Account> {
        let account = Account::open(owner_name, initial_deposit)?;
        self.log_operation(format_args!(
            "Opening account {} with initial deposit {}",
            account.id(),
            initial_deposit
        ));

        self.repo
            .add(account, cancel)
            .await
            .with_context(|| "Failed to store new account")
    }

    /// Deposit funds into an account
    pub async fn deposit(&self, id: Uuid, amount: Amount, cancel: &Cancellation) -> Result<Account> {
        self.log_operation(format_args!("Depositing {} to account {}", amount, id));

        let mut account = self.require_account(id, cancel).await?;
        account.deposit(amount)?;

        self.repo
            .update(account, cancel)
            .await
            .with_context(|| format!("Failed to update account {} after deposit", id))
    }

    /// Withdraw funds from an account
    pub async fn withdraw(&self, id: Uuid, amount: Amount, cancel: &Cancellation) -> Result<Account> {
        self.log_operation(format_args!("Withdrawing {} from account {}", amount, id));

        let mut account = self.require_account(id, cancel).await?;
        account.withdraw(amount)?;

        self.repo
            .update(account, cancel)
            .await
            .with_context(|| format!("Failed to update account {} after withdrawal", id))
    }

    async fn require_account(&self, id: Uuid, cancel: &Cancellation) -> Result<Account> {
        self.get_account(id, cancel)
            .await?
            .ok_or_else(|| Error::AccountNotFound(format!("Account not found: {}", id)))
    }

    fn log_operation(&self, message: std::fmt::Arguments<'_>) {
        if self.operation_logging {
            info!("{}", message);
        } else {
            debug!("{}", message);
        }
    }
}

impl Default for AccountService {
    fn default() -> Self {
        Self::new()
    }
}
