//! Account entity and its state-change rules

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::decimal::Amount;

/// Rule violations raised by the account entity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// Rejected construction input
    #[error("{0}")]
    InvalidArgument(String),

    /// Rejected deposit or withdrawal
    #[error("{0}")]
    InvalidOperation(String),
}

/// A bank account
///
/// The balance can only change through [`Account::deposit`] and
/// [`Account::withdraw`], both of which leave the account untouched when they
/// fail. The balance is never negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: Uuid,
    owner_name: String,
    balance: Amount,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Account {
    /// Construct an account with a known ID
    pub fn new(id: Uuid, owner_name: &str, initial_deposit: Amount) -> Result<Self, AccountError> {
        let owner_name = owner_name.trim();
        if owner_name.is_empty() {
            return Err(AccountError::InvalidArgument(
                "Owner name must not be empty".to_string(),
            ));
        }

        if initial_deposit < Amount::ZERO {
            return Err(AccountError::InvalidArgument(format!(
                "Initial deposit must not be negative, got {}",
                initial_deposit
            )));
        }

        let now = Utc::now();
        Ok(Self {
            id,
            owner_name: owner_name.to_string(),
            balance: initial_deposit,
            created_at: now,
            updated_at: now,
        })
    }

    /// Open a new account with a freshly generated ID
    pub fn open(owner_name: &str, initial_deposit: Amount) -> Result<Self, AccountError> {
        Self::new(Uuid::new_v4(), owner_name, initial_deposit)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Add funds to the balance
    pub fn deposit(&mut self, amount: Amount) -> Result<(), AccountError> {
        if amount <= Amount::ZERO {
            return Err(AccountError::InvalidOperation(format!(
                "Deposit amount must be positive, got {}",
                amount
            )));
        }

        self.balance = self.balance.checked_add(amount).ok_or_else(|| {
            AccountError::InvalidOperation(format!(
                "Deposit of {} would overflow balance {}",
                amount, self.balance
            ))
        })?;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Remove funds from the balance
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), AccountError> {
        if amount <= Amount::ZERO {
            return Err(AccountError::InvalidOperation(format!(
                "Withdrawal amount must be positive, got {}",
                amount
            )));
        }

        if amount > self.balance {
            return Err(AccountError::InvalidOperation(format!(
                "Insufficient funds: balance {} is less than requested {}",
                self.balance, amount
            )));
        }

        self.balance = self.balance.checked_sub(amount).ok_or_else(|| {
            AccountError::InvalidOperation(format!(
                "Withdrawal of {} cannot be taken from balance {}",
                amount, self.balance
            ))
        })?;
        self.updated_at = Utc::now();
        Ok(())
    }
}
