//! Account service for opening accounts and moving their balances

pub mod service;
pub mod repository;
pub mod config;

pub use service::AccountService;
pub use repository::{AccountRepository, InMemoryAccountRepository};
pub use config::AccountServiceConfig;
