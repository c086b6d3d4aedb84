//! API handlers
//!
//! This module contains the API endpoint handlers. Each handler follows a
//! consistent pattern:
//! - Extract state and parameters using Axum extractors
//! - Call the appropriate account service method
//! - Map the result to a response projection

pub mod account;
pub mod amount;
pub mod health;
pub mod response;

pub use response::{AccountResponse, BalanceResponse};
