//! Decimal type utilities for exact money arithmetic

use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

/// Monetary amount (balances, deposits, withdrawals)
pub type Amount = Decimal;
