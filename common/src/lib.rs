//! Common types and utilities for the account ledger
//!
//! This library contains shared types used across the ledger crates: the
//! error taxonomy, the decimal money type, the cancellation signal threaded
//! through repository calls, and the account entity itself.

pub mod cancel;
pub mod decimal;
pub mod error;
pub mod model;

/// Re-export important types
pub use cancel::{Cancellation, CancellationSource};
pub use decimal::*;
pub use error::{Error, ErrorExt, Result};
