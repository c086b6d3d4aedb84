//! Response projections
//!
//! Handlers never serialize the account entity itself. These types carry the
//! documented subset of its fields, so internal bookkeeping (timestamps and
//! anything added later) stays out of the wire format.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::decimal::Amount;
use common::model::account::Account;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use utoipa::ToSchema;
use uuid::Uuid;

/// Full account projection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    /// Account ID
    pub id: Uuid,
    /// Name of the account owner
    pub owner_name: String,
    /// Current balance
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub balance: Amount,
}

/// Balance projection returned by deposit and withdraw
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    /// Account ID
    pub id: Uuid,
    /// Balance after the operation
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub balance: Amount,
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id(),
            owner_name: account.owner_name().to_string(),
            balance: account.balance(),
        }
    }
}

impl From<&Account> for BalanceResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id(),
            balance: account.balance(),
        }
    }
}

impl IntoResponse for AccountResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

impl IntoResponse for BalanceResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// A 201 response pointing at the newly created resource
#[derive(Debug)]
pub struct Created<T> {
    /// Path of the created resource
    pub location: String,
    /// The response body
    pub body: T,
}

impl<T> Created<T> {
    pub fn new(location: String, body: T) -> Self {
        Self { location, body }
    }
}

impl<T> IntoResponse for Created<T>
where
    T: Serialize + Debug,
{
    fn into_response(self) -> Response {
        (
            StatusCode::CREATED,
            [(header::LOCATION, self.location)],
            Json(self.body),
        )
            .into_response()
    }
}
