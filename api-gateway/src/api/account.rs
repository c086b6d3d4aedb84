//! Account API handlers
//!
//! Handles endpoints related to account management:
//! - List accounts
//! - Get account details
//! - Open an account
//! - Deposit and withdraw funds

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use common::decimal::Amount;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::amount;
use crate::api::response::{AccountResponse, BalanceResponse, Created};
use crate::error::{ApiError, ErrorResponse};
use crate::AppState;

/// Open account request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    /// Name of the account owner
    pub owner_name: String,
    /// Opening balance
    #[serde(deserialize_with = "amount::deserialize")]
    #[schema(value_type = f64)]
    pub initial_deposit: Amount,
}

/// Deposit or withdrawal request
#[derive(Debug, Deserialize, ToSchema)]
pub struct AmountRequest {
    /// Amount to move
    #[serde(deserialize_with = "amount::deserialize")]
    #[schema(value_type = f64)]
    pub amount: Amount,
}

/// List all accounts
#[utoipa::path(
    get,
    path = "/api/accounts",
    responses(
        (status = 200, description = "All accounts", body = [AccountResponse])
    ),
    tag = "account"
)]
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AccountResponse>>, ApiError> {
    let accounts = state.account_service.list_accounts(&state.shutdown).await?;

    Ok(Json(accounts.iter().map(AccountResponse::from).collect()))
}

/// Get an account by ID
#[utoipa::path(
    get,
    path = "/api/accounts/{id}",
    params(
        ("id" = Uuid, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account details", body = AccountResponse),
        (status = 404, description = "Account not found", body = ErrorResponse)
    ),
    tag = "account"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<AccountResponse, ApiError> {
    let Path(id) = id?;

    let account = state
        .account_service
        .get_account(id, &state.shutdown)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Account not found: {}", id)))?;

    Ok(AccountResponse::from(&account))
}

/// Open a new account
#[utoipa::path(
    post,
    path = "/api/accounts",
    request_body = CreateAccountRequest,
    responses(
        (status = 201, description = "Account opened", body = AccountResponse,
            headers(("location" = String, description = "Path of the new account"))),
        (status = 400, description = "Invalid owner name or initial deposit", body = ErrorResponse)
    ),
    tag = "account"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    request: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<Created<AccountResponse>, ApiError> {
    let Json(request) = request?;

    let account = state
        .account_service
        .open_account(&request.owner_name, request.initial_deposit, &state.shutdown)
        .await?;

    Ok(Created::new(
        format!("/api/accounts/{}", account.id()),
        AccountResponse::from(&account),
    ))
}

/// Deposit funds into an account
#[utoipa::path(
    post,
    path = "/api/accounts/{id}/deposit",
    params(
        ("id" = Uuid, Path, description = "Account ID")
    ),
    request_body = AmountRequest,
    responses(
        (status = 200, description = "Funds deposited", body = BalanceResponse),
        (status = 400, description = "Amount is not positive", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse)
    ),
    tag = "account"
)]
pub async fn deposit(
    State(state): State<Arc<AppState>>,
    id: Result<Path<Uuid>, PathRejection>,
    request: Result<Json<AmountRequest>, JsonRejection>,
) -> Result<BalanceResponse, ApiError> {
    let Path(id) = id?;
    let Json(request) = request?;

    let account = state
        .account_service
        .deposit(id, request.amount, &state.shutdown)
        .await?;

    Ok(BalanceResponse::from(&account))
}

/// Withdraw funds from an account
#[utoipa::path(
    post,
    path = "/api/accounts/{id}/withdraw",
    params(
        ("id" = Uuid, Path, description = "Account ID")
    ),
    request_body = AmountRequest,
    responses(
        (status = 200, description = "Funds withdrawn", body = BalanceResponse),
        (status = 400, description = "Amount is not positive or exceeds the balance", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse)
    ),
    tag = "account"
)]
pub async fn withdraw(
    State(state): State<Arc<AppState>>,
    id: Result<Path<Uuid>, PathRejection>,
    request: Result<Json<AmountRequest>, JsonRejection>,
) -> Result<BalanceResponse, ApiError> {
    let Path(id) = id?;
    let Json(request) = request?;

    let account = state
        .account_service
        .withdraw(id, request.amount, &state.shutdown)
        .await?;

    Ok(BalanceResponse::from(&account))
}
