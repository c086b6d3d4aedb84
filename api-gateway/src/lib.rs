//! HTTP API for the account ledger

pub mod api;
pub mod config;
pub mod error;

use std::sync::Arc;

use account_service::AccountService;
use axum::{
    routing::{get, post},
    Router,
};
use common::Cancellation;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::account::{create_account, deposit, get_account, list_accounts, withdraw};
use crate::api::health::health;

/// App state shared across handlers
pub struct AppState {
    /// Account service
    pub account_service: Arc<AccountService>,
    /// Fires when the server shuts down; aborts in-flight storage calls
    pub shutdown: Cancellation,
}

impl AppState {
    pub fn new(account_service: Arc<AccountService>, shutdown: Cancellation) -> Self {
        Self {
            account_service,
            shutdown,
        }
    }
}

/// API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        api::account::list_accounts,
        api::account::get_account,
        api::account::create_account,
        api::account::deposit,
        api::account::withdraw,
        api::health::health,
    ),
    components(
        schemas(
            api::account::CreateAccountRequest,
            api::account::AmountRequest,
            api::response::AccountResponse,
            api::response::BalanceResponse,
            api::health::HealthResponse,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "account", description = "Account management endpoints"),
        (name = "health", description = "Liveness endpoint")
    ),
    info(
        title = "Account Ledger API",
        version = "1.0.0",
        description = "Open accounts, read balances, deposit and withdraw funds"
    )
)]
pub struct ApiDoc;

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/accounts", get(list_accounts).post(create_account))
        .route("/accounts/:id", get(get_account))
        .route("/accounts/:id/deposit", post(deposit))
        .route("/accounts/:id/withdraw", post(withdraw));

    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health))
        .merge(swagger_ui)
        .layer(cors)
        .with_state(state)
}
