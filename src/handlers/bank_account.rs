//! Bank account HTTP handlers.
//!
//! Endpoints:
//! - POST /bankaccount/drawmoney - Withdraw from an account
//! - POST /bankaccount/depositmoney - Deposit into an account
//!
//! # Error Handling Quirk
//!
//! Unlike the registration endpoints, every failure here is returned with
//! HTTP **200** and the error message as a plain-text body. Existing
//! clients of the system this one replaces parse the 200 body to tell an
//! account payload from an error string, so the status code is part of
//! the wire contract.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    db::DbPool,
    models::bank_account::BalanceChangeRequest,
    services::bank_account_service,
    stores::postgres::PgAccountStore,
};

/// Withdraw money from an account.
///
/// # Request Body
///
/// ```json
/// {
///   "account_number": "ACC12345678",
///   "amount_cents": 5000
/// }
/// ```
///
/// # Response (always 200)
///
/// On success, the updated account as JSON. On failure, the bare error
/// message, e.g. `Balance is not enough!`.
pub async fn draw_money(
    State(pool): State<DbPool>,
    Json(request): Json<BalanceChangeRequest>,
) -> Response {
    let accounts = PgAccountStore::new(pool);

    match bank_account_service::draw_money(
        &accounts,
        &request.account_number,
        request.amount_cents,
    )
    .await
    {
        Ok(account) => Json(account).into_response(),
        Err(err) => {
            tracing::warn!(account_number = %request.account_number, %err, "withdraw failed");
            err.to_string().into_response()
        }
    }
}

/// Deposit money into an account.
///
/// Same body and response conventions as [`draw_money`], including the
/// 200-on-error behavior.
pub async fn deposit_money(
    State(pool): State<DbPool>,
    Json(request): Json<BalanceChangeRequest>,
) -> Response {
    let accounts = PgAccountStore::new(pool);

    match bank_account_service::deposit_money(
        &accounts,
        &request.account_number,
        request.amount_cents,
    )
    .await
    {
        Ok(account) => Json(account).into_response(),
        Err(err) => {
            tracing::warn!(account_number = %request.account_number, %err, "deposit failed");
            err.to_string().into_response()
        }
    }
}
