//! Bank account model and API request type.

use serde::{Deserialize, Serialize};

/// Represents a bank account record from the database.
///
/// # Balance Storage
///
/// Balances are stored as `i64` cents to avoid floating-point precision
/// issues: $10.50 is stored as 1050 cents. The database enforces
/// `balance_cents >= 0` with a CHECK constraint; the withdraw service
/// enforces it again before writing.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
pub struct BankAccount {
    /// Surrogate primary key
    pub id: i64,

    /// External account number, unique, used by clients to address the
    /// account (e.g. "ACC12345678")
    pub account_number: String,

    /// Current balance in cents (not dollars)
    pub balance_cents: i64,
}

/// Request body for the withdraw and deposit endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_number": "ACC12345678",
///   "amount_cents": 5000
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct BalanceChangeRequest {
    /// Account to operate on
    pub account_number: String,

    /// Amount to withdraw or deposit, in cents; must be positive
    pub amount_cents: i64,
}
