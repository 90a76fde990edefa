//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// One variant per failure kind the services can raise, plus a catch-all
/// for database errors. Several message strings are echoed verbatim to
/// clients on the bank-account endpoints, so the wording here is part of
/// the wire contract and must not be reworded.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from database operations
/// - **Resource Errors**: Account, student, or course lookup misses
/// - **Business Logic Errors**: Insufficient balance, past-course operations
/// - **Validation Errors**: Non-positive amounts
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Withdraw or deposit amount was zero or negative.
    ///
    /// The payload is the full client-facing message
    /// ("Withdraw amount must be greater than zero!" or the deposit
    /// equivalent). Returns HTTP 400 Bad Request on the JSON error
    /// mapping; the bank handlers surface it as 200 with the message body.
    #[error("{0}")]
    InvalidAmount(&'static str),

    /// No bank account matches the supplied account number.
    #[error("Account does not exist!")]
    AccountNotFound,

    /// Withdrawal amount exceeds the current balance.
    #[error("Balance is not enough!")]
    InsufficientBalance,

    /// No student record matches the supplied email.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Student with email {0} not found")]
    StudentNotFound(String),

    /// No course record matches the supplied id.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Course with ID {0} not found")]
    CourseNotFound(i64),

    /// Register/unregister targeted a course that already started.
    ///
    /// The payload is the attempted action ("register" or "unregister").
    /// Returns HTTP 400 Bad Request.
    #[error("Cannot {0} a past course")]
    PastCourse(&'static str),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `StudentNotFound` / `CourseNotFound` → 400 Bad Request
/// - `PastCourse` → 400 Bad Request
/// - `InvalidAmount` → 400 Bad Request
/// - `AccountNotFound` → 404 Not Found
/// - `InsufficientBalance` → 422 Unprocessable Entity
/// - `Database` → 500 Internal Server Error (hides details from client)
///
/// Note: the bank-account handlers never reach this mapping. They catch the
/// service error and reply 200 with the bare message, preserving the wire
/// behavior of the system this one replaces.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            AppError::StudentNotFound(_) => (
                StatusCode::BAD_REQUEST,
                "student_not_found",
                self.to_string(),
            ),
            AppError::CourseNotFound(_) => (
                StatusCode::BAD_REQUEST,
                "course_not_found",
                self.to_string(),
            ),
            AppError::PastCourse(_) => {
                (StatusCode::BAD_REQUEST, "past_course", self.to_string())
            }
            AppError::InvalidAmount(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_amount", msg.to_string())
            }
            AppError::AccountNotFound => {
                (StatusCode::NOT_FOUND, "account_not_found", self.to_string())
            }
            AppError::InsufficientBalance => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "insufficient_balance",
                self.to_string(),
            ),
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        };

        // Build JSON response body
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        // Return the response with status code and JSON body
        (status, body).into_response()
    }
}
