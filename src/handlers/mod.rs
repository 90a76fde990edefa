//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Delegates to the matching service
//! 3. Returns HTTP response (JSON, status code)

/// Bank account withdraw/deposit endpoints
pub mod bank_account;
/// Service health probe
pub mod health;
/// Course registration endpoints
pub mod registration;
