//! Business logic services.
//!
//! Services contain the decision logic separated from HTTP handlers:
//! amount and balance validation for the account ledger, eligibility and
//! pricing rules for course registration. They speak to storage only
//! through the traits in [`crate::stores`].

pub mod bank_account_service;
pub mod registration_service;
