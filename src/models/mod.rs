//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables,
//! plus the request bodies the HTTP layer deserializes.

/// Bank account entity and balance-change request body
pub mod bank_account;
/// Course catalog entry
pub mod course;
/// Course registration row and registration request body
pub mod registration;
/// Student record
pub mod student;
