//! Course model.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A course catalog entry. Read-only to this service.
///
/// A course is "future" when its start time is strictly after the moment
/// of evaluation; eligibility checks and the registered-courses listing
/// both hinge on that predicate.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
pub struct Course {
    pub id: i64,

    pub name: String,

    /// Scheduled start; always before `end_time`
    pub start_time: DateTime<Utc>,

    pub end_time: DateTime<Utc>,

    /// List price in cents; the price actually charged at registration
    /// time may be discounted and lives on the registration row
    pub price_cents: i64,
}
