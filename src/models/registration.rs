//! Registration models and API request type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::course::Course;

/// A persisted course registration.
///
/// One row per enrollment event. `price_cents` is the amount charged at
/// registration time (possibly discounted) and is never recomputed; the
/// row is immutable once written and deleted on unregistration.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
pub struct Registration {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,

    /// Amount charged when the registration was created, in cents
    pub price_cents: i64,

    pub registered_at: DateTime<Utc>,
}

/// A registration to be inserted; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub student_id: i64,
    pub course_id: i64,
    pub price_cents: i64,
    pub registered_at: DateTime<Utc>,
}

/// A registration joined with the course it refers to.
///
/// Every consumer of a student's registrations also needs the course
/// (start time for filtering, the full record for responses), so the
/// store returns the pair in one query.
#[derive(Debug, Clone)]
pub struct RegisteredCourse {
    pub registration: Registration,
    pub course: Course,
}

/// Request body for `POST /register`.
///
/// # JSON Example
///
/// ```json
/// {
///   "course_id": 1,
///   "email": "student1@example.com"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct RegistrationRequest {
    pub course_id: i64,
    pub email: String,
}
