//! Student model.

use serde::Serialize;

/// A student record. Read-only to this service; students are provisioned
/// elsewhere and addressed by their unique email.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, Serialize)]
pub struct Student {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}
