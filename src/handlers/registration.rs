//! Course registration HTTP handlers.
//!
//! Endpoints:
//! - POST /register - Register a student for a course
//! - GET /registered-courses/{email} - List a student's future courses
//! - DELETE /unregister/{course_id}/{email} - Drop a registration
//!
//! Service errors propagate through [`crate::error::AppError`]'s
//! `IntoResponse` mapping: lookup misses and past-course operations come
//! back as 400 with a structured JSON message.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    db::DbPool,
    error::AppError,
    models::{course::Course, registration::RegistrationRequest},
    services::registration_service,
    stores::postgres::{PgCourseStore, PgRegistrationStore, PgStudentStore},
};

/// Register a student for a course.
///
/// # Request Body
///
/// ```json
/// {
///   "course_id": 1,
///   "email": "student1@example.com"
/// }
/// ```
///
/// # Response (200)
///
/// The student's future courses after the registration, as a JSON array.
pub async fn register(
    State(pool): State<DbPool>,
    Json(request): Json<RegistrationRequest>,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = registration_service::register_course(
        &PgStudentStore::new(pool.clone()),
        &PgCourseStore::new(pool.clone()),
        &PgRegistrationStore::new(pool),
        request.course_id,
        &request.email,
    )
    .await?;

    Ok(Json(courses))
}

/// List the courses a student is registered for that have not started yet.
pub async fn registered_courses(
    State(pool): State<DbPool>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Course>>, AppError> {
    let courses = registration_service::registered_courses(
        &PgStudentStore::new(pool.clone()),
        &PgRegistrationStore::new(pool),
        &email,
    )
    .await?;

    Ok(Json(courses))
}

/// Drop a student's registration for a course.
///
/// Succeeds with body "Unregistered successfully" even when no matching
/// registration existed.
pub async fn unregister(
    State(pool): State<DbPool>,
    Path((course_id, email)): Path<(i64, String)>,
) -> Result<&'static str, AppError> {
    registration_service::unregister_course(
        &PgStudentStore::new(pool.clone()),
        &PgCourseStore::new(pool.clone()),
        &PgRegistrationStore::new(pool),
        course_id,
        &email,
    )
    .await?;

    Ok("Unregistered successfully")
}
