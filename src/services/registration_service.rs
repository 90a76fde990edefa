//! Registration service - course enrollment rules.
//!
//! This service enforces time-based eligibility (no changes to courses
//! that already started), computes the charged price with the loyalty
//! discount, and answers the "current future registrations" query.
//!
//! The only state it owns is the registration row: absent or present per
//! (student, course) pair, created by [`register_course`] and removed by
//! [`unregister_course`], both gated by the same eligibility predicate.

use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    models::{course::Course, registration::NewRegistration, student::Student},
    stores::{CourseStore, RegistrationStore, StudentStore},
};

/// Register the student identified by `email` for the course identified by
/// `course_id` and return their remaining future courses, including the
/// one just registered if it is still in the future.
///
/// # Pricing
///
/// The charged price starts from the course's list price. A student who
/// already holds two or more registrations, past or future, gets the
/// loyalty discount: 75% of the list price, floored by integer division.
/// The price is fixed on the registration row and never recomputed.
///
/// # Errors
///
/// - `StudentNotFound` / `CourseNotFound` on a lookup miss.
/// - `PastCourse` ("Cannot register a past course") when the course start
///   time is strictly before now; a course starting exactly now is still
///   eligible. Nothing is persisted on any failure.
pub async fn register_course<S, C, R>(
    students: &S,
    courses: &C,
    registrations: &R,
    course_id: i64,
    email: &str,
) -> Result<Vec<Course>, AppError>
where
    S: StudentStore,
    C: CourseStore,
    R: RegistrationStore,
{
    let student = find_student(students, email).await?;
    let course = find_course(courses, course_id).await?;
    ensure_not_past(&course, Utc::now(), "register")?;

    let existing = registrations.find_by_student(student.id).await?;
    let price_cents = charged_price(course.price_cents, existing.len());

    registrations
        .save(NewRegistration {
            student_id: student.id,
            course_id: course.id,
            price_cents,
            registered_at: Utc::now(),
        })
        .await?;

    future_courses(registrations, &student).await
}

/// Remove the registration of the student identified by `email` for the
/// course identified by `course_id`.
///
/// Deleting a registration that does not exist is a silent no-op; the
/// call still reports success. Returns `true` whenever the student and
/// course resolve and the course has not started.
///
/// # Errors
///
/// - `StudentNotFound` / `CourseNotFound` on a lookup miss.
/// - `PastCourse` ("Cannot unregister a past course") when the course
///   already started.
pub async fn unregister_course<S, C, R>(
    students: &S,
    courses: &C,
    registrations: &R,
    course_id: i64,
    email: &str,
) -> Result<bool, AppError>
where
    S: StudentStore,
    C: CourseStore,
    R: RegistrationStore,
{
    let student = find_student(students, email).await?;
    let course = find_course(courses, course_id).await?;
    ensure_not_past(&course, Utc::now(), "unregister")?;

    registrations
        .delete_by_student_and_course(student.id, course.id)
        .await?;

    Ok(true)
}

/// All courses the student identified by `email` is registered for whose
/// start time is strictly in the future, in store iteration order.
///
/// # Errors
///
/// `StudentNotFound` when the email resolves to no student.
pub async fn registered_courses<S, R>(
    students: &S,
    registrations: &R,
    email: &str,
) -> Result<Vec<Course>, AppError>
where
    S: StudentStore,
    R: RegistrationStore,
{
    let student = find_student(students, email).await?;
    future_courses(registrations, &student).await
}

async fn find_student<S: StudentStore>(students: &S, email: &str) -> Result<Student, AppError> {
    students
        .find_by_email(email)
        .await?
        .ok_or_else(|| AppError::StudentNotFound(email.to_string()))
}

async fn find_course<C: CourseStore>(courses: &C, course_id: i64) -> Result<Course, AppError> {
    courses
        .find_by_id(course_id)
        .await?
        .ok_or(AppError::CourseNotFound(course_id))
}

/// Only a strictly past start time is rejected; start == now is eligible.
fn ensure_not_past(
    course: &Course,
    now: DateTime<Utc>,
    action: &'static str,
) -> Result<(), AppError> {
    if course.start_time < now {
        return Err(AppError::PastCourse(action));
    }
    Ok(())
}

/// Loyalty pricing: 25% off once the student holds 2+ registrations,
/// regardless of whether those courses are past or future. Integer
/// division floors the discounted price.
fn charged_price(list_price_cents: i64, prior_registrations: usize) -> i64 {
    if prior_registrations >= 2 {
        list_price_cents * 75 / 100
    } else {
        list_price_cents
    }
}

async fn future_courses<R: RegistrationStore>(
    registrations: &R,
    student: &Student,
) -> Result<Vec<Course>, AppError> {
    let now = Utc::now();
    Ok(registrations
        .find_by_student(student.id)
        .await?
        .into_iter()
        .map(|r| r.course)
        .filter(|course| course.start_time > now)
        .collect())
}
