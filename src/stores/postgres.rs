//! Postgres-backed store implementations.
//!
//! Each store is a cheap clone wrapping the shared connection pool, so
//! handlers can construct one per request.

use chrono::{DateTime, Utc};

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        bank_account::BankAccount,
        course::Course,
        registration::{NewRegistration, RegisteredCourse, Registration},
        student::Student,
    },
    stores::{AccountStore, CourseStore, RegistrationStore, StudentStore},
};

/// Bank account store over Postgres.
#[derive(Clone)]
pub struct PgAccountStore {
    pool: DbPool,
}

impl PgAccountStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl AccountStore for PgAccountStore {
    async fn find_by_number(
        &self,
        account_number: &str,
    ) -> Result<Option<BankAccount>, AppError> {
        let account = sqlx::query_as::<_, BankAccount>(
            r#"
            SELECT id, account_number, balance_cents
            FROM bank_accounts
            WHERE account_number = $1
            "#,
        )
        .bind(account_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    // Writes the balance read-modify-written by the service. This is a
    // separate statement from the preceding read, with no transaction or
    // row lock: two concurrent callers on the same account can both pass
    // validation against a stale balance and lose one update.
    async fn save(&self, account: &BankAccount) -> Result<BankAccount, AppError> {
        let account = sqlx::query_as::<_, BankAccount>(
            r#"
            UPDATE bank_accounts
            SET balance_cents = $1
            WHERE id = $2
            RETURNING id, account_number, balance_cents
            "#,
        )
        .bind(account.balance_cents)
        .bind(account.id)
        .fetch_one(&self.pool)
        .await?;

        Ok(account)
    }
}

/// Student store over Postgres.
#[derive(Clone)]
pub struct PgStudentStore {
    pool: DbPool,
}

impl PgStudentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl StudentStore for PgStudentStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, AppError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, email, first_name, last_name
            FROM students
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }
}

/// Course store over Postgres.
#[derive(Clone)]
pub struct PgCourseStore {
    pool: DbPool,
}

impl PgCourseStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CourseStore for PgCourseStore {
    async fn find_by_id(&self, course_id: i64) -> Result<Option<Course>, AppError> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            SELECT id, name, start_time, end_time, price_cents
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(course)
    }
}

/// Registration store over Postgres.
#[derive(Clone)]
pub struct PgRegistrationStore {
    pool: DbPool,
}

impl PgRegistrationStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Flat row for the registration-course join; column names are aliased in
/// the query to keep the two `id`/`price_cents` pairs apart.
#[derive(sqlx::FromRow)]
struct RegisteredCourseRow {
    registration_id: i64,
    student_id: i64,
    course_id: i64,
    charged_cents: i64,
    registered_at: DateTime<Utc>,
    course_name: String,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    list_price_cents: i64,
}

impl From<RegisteredCourseRow> for RegisteredCourse {
    fn from(row: RegisteredCourseRow) -> Self {
        RegisteredCourse {
            registration: Registration {
                id: row.registration_id,
                student_id: row.student_id,
                course_id: row.course_id,
                price_cents: row.charged_cents,
                registered_at: row.registered_at,
            },
            course: Course {
                id: row.course_id,
                name: row.course_name,
                start_time: row.start_time,
                end_time: row.end_time,
                price_cents: row.list_price_cents,
            },
        }
    }
}

impl RegistrationStore for PgRegistrationStore {
    async fn find_by_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<RegisteredCourse>, AppError> {
        let rows = sqlx::query_as::<_, RegisteredCourseRow>(
            r#"
            SELECT r.id AS registration_id,
                   r.student_id,
                   r.course_id,
                   r.price_cents AS charged_cents,
                   r.registered_at,
                   c.name AS course_name,
                   c.start_time,
                   c.end_time,
                   c.price_cents AS list_price_cents
            FROM registrations r
            JOIN courses c ON c.id = r.course_id
            WHERE r.student_id = $1
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn save(&self, registration: NewRegistration) -> Result<Registration, AppError> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO registrations (student_id, course_id, price_cents, registered_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, student_id, course_id, price_cents, registered_at
            "#,
        )
        .bind(registration.student_id)
        .bind(registration.course_id)
        .bind(registration.price_cents)
        .bind(registration.registered_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(registration)
    }

    async fn delete_by_student_and_course(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<(), AppError> {
        // Zero rows affected is fine; absence of the row is not an error.
        sqlx::query("DELETE FROM registrations WHERE student_id = $1 AND course_id = $2")
            .bind(student_id)
            .bind(course_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
