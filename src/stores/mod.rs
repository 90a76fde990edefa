//! Storage collaborators consumed by the services.
//!
//! Each trait is the minimal lookup/save surface one service needs; the
//! services are generic over them so the business rules can be exercised
//! against in-memory doubles while production code runs on Postgres
//! (see [`postgres`]).

#![allow(async_fn_in_trait)]

use crate::{
    error::AppError,
    models::{
        bank_account::BankAccount,
        course::Course,
        registration::{NewRegistration, RegisteredCourse, Registration},
        student::Student,
    },
};

pub mod postgres;

#[cfg(test)]
pub mod memory;

/// Lookup and persistence for bank accounts.
pub trait AccountStore {
    /// Find an account by its external account number.
    async fn find_by_number(&self, account_number: &str)
    -> Result<Option<BankAccount>, AppError>;

    /// Persist an updated account record and return the stored row.
    async fn save(&self, account: &BankAccount) -> Result<BankAccount, AppError>;
}

/// Read-only lookup of students by email.
pub trait StudentStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, AppError>;
}

/// Read-only lookup of courses by id.
pub trait CourseStore {
    async fn find_by_id(&self, course_id: i64) -> Result<Option<Course>, AppError>;
}

/// Lookup and persistence for course registrations.
pub trait RegistrationStore {
    /// All registrations for a student, each joined with its course, in
    /// store iteration order.
    async fn find_by_student(&self, student_id: i64)
    -> Result<Vec<RegisteredCourse>, AppError>;

    /// Insert a new registration row and return it with its assigned id.
    async fn save(&self, registration: NewRegistration) -> Result<Registration, AppError>;

    /// Delete the registration matching (student, course). Deleting a row
    /// that does not exist is a no-op, not an error.
    async fn delete_by_student_and_course(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<(), AppError>;
}
