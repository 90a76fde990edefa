//! In-memory store doubles for service tests.
//!
//! These mirror the Postgres stores' observable behavior and additionally
//! count lookups and saves, so tests can assert that failure paths touch
//! the store exactly as often as the contract allows.

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use crate::{
    error::AppError,
    models::{
        bank_account::BankAccount,
        course::Course,
        registration::{NewRegistration, RegisteredCourse, Registration},
        student::Student,
    },
    stores::{AccountStore, CourseStore, RegistrationStore, StudentStore},
};

/// Account store over a plain vector.
#[derive(Default)]
pub struct MemoryAccountStore {
    accounts: Mutex<Vec<BankAccount>>,
    pub lookups: AtomicUsize,
    pub saves: AtomicUsize,
}

impl MemoryAccountStore {
    pub fn with_accounts(accounts: Vec<BankAccount>) -> Self {
        Self {
            accounts: Mutex::new(accounts),
            ..Self::default()
        }
    }

    /// Current balance of the stored account, for assertions.
    pub fn balance_of(&self, account_number: &str) -> Option<i64> {
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.account_number == account_number)
            .map(|a| a.balance_cents)
    }
}

impl AccountStore for MemoryAccountStore {
    async fn find_by_number(
        &self,
        account_number: &str,
    ) -> Result<Option<BankAccount>, AppError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.account_number == account_number)
            .cloned())
    }

    async fn save(&self, account: &BankAccount) -> Result<BankAccount, AppError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        let mut accounts = self.accounts.lock().unwrap();
        let stored = accounts
            .iter_mut()
            .find(|a| a.id == account.id)
            .expect("saving an account that was never stored");
        *stored = account.clone();
        Ok(account.clone())
    }
}

/// Student store over a plain vector.
#[derive(Default)]
pub struct MemoryStudentStore {
    students: Vec<Student>,
}

impl MemoryStudentStore {
    pub fn with_students(students: Vec<Student>) -> Self {
        Self { students }
    }
}

impl StudentStore for MemoryStudentStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, AppError> {
        Ok(self.students.iter().find(|s| s.email == email).cloned())
    }
}

/// Course store over a plain vector.
#[derive(Default)]
pub struct MemoryCourseStore {
    courses: Vec<Course>,
}

impl MemoryCourseStore {
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self { courses }
    }
}

impl CourseStore for MemoryCourseStore {
    async fn find_by_id(&self, course_id: i64) -> Result<Option<Course>, AppError> {
        Ok(self.courses.iter().find(|c| c.id == course_id).cloned())
    }
}

/// Registration store over a plain vector, with the course catalog held
/// alongside so `find_by_student` can produce the join.
#[derive(Default)]
pub struct MemoryRegistrationStore {
    registrations: Mutex<Vec<Registration>>,
    courses: Vec<Course>,
    next_id: AtomicUsize,
    pub saves: AtomicUsize,
    pub deletes: AtomicUsize,
}

impl MemoryRegistrationStore {
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            courses,
            next_id: AtomicUsize::new(1),
            ..Self::default()
        }
    }

    pub fn with_registrations(courses: Vec<Course>, registrations: Vec<Registration>) -> Self {
        let next_id = registrations.iter().map(|r| r.id).max().unwrap_or(0) as usize + 1;
        Self {
            registrations: Mutex::new(registrations),
            courses,
            next_id: AtomicUsize::new(next_id),
            saves: AtomicUsize::new(0),
            deletes: AtomicUsize::new(0),
        }
    }

    /// The stored registration rows, for assertions on charged prices.
    pub fn rows(&self) -> Vec<Registration> {
        self.registrations.lock().unwrap().clone()
    }
}

impl RegistrationStore for MemoryRegistrationStore {
    async fn find_by_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<RegisteredCourse>, AppError> {
        let registrations = self.registrations.lock().unwrap();
        Ok(registrations
            .iter()
            .filter(|r| r.student_id == student_id)
            .map(|r| RegisteredCourse {
                registration: r.clone(),
                course: self
                    .courses
                    .iter()
                    .find(|c| c.id == r.course_id)
                    .expect("registration references a course missing from the fixture")
                    .clone(),
            })
            .collect())
    }

    async fn save(&self, registration: NewRegistration) -> Result<Registration, AppError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        let row = Registration {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) as i64,
            student_id: registration.student_id,
            course_id: registration.course_id,
            price_cents: registration.price_cents,
            registered_at: registration.registered_at,
        };
        self.registrations.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn delete_by_student_and_course(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<(), AppError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.registrations
            .lock()
            .unwrap()
            .retain(|r| !(r.student_id == student_id && r.course_id == course_id));
        Ok(())
    }
}
