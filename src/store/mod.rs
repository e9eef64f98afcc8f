//! JSON document storage.
//!
//! # Responsibilities
//! - Create the data directory and seed missing documents on startup
//! - Load and save the users, employees, policies and bookings documents
//! - Serialize read-modify-write sequences within this process
//!
//! # Design Decisions
//! - Every operation reads or rewrites a whole file; there is no cache
//! - A single mutex guards all four files; cross-process writers are not coordinated
//! - Seeding never overwrites an existing file

pub mod files;
pub mod models;
pub mod seed;

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use thiserror::Error;

use self::files::{read_json, write_json};
use self::models::{BookingsFile, EmployeesFile, PoliciesFile, UsersFile};
pub use self::models::{Booking, EmployeeRecord, Employees, LeaveBalance, Policies, UserRecord, Users};

pub const USERS_FILE: &str = "users.json";
pub const EMPLOYEES_FILE: &str = "employees.json";
pub const POLICIES_FILE: &str = "policies.json";
pub const BOOKINGS_FILE: &str = "bookings.json";

/// Errors raised while touching the data directory.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: malformed JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Handle to the four JSON documents under one directory.
#[derive(Debug)]
pub struct DataStore {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl DataStore {
    /// Open `dir`, creating it and any missing documents.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let store = Self {
            dir: dir.into(),
            lock: Mutex::new(()),
        };
        store.ensure_files_exist()?;
        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // Guards ordering only; a poisoned lock holds no state to repair.
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn ensure_files_exist(&self) -> StoreResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let _guard = self.guard();
        self.seed_if_missing(USERS_FILE, seed::users)?;
        self.seed_if_missing(EMPLOYEES_FILE, seed::employees)?;
        self.seed_if_missing(POLICIES_FILE, seed::policies)?;
        self.seed_if_missing(BOOKINGS_FILE, seed::bookings)?;
        Ok(())
    }

    fn seed_if_missing<T, F>(&self, file: &str, make: F) -> StoreResult<()>
    where
        T: serde::Serialize,
        F: FnOnce() -> T,
    {
        let path = self.path(file);
        if !path.exists() {
            write_json(&path, &make())?;
            tracing::info!(path = %path.display(), "Seeded data file");
        }
        Ok(())
    }

    pub fn load_users(&self) -> StoreResult<Users> {
        let _guard = self.guard();
        Ok(read_json::<UsersFile>(&self.path(USERS_FILE))?.users)
    }

    pub fn save_users(&self, users: Users) -> StoreResult<()> {
        let _guard = self.guard();
        write_json(&self.path(USERS_FILE), &UsersFile { users })
    }

    pub fn load_employees(&self) -> StoreResult<Employees> {
        let _guard = self.guard();
        Ok(read_json::<EmployeesFile>(&self.path(EMPLOYEES_FILE))?.employees)
    }

    pub fn save_employees(&self, employees: Employees) -> StoreResult<()> {
        let _guard = self.guard();
        write_json(&self.path(EMPLOYEES_FILE), &EmployeesFile { employees })
    }

    /// Look up one employee by (already normalized) email.
    pub fn employee(&self, email: &str) -> StoreResult<Option<EmployeeRecord>> {
        Ok(self.load_employees()?.remove(email))
    }

    pub fn load_policies(&self) -> StoreResult<Policies> {
        let _guard = self.guard();
        Ok(read_json::<PoliciesFile>(&self.path(POLICIES_FILE))?.policies)
    }

    pub fn load_bookings(&self) -> StoreResult<Vec<Booking>> {
        let _guard = self.guard();
        Ok(read_json::<BookingsFile>(&self.path(BOOKINGS_FILE))?.records)
    }

    /// Append one booking to `bookings.json`.
    pub fn append_booking(&self, booking: Booking) -> StoreResult<()> {
        let _guard = self.guard();
        let path = self.path(BOOKINGS_FILE);
        let mut file: BookingsFile = read_json(&path)?;
        file.records.push(booking);
        write_json(&path, &file)
    }

    /// Insert a new user and, if absent, a matching new-hire employee record.
    ///
    /// Without a requested id, `next_id` picks one from the users read under
    /// the same lock. Returns the assigned id, or `None` without writing
    /// anything when the email is taken.
    pub fn register(
        &self,
        email: &str,
        account: NewAccount,
        next_id: impl FnOnce(&Users) -> String,
    ) -> StoreResult<Option<String>> {
        let _guard = self.guard();

        let users_path = self.path(USERS_FILE);
        let mut users: UsersFile = read_json(&users_path)?;
        if users.users.contains_key(email) {
            return Ok(None);
        }
        let employee_id = account
            .employee_id
            .unwrap_or_else(|| next_id(&users.users));
        let employee = EmployeeRecord::new_hire(&account.name, &employee_id);
        users.users.insert(
            email.to_string(),
            UserRecord {
                name: Some(account.name),
                password: account.password,
                employee_id: employee_id.clone(),
            },
        );
        write_json(&users_path, &users)?;

        let employees_path = self.path(EMPLOYEES_FILE);
        let mut employees: EmployeesFile = read_json(&employees_path)?;
        if !employees.employees.contains_key(email) {
            employees.employees.insert(email.to_string(), employee);
            write_json(&employees_path, &employees)?;
        }
        Ok(Some(employee_id))
    }
}

/// A self-registration whose employee id may still be open.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub password: String,
    /// `None` takes the next free id.
    pub employee_id: Option<String>,
}
