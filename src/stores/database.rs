use crate::core::error::StoreError;
use crate::models::course::Course;
use crate::models::user::UserRecord;
use crate::stores::user_store::UserStore;
use crate::wal::wal::{Wal, WalOperation};
use anyhow::{Context, Result};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::debug;

/// Record store handle
///
/// Built once per process and shared through `AppState`. Every operation fails
/// with [`StoreError::Unavailable`] until [`Database::connect`] has succeeded.
/// Documents live in memory; every mutation is written to the WAL before it
/// becomes visible.
pub struct Database {
    wal_path: PathBuf,
    wal: OnceLock<Wal>,
    users: DashMap<String, UserRecord>,
    courses: DashMap<String, Course>,
}

impl Database {
    pub fn new(wal_path: PathBuf, user_capacity: usize) -> Self {
        Self {
            wal_path,
            wal: OnceLock::new(),
            users: DashMap::with_capacity(user_capacity),
            courses: DashMap::new(),
        }
    }

    /// Open the WAL and replay it into memory
    ///
    /// Returns the number of operations replayed. Calling it again on a ready
    /// handle is a no-op. Must not race with another `connect` on the same handle.
    pub fn connect(&self) -> Result<usize> {
        if self.is_ready() {
            return Ok(0);
        }

        let wal = Wal::new(self.wal_path.clone())
            .context("Failed to initialize WAL")?;

        let operations = wal.replay()
            .context("Failed to replay WAL")?;

        for op in &operations {
            match op {
                WalOperation::PutUser { user } => {
                    self.users.insert(user.email.clone(), user.clone());
                }
                WalOperation::PutCourse { course } => {
                    self.courses.insert(course.id.clone(), course.clone());
                }
            }
        }

        // A concurrent connect that won the race already holds an equivalent WAL
        let _ = self.wal.set(wal);

        debug!(
            wal_path = %self.wal_path.display(),
            operations = operations.len(),
            "Record store connected"
        );

        Ok(operations.len())
    }

    /// Mark the handle ready on an already opened WAL without replaying it
    #[cfg(test)]
    pub(crate) fn connect_with(&self, wal: Wal) {
        let _ = self.wal.set(wal);
    }

    pub fn is_ready(&self) -> bool {
        self.wal.get().is_some()
    }

    fn wal(&self) -> Result<&Wal, StoreError> {
        self.wal.get().ok_or(StoreError::Unavailable)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn insert_course(&self, course: Course) -> Result<Course, StoreError> {
        let wal = self.wal()?;

        wal.log_operation(&WalOperation::PutCourse { course: course.clone() })?;
        self.courses.insert(course.id.clone(), course.clone());

        Ok(course)
    }

    #[cfg(test)]
    pub fn get_course(&self, id: &str) -> Result<Option<Course>, StoreError> {
        self.wal()?;
        Ok(self.courses.get(id).map(|entry| entry.value().clone()))
    }
}

impl UserStore for Database {
    fn find_user(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        self.wal()?;
        Ok(self.users.get(email).map(|entry| entry.value().clone()))
    }

    fn insert_user_if_absent(&self, record: UserRecord) -> Result<(UserRecord, bool), StoreError> {
        let wal = self.wal()?;

        match self.users.entry(record.email.clone()) {
            Entry::Occupied(existing) => Ok((existing.get().clone(), false)),
            Entry::Vacant(vacant) => {
                wal.log_operation(&WalOperation::PutUser { user: record.clone() })?;
                vacant.insert(record.clone());
                Ok((record, true))
            }
        }
    }

    fn upsert_user_with(
        &self,
        email: &str,
        update: &mut dyn FnMut(&mut UserRecord),
    ) -> Result<UserRecord, StoreError> {
        let wal = self.wal()?;

        // The entry guard holds the shard lock for the whole read-modify-write
        match self.users.entry(email.to_string()) {
            Entry::Occupied(mut existing) => {
                let mut updated = existing.get().clone();
                update(&mut updated);
                wal.log_operation(&WalOperation::PutUser { user: updated.clone() })?;
                existing.insert(updated.clone());
                Ok(updated)
            }
            Entry::Vacant(vacant) => {
                let mut created = UserRecord::uninitialized(email);
                update(&mut created);
                wal.log_operation(&WalOperation::PutUser { user: created.clone() })?;
                vacant.insert(created.clone());
                Ok(created)
            }
        }
    }
}
