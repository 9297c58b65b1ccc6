//! Student Store Module
//!
//! The collection of student records and the operations over it.

use std::str::FromStr;

use serde_json::Value;
use tracing::warn;

use crate::error::{RegistryError, Result};
use crate::registry::record::{id_to_string, Student};

// == Replace Id Policy ==
/// What happens to `id` when a replacement body carries a different one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReplaceIdPolicy {
    /// Store the body verbatim, including its `id`.
    #[default]
    KeepBodyId,
    /// Force the stored `id` to the one used for lookup.
    PinPathId,
}

impl FromStr for ReplaceIdPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "body" => Ok(ReplaceIdPolicy::KeepBodyId),
            "path" => Ok(ReplaceIdPolicy::PinPathId),
            other => Err(format!("unknown replace id policy: {other}")),
        }
    }
}

// == Student Store ==
/// In-memory collection of student records, kept in insertion order.
#[derive(Debug, Default)]
pub struct StudentStore {
    /// Records in stored order
    students: Vec<Student>,
    /// Id handling on replace
    replace_policy: ReplaceIdPolicy,
}

impl StudentStore {
    // == Constructor ==
    /// Creates a store holding the given records.
    ///
    /// Callers are expected to pass records that already satisfy the
    /// required-field contract, e.g. the output of the seed loader.
    pub fn new(students: Vec<Student>) -> Self {
        Self {
            students,
            replace_policy: ReplaceIdPolicy::default(),
        }
    }

    /// Sets the id policy applied by [`StudentStore::replace`].
    pub fn with_replace_policy(mut self, policy: ReplaceIdPolicy) -> Self {
        self.replace_policy = policy;
        self
    }

    // == List ==
    /// Returns every record ordered by case-folded `name`.
    ///
    /// The sort is stable, so equal names keep their stored order. Stored
    /// order itself is left untouched.
    pub fn list(&self) -> Vec<Student> {
        let mut sorted = self.students.clone();
        sorted.sort_by_cached_key(Student::sort_key);
        sorted
    }

    // == Get ==
    /// Returns the first record whose `id` equals `id`.
    pub fn get(&self, id: &str) -> Result<Student> {
        self.position(id)
            .map(|index| self.students[index].clone())
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    // == Create ==
    /// Validates and appends a new record.
    ///
    /// The duplicate-id check runs before field validation.
    pub fn create(&mut self, candidate: Value) -> Result<Student> {
        if let Some(id) = candidate.get("id") {
            if self.students.iter().any(|s| s.id_value() == Some(id)) {
                return Err(RegistryError::DuplicateId(id_to_string(id)));
            }
        }

        let student = Student::validate(candidate)?;
        self.students.push(student.clone());
        Ok(student)
    }

    // == Replace ==
    /// Replaces the record found under `id` with `candidate`.
    ///
    /// Uniqueness is not re-checked. Under [`ReplaceIdPolicy::KeepBodyId`]
    /// the record may end up with an id other than `id`.
    pub fn replace(&mut self, id: &str, candidate: Value) -> Result<Student> {
        let index = self
            .position(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

        let mut student = Student::validate(candidate)?;

        if student.id() != Some(id) {
            match self.replace_policy {
                ReplaceIdPolicy::KeepBodyId => {
                    warn!(
                        path_id = id,
                        body_id = ?student.id_value(),
                        "Replacement body changes the record id"
                    );
                }
                ReplaceIdPolicy::PinPathId => student.set_id(id),
            }
        }

        self.students[index] = student.clone();
        Ok(student)
    }

    // == Delete ==
    /// Removes the record found under `id`, returning it.
    pub fn delete(&mut self, id: &str) -> Result<Student> {
        let index = self
            .position(id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        Ok(self.students.remove(index))
    }

    // == Length ==
    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    // == Is Empty ==
    /// Returns true if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.students.iter().position(|s| s.id() == Some(id))
    }
}
