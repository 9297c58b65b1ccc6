//! Seed Data Module
//!
//! Loads the initial student records from a JSON file at startup.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::error::SeedError;
use super::record::id_to_string;
use super::Student;

/// Reads and validates the seed file at `path`.
///
/// The file must hold a JSON array of objects. Every record must satisfy the
/// required-field contract and ids must be unique.
pub fn load_seed(path: impl AsRef<Path>) -> Result<Vec<Student>, SeedError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let students = parse_seed(&raw)?;

    info!(
        "Loaded {} seed records from {}",
        students.len(),
        path.display()
    );
    Ok(students)
}

/// Parses and validates seed records from a JSON string.
pub fn parse_seed(raw: &str) -> Result<Vec<Student>, SeedError> {
    let records = match serde_json::from_str::<Value>(raw)? {
        Value::Array(records) => records,
        _ => return Err(SeedError::NotAnArray),
    };

    let mut seen = HashSet::new();
    let mut students = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let student = Student::validate(record)
            .map_err(|source| SeedError::InvalidRecord { index, source })?;

        if let Some(id) = student.id_value() {
            let id = id_to_string(id);
            if !seen.insert(id.clone()) {
                return Err(SeedError::DuplicateId { index, id });
            }
        }

        students.push(student);
    }

    Ok(students)
}
