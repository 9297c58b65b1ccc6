//! Student Record Module
//!
//! The `Student` record type and the required-field contract every stored
//! record satisfies.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{RegistryError, Result};

// == Required Field ==
/// Fields every student record must carry with a truthy value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Id,
    Name,
    Age,
    Parents,
    Phone,
    Special,
    Status,
}

impl RequiredField {
    /// All required fields, in the order they are checked.
    pub const ALL: [RequiredField; 7] = [
        RequiredField::Id,
        RequiredField::Name,
        RequiredField::Age,
        RequiredField::Parents,
        RequiredField::Phone,
        RequiredField::Special,
        RequiredField::Status,
    ];

    /// JSON key of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            RequiredField::Id => "id",
            RequiredField::Name => "name",
            RequiredField::Age => "age",
            RequiredField::Parents => "parents",
            RequiredField::Phone => "phone",
            RequiredField::Special => "special",
            RequiredField::Status => "status",
        }
    }

    /// Client-facing message for a missing field.
    pub fn message(self) -> String {
        match self {
            RequiredField::Parents => "Usuário precisa ter 'parents'".to_string(),
            field => format!("Usuário precisa ter um '{}'", field.as_str()),
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Truthiness ==
/// JavaScript truthiness over JSON values.
///
/// `null`, `false`, zero and the empty string are falsy; everything else,
/// including empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Renders an id value the way it appears in client messages.
pub(crate) fn id_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// == Student ==
/// A single student record.
///
/// Stored as the JSON object the client sent, so unknown fields pass through
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Student(Map<String, Value>);

impl Student {
    /// Validates a candidate body against the required-field contract.
    ///
    /// Fields are checked in [`RequiredField::ALL`] order and the first
    /// missing one is reported. A non-object body has no `id`.
    pub fn validate(candidate: Value) -> Result<Self> {
        let fields = match candidate {
            Value::Object(fields) => fields,
            _ => return Err(RegistryError::Validation(RequiredField::Id)),
        };

        for field in RequiredField::ALL {
            if !fields.get(field.as_str()).is_some_and(is_truthy) {
                return Err(RegistryError::Validation(field));
            }
        }

        Ok(Self(fields))
    }

    /// Raw `id` value.
    pub fn id_value(&self) -> Option<&Value> {
        self.0.get("id")
    }

    /// The `id` when it is a string.
    pub fn id(&self) -> Option<&str> {
        self.id_value().and_then(Value::as_str)
    }

    /// Case-folded sort key derived from `name`.
    ///
    /// Non-string names sort by their JSON text.
    pub fn sort_key(&self) -> String {
        match self.0.get("name") {
            Some(Value::String(name)) => name.to_lowercase(),
            Some(other) => other.to_string().to_lowercase(),
            None => String::new(),
        }
    }

    /// Looks up any field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Overwrites the `id` field.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.0.insert("id".to_string(), Value::String(id.into()));
    }

    /// Consumes the record, returning its JSON object.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}
