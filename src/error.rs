//! Error types for the student registry
//!
//! Provides unified error handling using thiserror. The `Display` text of
//! [`RegistryError`] is the message sent to clients.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::registry::RequiredField;

// == Registry Error Enum ==
/// Errors surfaced by the registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No record carries the requested id
    #[error("Usuário não encontrado")]
    NotFound(String),

    /// A record with this id already exists
    #[error("O ID {0} já está em uso. Escolha um ID diferente.")]
    DuplicateId(String),

    /// A required field is absent or falsy
    #[error("{}", .0.message())]
    Validation(RequiredField),

    /// Request body could not be read as JSON
    #[error("Corpo da requisição inválido: {0}")]
    InvalidBody(String),
}

impl RegistryError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RegistryError::NotFound(_) => StatusCode::NOT_FOUND,
            RegistryError::DuplicateId(_)
            | RegistryError::Validation(_)
            | RegistryError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.to_string()));
        (self.status(), body).into_response()
    }
}

// == Seed Error Enum ==
/// Failures while loading the seed dataset at startup.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("seed file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("seed file must contain a JSON array of student records")]
    NotAnArray,

    #[error("seed record #{index} is invalid: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: RegistryError,
    },

    #[error("seed record #{index} repeats id {id}")]
    DuplicateId { index: usize, id: String },
}

// == Result Type Alias ==
/// Convenience Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RegistryError::NotFound("x".into()).to_string(),
            "Usuário não encontrado"
        );
        assert_eq!(
            RegistryError::DuplicateId("42".into()).to_string(),
            "O ID 42 já está em uso. Escolha um ID diferente."
        );
        assert_eq!(
            RegistryError::Validation(RequiredField::Name).to_string(),
            "Usuário precisa ter um 'name'"
        );
        assert_eq!(
            RegistryError::Validation(RequiredField::Parents).to_string(),
            "Usuário precisa ter 'parents'"
        );
    }

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            RegistryError::NotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RegistryError::DuplicateId("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RegistryError::Validation(RequiredField::Status).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RegistryError::InvalidBody("eof".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
