//! Response DTOs for the student registry API
//!
//! Defines the structure of outgoing HTTP response bodies that are not
//! student records themselves.

use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgment body for DELETE /students/{id}
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteResponse {
    /// Success message
    pub mensagem: String,
}

impl DeleteResponse {
    /// Creates the standard deletion acknowledgment
    pub fn deleted() -> Self {
        Self {
            mensagem: "Usuário deletado com sucesso.".to_string(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Number of records currently stored
    pub students: usize,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(students: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            students,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub erro: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(erro: impl Into<String>) -> Self {
        Self { erro: erro.into() }
    }
}
