//! Response models for the student registry API
//!
//! DTOs for bodies that are not student records. Student records travel
//! as [`crate::registry::Student`] directly.

pub mod responses;

// Re-export commonly used types
pub use responses::{DeleteResponse, ErrorResponse, HealthResponse};
