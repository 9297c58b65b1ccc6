//! API Module
//!
//! HTTP handlers and routing for the student registry REST API.
//!
//! # Endpoints
//! - `GET /` - Greeting
//! - `GET /students`, `POST /students`
//! - `GET /students/:id`, `PUT /students/:id`, `DELETE /students/:id`
//! - `GET /api-docs` - OpenAPI document
//! - `GET /health` - Health check endpoint

pub mod docs;
pub mod handlers;
pub mod routes;

pub use docs::ApiDoc;
pub use handlers::*;
pub use routes::create_router;
