//! Student Registry - HTTP CRUD service over student records
//!
//! Keeps an in-memory collection seeded from a JSON file and exposes
//! list, get, create, replace and delete over JSON, plus an OpenAPI document.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{RegistryError, SeedError};
pub use registry::{Student, StudentStore};
