//! API Handlers
//!
//! HTTP request handlers for each student registry endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::{debug, info};

use super::docs::StudentSchema;
use crate::config::Config;
use crate::error::{RegistryError, Result, SeedError};
use crate::models::{DeleteResponse, ErrorResponse, HealthResponse};
use crate::registry::{load_seed, Student, StudentStore};

/// Greeting served at the root path.
pub const ROOT_GREETING: &str = "API Gestão de Ensino Especial";

/// Application state shared across all handlers.
///
/// Reads share the lock; create, replace and delete hold the write lock for
/// the whole validate-then-mutate step.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe student store
    pub store: Arc<RwLock<StudentStore>>,
}

impl AppState {
    /// Creates a new AppState with the given store.
    pub fn new(store: StudentStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Loads the seed file and applies the configured replace policy.
    pub fn from_config(config: &Config) -> std::result::Result<Self, SeedError> {
        let students = load_seed(&config.seed_path)?;
        let store = StudentStore::new(students).with_replace_policy(config.replace_id_policy);
        Ok(Self::new(store))
    }
}

/// Turns a body extraction failure into a registry error.
fn json_body(body: std::result::Result<Json<Value>, JsonRejection>) -> Result<Value> {
    body.map(|Json(value)| value)
        .map_err(|rejection| RegistryError::InvalidBody(rejection.body_text()))
}

/// Handler for GET /
pub async fn root_handler() -> &'static str {
    ROOT_GREETING
}

/// Handler for GET /students
///
/// Lists every student ordered by name, ignoring case.
#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "Lista de alunos ordenada por nome", body = [StudentSchema])
    )
)]
pub async fn list_students(State(state): State<AppState>) -> Json<Vec<Student>> {
    let store = state.store.read().await;
    let students = store.list();
    debug!("Listing {} students", students.len());

    Json(students)
}

/// Handler for GET /students/{id}
#[utoipa::path(
    get,
    path = "/students/{id}",
    params(("id" = String, Path, description = "ID do aluno")),
    responses(
        (status = 200, description = "Aluno encontrado", body = StudentSchema),
        (status = 404, description = "Aluno não encontrado", body = ErrorResponse)
    )
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Student>> {
    let store = state.store.read().await;
    let student = store.get(&id)?;
    debug!(id = %id, "Student found");

    Ok(Json(student))
}

/// Handler for POST /students
///
/// Creates a student after the duplicate-id and required-field checks.
#[utoipa::path(
    post,
    path = "/students",
    request_body = StudentSchema,
    responses(
        (status = 201, description = "Aluno criado", body = StudentSchema),
        (status = 400, description = "ID duplicado ou campo obrigatório ausente", body = ErrorResponse)
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Student>)> {
    let candidate = json_body(body)?;

    let mut store = state.store.write().await;
    let student = store.create(candidate)?;
    info!(id = ?student.id_value(), total = store.len(), "Student created");

    Ok((StatusCode::CREATED, Json(student)))
}

/// Handler for PUT /students/{id}
///
/// Replaces the whole record found under the path id.
#[utoipa::path(
    put,
    path = "/students/{id}",
    params(("id" = String, Path, description = "ID do aluno")),
    request_body = StudentSchema,
    responses(
        (status = 200, description = "Aluno substituído", body = StudentSchema),
        (status = 400, description = "Campo obrigatório ausente", body = ErrorResponse),
        (status = 404, description = "Aluno não encontrado", body = ErrorResponse)
    )
)]
pub async fn replace_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<Student>> {
    let candidate = json_body(body)?;

    let mut store = state.store.write().await;
    let student = store.replace(&id, candidate)?;
    info!(id = %id, "Student replaced");

    Ok(Json(student))
}

/// Handler for DELETE /students/{id}
#[utoipa::path(
    delete,
    path = "/students/{id}",
    params(("id" = String, Path, description = "ID do aluno")),
    responses(
        (status = 200, description = "Aluno removido", body = DeleteResponse),
        (status = 404, description = "Aluno não encontrado", body = ErrorResponse)
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let mut store = state.store.write().await;
    store.delete(&id)?;
    info!(id = %id, total = store.len(), "Student deleted");

    Ok(Json(DeleteResponse::deleted()))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.store.read().await;
    Json(HealthResponse::healthy(store.len()))
}
