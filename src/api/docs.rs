//! API Documentation
//!
//! OpenAPI document generated from the handler annotations.

use axum::Json;
use utoipa::{OpenApi, ToSchema};

use super::handlers;
use crate::models::{DeleteResponse, ErrorResponse};

/// Documented shape of a student record.
///
/// Only used for the generated document. Stored records accept any extra
/// fields and only check the required ones for truthiness.
#[derive(Debug, ToSchema)]
pub struct StudentSchema {
    #[schema(example = "x1")]
    pub id: String,
    #[schema(example = "Ana")]
    pub name: String,
    #[schema(example = 7)]
    pub age: u32,
    #[schema(example = "Maria e João")]
    pub parents: String,
    #[schema(example = "11 99999-0000")]
    pub phone: String,
    /// Special needs descriptor
    #[schema(example = "TEA")]
    pub special: String,
    #[schema(example = "active")]
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API Gestão de Ensino Especial",
        version = "1.0.0",
        description = "API para gerenciar entidades de alunos, professores, etc."
    ),
    paths(
        handlers::list_students,
        handlers::get_student,
        handlers::create_student,
        handlers::replace_student,
        handlers::delete_student,
    ),
    components(schemas(StudentSchema, DeleteResponse, ErrorResponse))
)]
pub struct ApiDoc;

/// Handler for GET /api-docs
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_student_paths() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

        assert_eq!(doc["info"]["title"], "API Gestão de Ensino Especial");
        assert!(doc["paths"]["/students"]["get"].is_object());
        assert!(doc["paths"]["/students"]["post"].is_object());
        assert!(doc["paths"]["/students/{id}"]["get"].is_object());
        assert!(doc["paths"]["/students/{id}"]["put"].is_object());
        assert!(doc["paths"]["/students/{id}"]["delete"].is_object());
    }

    #[test]
    fn test_openapi_student_schema() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let required = &doc["components"]["schemas"]["StudentSchema"]["required"];

        for field in ["id", "name", "age", "parents", "phone", "special", "status"] {
            assert!(
                required.as_array().unwrap().iter().any(|f| f == field),
                "{field} should be required"
            );
        }
    }
}
