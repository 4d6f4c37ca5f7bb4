use crate::domain::{DeletePolicy, InventoryError};
use crate::storage::Database;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub delete_policy: DeletePolicy,
}

/// Shape of every error response.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct DeleteConfirmation {
    /// e.g. `"Insumo deleted"`.
    pub result: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InventoryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            InventoryError::InvalidRequest(_)
            | InventoryError::MissingFields(_)
            | InventoryError::InvalidReference => StatusCode::BAD_REQUEST,
            InventoryError::NotFound(_) => StatusCode::NOT_FOUND,
            InventoryError::StillReferenced { .. } => StatusCode::CONFLICT,
            InventoryError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error = match &self {
            InventoryError::Storage(e) => {
                tracing::error!(error = %e, "persistence failure");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

/// Unwraps a JSON body extraction; anything that is not JSON is an `InvalidRequest`.
pub fn json_body(body: Result<Json<JsonValue>, JsonRejection>) -> Result<JsonValue, InventoryError> {
    match body {
        Ok(Json(v)) => Ok(v),
        Err(e) => {
            tracing::debug!(rejection = %e, "request body is not JSON");
            Err(InventoryError::not_json())
        }
    }
}
