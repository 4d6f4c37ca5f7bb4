use crate::app::insumos;
use crate::domain::model::{Insumo, Model};
use crate::domain::InventoryError;
use crate::transport::http::handlers::common::resource_id;
use crate::transport::http::types::{json_body, AppState, DeleteConfirmation};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value as JsonValue;

#[utoipa::path(
    get,
    path = "/insumos",
    responses((status = 200, description = "All supply items", body = [Insumo]))
)]
pub async fn list_insumos_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Insumo>>, InventoryError> {
    let mut session = state.db.session().await?;
    Ok(Json(insumos::list(&mut session).await?))
}

#[utoipa::path(
    get,
    path = "/insumos/{id}",
    params(("id" = i64, Path, description = "Insumo id")),
    responses(
        (status = 200, description = "Supply item", body = Insumo),
        (status = 404, description = "Insumo not found", body = crate::transport::http::types::ErrorBody)
    )
)]
pub async fn get_insumo_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Insumo>, InventoryError> {
    let id = resource_id(Insumo::LABEL, path)?;
    let mut session = state.db.session().await?;
    Ok(Json(insumos::get(&mut session, id).await?))
}

#[utoipa::path(
    post,
    path = "/insumos",
    request_body = crate::domain::model::InsumoPatch,
    responses(
        (status = 201, description = "Supply item created", body = Insumo),
        (status = 400, description = "Body is not a JSON object or misses fields", body = crate::transport::http::types::ErrorBody)
    )
)]
pub async fn create_insumo_handler(
    State(state): State<AppState>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<(StatusCode, Json<Insumo>), InventoryError> {
    let payload = json_body(body)?;
    let mut session = state.db.session().await?;
    let created = insumos::create(&mut session, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/insumos/{id}",
    params(("id" = i64, Path, description = "Insumo id")),
    request_body = crate::domain::model::InsumoPatch,
    responses(
        (status = 200, description = "Merged supply item", body = Insumo),
        (status = 400, description = "Body is not a JSON object", body = crate::transport::http::types::ErrorBody),
        (status = 404, description = "Insumo not found", body = crate::transport::http::types::ErrorBody)
    )
)]
pub async fn update_insumo_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<Insumo>, InventoryError> {
    let payload = json_body(body)?;
    let id = resource_id(Insumo::LABEL, path)?;
    let mut session = state.db.session().await?;
    Ok(Json(insumos::update(&mut session, id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/insumos/{id}",
    params(("id" = i64, Path, description = "Insumo id")),
    responses(
        (status = 200, description = "Supply item deleted", body = DeleteConfirmation),
        (status = 404, description = "Insumo not found", body = crate::transport::http::types::ErrorBody),
        (status = 409, description = "Still referenced (restrict policy only)", body = crate::transport::http::types::ErrorBody)
    )
)]
pub async fn delete_insumo_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteConfirmation>, InventoryError> {
    let id = resource_id(Insumo::LABEL, path)?;
    let mut session = state.db.session().await?;
    insumos::delete(&mut session, id, state.delete_policy).await?;
    Ok(Json(DeleteConfirmation {
        result: format!("{} deleted", Insumo::LABEL),
    }))
}
