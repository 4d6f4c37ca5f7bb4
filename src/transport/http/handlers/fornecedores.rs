use crate::app::fornecedores;
use crate::domain::model::{Fornecedor, Model};
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
    path = "/fornecedores",
    responses((status = 200, description = "All suppliers", body = [Fornecedor]))
)]
pub async fn list_fornecedores_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Fornecedor>>, InventoryError> {
    let mut session = state.db.session().await?;
    Ok(Json(fornecedores::list(&mut session).await?))
}

#[utoipa::path(
    get,
    path = "/fornecedores/{id}",
    params(("id" = i64, Path, description = "Fornecedor id")),
    responses(
        (status = 200, description = "Supplier", body = Fornecedor),
        (status = 404, description = "Fornecedor not found", body = crate::transport::http::types::ErrorBody)
    )
)]
pub async fn get_fornecedor_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Fornecedor>, InventoryError> {
    let id = resource_id(Fornecedor::LABEL, path)?;
    let mut session = state.db.session().await?;
    Ok(Json(fornecedores::get(&mut session, id).await?))
}

#[utoipa::path(
    post,
    path = "/fornecedores",
    request_body = crate::domain::model::FornecedorPatch,
    responses(
        (status = 201, description = "Supplier created", body = Fornecedor),
        (status = 400, description = "Body is not a JSON object, misses fields, or idInsumo does not exist", body = crate::transport::http::types::ErrorBody)
    )
)]
pub async fn create_fornecedor_handler(
    State(state): State<AppState>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<(StatusCode, Json<Fornecedor>), InventoryError> {
    let payload = json_body(body)?;
    let mut session = state.db.session().await?;
    let created = fornecedores::create(&mut session, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/fornecedores/{id}",
    params(("id" = i64, Path, description = "Fornecedor id")),
    request_body = crate::domain::model::FornecedorPatch,
    responses(
        (status = 200, description = "Merged supplier", body = Fornecedor),
        (status = 400, description = "Body is not a JSON object, or idInsumo does not exist", body = crate::transport::http::types::ErrorBody),
        (status = 404, description = "Fornecedor not found", body = crate::transport::http::types::ErrorBody)
    )
)]
pub async fn update_fornecedor_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<Fornecedor>, InventoryError> {
    let payload = json_body(body)?;
    let id = resource_id(Fornecedor::LABEL, path)?;
    let mut session = state.db.session().await?;
    Ok(Json(fornecedores::update(&mut session, id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/fornecedores/{id}",
    params(("id" = i64, Path, description = "Fornecedor id")),
    responses(
        (status = 200, description = "Supplier deleted", body = DeleteConfirmation),
        (status = 404, description = "Fornecedor not found", body = crate::transport::http::types::ErrorBody)
    )
)]
pub async fn delete_fornecedor_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteConfirmation>, InventoryError> {
    let id = resource_id(Fornecedor::LABEL, path)?;
    let mut session = state.db.session().await?;
    fornecedores::delete(&mut session, id).await?;
    Ok(Json(DeleteConfirmation {
        result: format!("{} deleted", Fornecedor::LABEL),
    }))
}
