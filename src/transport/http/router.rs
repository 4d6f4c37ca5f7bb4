use crate::domain::model::{Fornecedor, FornecedorPatch, Insumo, InsumoPatch};
use crate::transport::http::handlers::{fornecedores, health, index, insumos};
use crate::transport::http::types::{AppState, DeleteConfirmation, ErrorBody, HealthResponse};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        index::index_handler,
        health::healthcheck_handler,
        insumos::list_insumos_handler,
        insumos::get_insumo_handler,
        insumos::create_insumo_handler,
        insumos::update_insumo_handler,
        insumos::delete_insumo_handler,
        fornecedores::list_fornecedores_handler,
        fornecedores::get_fornecedor_handler,
        fornecedores::create_fornecedor_handler,
        fornecedores::update_fornecedor_handler,
        fornecedores::delete_fornecedor_handler
    ),
    components(schemas(
        Insumo,
        InsumoPatch,
        Fornecedor,
        FornecedorPatch,
        ErrorBody,
        DeleteConfirmation,
        HealthResponse
    ))
)]
pub struct ApiDoc;

async fn fallback_handler() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Not found".to_string(),
        }),
    )
}

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/insumos",
            get(insumos::list_insumos_handler).post(insumos::create_insumo_handler),
        )
        .route(
            "/insumos/:id",
            get(insumos::get_insumo_handler)
                .put(insumos::update_insumo_handler)
                .delete(insumos::delete_insumo_handler),
        )
        .route(
            "/fornecedores",
            get(fornecedores::list_fornecedores_handler)
                .post(fornecedores::create_fornecedor_handler),
        )
        .route(
            "/fornecedores/:id",
            get(fornecedores::get_fornecedor_handler)
                .put(fornecedores::update_fornecedor_handler)
                .delete(fornecedores::delete_fornecedor_handler),
        )
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
