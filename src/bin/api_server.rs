// src/bin/api_server.rs

use inventory_service::infra::{config, telemetry};
use inventory_service::transport;
use inventory_service::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    // --- Configuration ---
    let database_url = config::database_url();
    let max_connections = config::max_connections()?;
    let delete_policy = config::insumo_delete_policy()?;
    let bind_addr = config::bind_addr();

    // --- Store Initialization ---
    tracing::info!(%database_url, max_connections, "opening database");
    let db = Database::connect(&database_url, max_connections).await?;

    let app_state = transport::http::AppState { db, delete_policy };
    tracing::info!(%delete_policy, "insumo delete policy");

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("API server listening on http://{}", listener.local_addr()?);
    tracing::info!("Swagger UI available at /swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
