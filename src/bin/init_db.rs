//! Creates both tables and inserts the sample data. Safe to run repeatedly.

use inventory_service::infra::{config, telemetry};
use inventory_service::storage::schema;
use inventory_service::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    let database_url = config::database_url();
    let db = Database::connect(&database_url, 1).await?;
    tracing::info!(%database_url, "schema ensured");

    let report = schema::seed_sample_data(&db).await?;
    tracing::info!(
        insumo_id = report.insumo_id,
        inserted_insumo = report.inserted_insumo,
        inserted_fornecedor = report.inserted_fornecedor,
        "sample data seeded"
    );

    db.pool().close().await;
    tracing::info!("connection closed");
    Ok(())
}
