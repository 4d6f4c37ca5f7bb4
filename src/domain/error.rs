//! Error kinds surfaced by the resource handlers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    /// Body is not JSON, not a JSON object, or carries a field of the wrong type.
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// `idInsumo` does not point at an existing Insumo row.
    #[error("Referenced Insumo does not exist")]
    InvalidReference,

    /// Carries the entity label, e.g. `"Insumo"`.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Only raised under [`DeletePolicy::Restrict`](crate::domain::DeletePolicy::Restrict).
    #[error("Insumo {insumo_id} is still referenced by {count} Fornecedor row(s)")]
    StillReferenced { insumo_id: i64, count: i64 },

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl InventoryError {
    pub fn not_json() -> Self {
        InventoryError::InvalidRequest("Request must be JSON".to_string())
    }
}
