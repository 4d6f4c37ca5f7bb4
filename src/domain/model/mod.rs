//! Statically shaped records for the two inventory entities.

use crate::domain::InventoryError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;
use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;

pub mod fornecedor;
pub mod insumo;

pub use fornecedor::{Fornecedor, FornecedorPatch, NewFornecedor};
pub use insumo::{Insumo, InsumoPatch, NewInsumo};

/// Table metadata shared by every persisted entity.
///
/// Lets the gateway helpers list, fetch and delete any entity without knowing
/// its column layout. The constants are identifiers, never user input.
pub trait Model: Serialize + for<'r> FromRow<'r, SqliteRow> + Send + Unpin {
    /// Human-readable name used in error and confirmation messages.
    const LABEL: &'static str;

    const TABLE: &'static str;

    const ID_COLUMN: &'static str;

    /// Column list for `SELECT`, in storage order, identity first.
    const COLUMNS: &'static [&'static str];
}

/// Decodes a request body into a patch structure.
///
/// The body must be a JSON object. Absent and `null` fields both become `None`;
/// a present field of the wrong JSON type is rejected.
pub fn parse_payload<P: DeserializeOwned>(body: JsonValue) -> Result<P, InventoryError> {
    if !body.is_object() {
        return Err(InventoryError::not_json());
    }
    serde_json::from_value(body)
        .map_err(|e| InventoryError::InvalidRequest(format!("Invalid field value: {}", e)))
}

/// Pushes `name` onto `missing` when `value` is absent.
pub(crate) fn require<T>(
    value: Option<T>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<T> {
    if value.is_none() {
        missing.push(name);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_object_bodies_are_invalid_requests() {
        for body in [json!([1, 2]), json!("text"), json!(5), JsonValue::Null] {
            let err = parse_payload::<InsumoPatch>(body).unwrap_err();
            assert!(matches!(err, InventoryError::InvalidRequest(_)));
            assert_eq!(err.to_string(), "Request must be JSON");
        }
    }

    #[test]
    fn wrong_field_type_is_an_invalid_request() {
        let err = parse_payload::<InsumoPatch>(json!({"QtdInsumo": "many"})).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidRequest(_)));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let patch: InsumoPatch = parse_payload(json!({"color": "blue"})).unwrap();
        assert_eq!(patch, InsumoPatch::default());
    }
}
