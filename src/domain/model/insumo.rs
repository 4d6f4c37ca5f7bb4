use super::{require, Model};
use crate::domain::InventoryError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A supply item as stored in the `Insumo` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct Insumo {
    #[sqlx(rename = "idInsumo")]
    pub id: i64,
    #[serde(rename = "nomeInsumo")]
    #[sqlx(rename = "nomeInsumo")]
    pub name: String,
    #[serde(rename = "QtdInsumo")]
    #[sqlx(rename = "QtdInsumo")]
    pub quantity: i64,
    #[serde(rename = "descricaoInsumo")]
    #[sqlx(rename = "descricaoInsumo")]
    pub description: String,
    /// Free-form, e.g. `"Ativo"`.
    #[serde(rename = "Status")]
    #[sqlx(rename = "Status")]
    pub status: String,
}

impl Model for Insumo {
    const LABEL: &'static str = "Insumo";
    const TABLE: &'static str = "Insumo";
    const ID_COLUMN: &'static str = "idInsumo";
    const COLUMNS: &'static [&'static str] =
        &["idInsumo", "nomeInsumo", "QtdInsumo", "descricaoInsumo", "Status"];
}

/// A validated creation payload (every field present).
#[derive(Debug, Clone, PartialEq)]
pub struct NewInsumo {
    pub name: String,
    pub quantity: i64,
    pub description: String,
    pub status: String,
}

impl NewInsumo {
    pub fn with_id(self, id: i64) -> Insumo {
        Insumo {
            id,
            name: self.name,
            quantity: self.quantity,
            description: self.description,
            status: self.status,
        }
    }
}

/// Request body for create and update; every field optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct InsumoPatch {
    #[serde(rename = "nomeInsumo", default)]
    pub name: Option<String>,
    #[serde(rename = "QtdInsumo", default)]
    pub quantity: Option<i64>,
    #[serde(rename = "descricaoInsumo", default)]
    pub description: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
}

impl InsumoPatch {
    /// Turns the patch into a creation payload, listing every absent field on failure.
    pub fn into_new(self) -> Result<NewInsumo, InventoryError> {
        let mut missing = Vec::new();
        let name = require(self.name, "nomeInsumo", &mut missing);
        let quantity = require(self.quantity, "QtdInsumo", &mut missing);
        let description = require(self.description, "descricaoInsumo", &mut missing);
        let status = require(self.status, "Status", &mut missing);

        match (name, quantity, description, status) {
            (Some(name), Some(quantity), Some(description), Some(status)) => Ok(NewInsumo {
                name,
                quantity,
                description,
                status,
            }),
            _ => Err(InventoryError::MissingFields(missing)),
        }
    }
}

impl Insumo {
    /// Partial-update merge: fields present in `patch` win, the rest keep `existing`'s value.
    pub fn merge(existing: &Insumo, patch: &InsumoPatch) -> Insumo {
        Insumo {
            id: existing.id,
            name: patch.name.clone().unwrap_or_else(|| existing.name.clone()),
            quantity: patch.quantity.unwrap_or(existing.quantity),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| existing.description.clone()),
            status: patch.status.clone().unwrap_or_else(|| existing.status.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::parse_payload;
    use serde_json::json;

    fn papel() -> Insumo {
        Insumo {
            id: 1,
            name: "Papel A4".into(),
            quantity: 500,
            description: "Resma".into(),
            status: "Ativo".into(),
        }
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let existing = papel();
        assert_eq!(Insumo::merge(&existing, &InsumoPatch::default()), existing);
    }

    #[test]
    fn single_field_patch_changes_only_that_field() {
        let existing = papel();
        let patch = InsumoPatch {
            quantity: Some(42),
            ..Default::default()
        };
        let merged = Insumo::merge(&existing, &patch);
        assert_eq!(merged.quantity, 42);
        assert_eq!(
            Insumo {
                quantity: 500,
                ..merged
            },
            existing
        );
    }

    #[test]
    fn creation_reports_every_missing_field_in_order() {
        let patch: InsumoPatch = parse_payload(json!({"QtdInsumo": 3})).unwrap();
        match patch.into_new() {
            Err(InventoryError::MissingFields(fields)) => {
                assert_eq!(fields, vec!["nomeInsumo", "descricaoInsumo", "Status"])
            }
            other => panic!("expected MissingFields, got {:?}", other),
        }
    }

    #[test]
    fn null_counts_as_missing() {
        let patch: InsumoPatch = parse_payload(json!({
            "nomeInsumo": "Caneta",
            "QtdInsumo": 10,
            "descricaoInsumo": null,
            "Status": "Ativo"
        }))
        .unwrap();
        assert!(matches!(
            patch.into_new(),
            Err(InventoryError::MissingFields(f)) if f == vec!["descricaoInsumo"]
        ));
    }

    #[test]
    fn record_serializes_with_wire_field_names() {
        let value = serde_json::to_value(papel()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "nomeInsumo": "Papel A4",
                "QtdInsumo": 500,
                "descricaoInsumo": "Resma",
                "Status": "Ativo"
            })
        );
    }
}
