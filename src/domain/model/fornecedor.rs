use super::{require, Model};
use crate::domain::InventoryError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A supplier as stored in the `Fornecedor` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct Fornecedor {
    #[sqlx(rename = "idFornecedor")]
    pub id: i64,
    #[serde(rename = "nomeFornecedor")]
    #[sqlx(rename = "nomeFornecedor")]
    pub name: String,
    /// Denormalized item name; not a reference.
    #[serde(rename = "insumoFornecedor")]
    #[sqlx(rename = "insumoFornecedor")]
    pub supplied_item_label: String,
    #[serde(rename = "precoInsumo")]
    #[sqlx(rename = "precoInsumo")]
    pub price: f64,
    #[serde(rename = "contatoTelefone")]
    #[sqlx(rename = "contatoTelefone")]
    pub contact_phone: String,
    #[serde(rename = "contatoEmail")]
    #[sqlx(rename = "contatoEmail")]
    pub contact_email: String,
    /// Must name an existing Insumo when written.
    #[serde(rename = "idInsumo")]
    #[sqlx(rename = "idInsumo")]
    pub insumo_id: i64,
}

impl Model for Fornecedor {
    const LABEL: &'static str = "Fornecedor";
    const TABLE: &'static str = "Fornecedor";
    const ID_COLUMN: &'static str = "idFornecedor";
    const COLUMNS: &'static [&'static str] = &[
        "idFornecedor",
        "nomeFornecedor",
        "insumoFornecedor",
        "precoInsumo",
        "contatoTelefone",
        "contatoEmail",
        "idInsumo",
    ];
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewFornecedor {
    pub name: String,
    pub supplied_item_label: String,
    pub price: f64,
    pub contact_phone: String,
    pub contact_email: String,
    pub insumo_id: i64,
}

impl NewFornecedor {
    pub fn with_id(self, id: i64) -> Fornecedor {
        Fornecedor {
            id,
            name: self.name,
            supplied_item_label: self.supplied_item_label,
            price: self.price,
            contact_phone: self.contact_phone,
            contact_email: self.contact_email,
            insumo_id: self.insumo_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct FornecedorPatch {
    #[serde(rename = "nomeFornecedor", default)]
    pub name: Option<String>,
    #[serde(rename = "insumoFornecedor", default)]
    pub supplied_item_label: Option<String>,
    #[serde(rename = "precoInsumo", default)]
    pub price: Option<f64>,
    #[serde(rename = "contatoTelefone", default)]
    pub contact_phone: Option<String>,
    #[serde(rename = "contatoEmail", default)]
    pub contact_email: Option<String>,
    #[serde(rename = "idInsumo", default)]
    pub insumo_id: Option<i64>,
}

impl FornecedorPatch {
    pub fn into_new(self) -> Result<NewFornecedor, InventoryError> {
        let mut missing = Vec::new();
        let name = require(self.name, "nomeFornecedor", &mut missing);
        let label = require(self.supplied_item_label, "insumoFornecedor", &mut missing);
        let price = require(self.price, "precoInsumo", &mut missing);
        let phone = require(self.contact_phone, "contatoTelefone", &mut missing);
        let email = require(self.contact_email, "contatoEmail", &mut missing);
        let insumo_id = require(self.insumo_id, "idInsumo", &mut missing);

        match (name, label, price, phone, email, insumo_id) {
            (
                Some(name),
                Some(supplied_item_label),
                Some(price),
                Some(contact_phone),
                Some(contact_email),
                Some(insumo_id),
            ) => Ok(NewFornecedor {
                name,
                supplied_item_label,
                price,
                contact_phone,
                contact_email,
                insumo_id,
            }),
            _ => Err(InventoryError::MissingFields(missing)),
        }
    }
}

impl Fornecedor {
    pub fn merge(existing: &Fornecedor, patch: &FornecedorPatch) -> Fornecedor {
        Fornecedor {
            id: existing.id,
            name: patch.name.clone().unwrap_or_else(|| existing.name.clone()),
            supplied_item_label: patch
                .supplied_item_label
                .clone()
                .unwrap_or_else(|| existing.supplied_item_label.clone()),
            price: patch.price.unwrap_or(existing.price),
            contact_phone: patch
                .contact_phone
                .clone()
                .unwrap_or_else(|| existing.contact_phone.clone()),
            contact_email: patch
                .contact_email
                .clone()
                .unwrap_or_else(|| existing.contact_email.clone()),
            insumo_id: patch.insumo_id.unwrap_or(existing.insumo_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::parse_payload;
    use serde_json::json;

    fn xyz() -> Fornecedor {
        Fornecedor {
            id: 7,
            name: "Papelaria XYZ".into(),
            supplied_item_label: "Papel A4".into(),
            price: 23.9,
            contact_phone: "11999999999".into(),
            contact_email: "contato@xyz.com".into(),
            insumo_id: 1,
        }
    }

    #[test]
    fn merge_keeps_reference_when_patch_omits_it() {
        let patch = FornecedorPatch {
            price: Some(19.5),
            ..Default::default()
        };
        let merged = Fornecedor::merge(&xyz(), &patch);
        assert_eq!(merged.price, 19.5);
        assert_eq!(merged.insumo_id, 1);
        assert_eq!(merged.name, "Papelaria XYZ");
    }

    #[test]
    fn price_accepts_integer_json_numbers() {
        let patch: FornecedorPatch = parse_payload(json!({"precoInsumo": 20})).unwrap();
        assert_eq!(patch.price, Some(20.0));
    }

    #[test]
    fn creation_requires_reference_field() {
        let patch: FornecedorPatch = parse_payload(json!({
            "nomeFornecedor": "ABC",
            "insumoFornecedor": "Caneta",
            "precoInsumo": 1.5,
            "contatoTelefone": "1100000000",
            "contatoEmail": "abc@example.com"
        }))
        .unwrap();
        assert!(matches!(
            patch.into_new(),
            Err(InventoryError::MissingFields(f)) if f == vec!["idInsumo"]
        ));
    }
}
