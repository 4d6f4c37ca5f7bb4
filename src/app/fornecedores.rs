//! Resource handler for suppliers.
//!
//! Same shape as the Insumo handler plus a referential check: `idInsumo` must
//! name an existing Insumo on create, and on update whenever the patch carries it.
//! An update that omits `idInsumo` keeps the stored value without re-checking it.

use crate::app::insumos;
use crate::domain::model::{parse_payload, Fornecedor, FornecedorPatch, Model};
use crate::domain::InventoryError;
use crate::storage::{repository, Session};
use serde_json::Value as JsonValue;

pub async fn list(session: &mut Session) -> Result<Vec<Fornecedor>, InventoryError> {
    Ok(repository::list_all::<Fornecedor>(session).await?)
}

pub async fn get(session: &mut Session, id: i64) -> Result<Fornecedor, InventoryError> {
    repository::find_by_id::<Fornecedor>(session, id)
        .await?
        .ok_or(InventoryError::NotFound(Fornecedor::LABEL))
}

/// Number of suppliers whose `idInsumo` is `insumo_id`.
pub async fn count_referencing(session: &mut Session, insumo_id: i64) -> Result<i64, InventoryError> {
    let (count,): (i64,) = session
        .query_one(
            "SELECT COUNT(*) FROM Fornecedor WHERE idInsumo = ?",
            &[insumo_id.into()],
        )
        .await?
        .unwrap_or((0,));
    Ok(count)
}

async fn ensure_insumo_exists(session: &mut Session, insumo_id: i64) -> Result<(), InventoryError> {
    if insumos::exists(session, insumo_id).await? {
        Ok(())
    } else {
        tracing::warn!(insumo_id, "rejected write referencing missing insumo");
        Err(InventoryError::InvalidReference)
    }
}

pub async fn create(session: &mut Session, payload: JsonValue) -> Result<Fornecedor, InventoryError> {
    let new = parse_payload::<FornecedorPatch>(payload)?.into_new()?;
    ensure_insumo_exists(session, new.insumo_id).await?;

    let id = session
        .insert(
            "INSERT INTO Fornecedor (nomeFornecedor, insumoFornecedor, precoInsumo, contatoTelefone, contatoEmail, idInsumo)
             VALUES (?, ?, ?, ?, ?, ?)",
            &[
                new.name.as_str().into(),
                new.supplied_item_label.as_str().into(),
                new.price.into(),
                new.contact_phone.as_str().into(),
                new.contact_email.as_str().into(),
                new.insumo_id.into(),
            ],
        )
        .await?;
    let created = new.with_id(id);
    tracing::info!(id = created.id, insumo_id = created.insumo_id, "fornecedor created");
    Ok(created)
}

pub async fn update(
    session: &mut Session,
    id: i64,
    payload: JsonValue,
) -> Result<Fornecedor, InventoryError> {
    let patch = parse_payload::<FornecedorPatch>(payload)?;
    let existing = get(session, id).await?;

    if let Some(insumo_id) = patch.insumo_id {
        ensure_insumo_exists(session, insumo_id).await?;
    }
    let merged = Fornecedor::merge(&existing, &patch);

    session
        .execute(
            "UPDATE Fornecedor SET nomeFornecedor = ?, insumoFornecedor = ?, precoInsumo = ?,
                contatoTelefone = ?, contatoEmail = ?, idInsumo = ?
             WHERE idFornecedor = ?",
            &[
                merged.name.as_str().into(),
                merged.supplied_item_label.as_str().into(),
                merged.price.into(),
                merged.contact_phone.as_str().into(),
                merged.contact_email.as_str().into(),
                merged.insumo_id.into(),
                id.into(),
            ],
        )
        .await?;

    tracing::info!(id, "fornecedor updated");
    Ok(merged)
}

pub async fn delete(session: &mut Session, id: i64) -> Result<(), InventoryError> {
    if !repository::delete_by_id::<Fornecedor>(session, id).await? {
        return Err(InventoryError::NotFound(Fornecedor::LABEL));
    }
    tracing::info!(id, "fornecedor deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DeletePolicy;
    use crate::storage::Database;
    use serde_json::json;

    async fn session_with_insumo() -> (Database, Session, i64) {
        let db = Database::connect_in_memory().await.unwrap();
        let mut session = db.session().await.unwrap();
        let insumo = insumos::create(
            &mut session,
            json!({"nomeInsumo": "Papel A4", "QtdInsumo": 500, "descricaoInsumo": "Resma", "Status": "Ativo"}),
        )
        .await
        .unwrap();
        (db, session, insumo.id)
    }

    fn supplier(insumo_id: i64) -> JsonValue {
        json!({
            "nomeFornecedor": "Papelaria XYZ",
            "insumoFornecedor": "Papel A4",
            "precoInsumo": 23.9,
            "contatoTelefone": "11999999999",
            "contatoEmail": "contato@xyz.com",
            "idInsumo": insumo_id
        })
    }

    #[tokio::test]
    async fn create_with_missing_insumo_persists_nothing() {
        let (_db, mut session, _) = session_with_insumo().await;
        let err = create(&mut session, supplier(999)).await.unwrap_err();
        assert!(matches!(err, InventoryError::InvalidReference));
        assert!(list(&mut session).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_without_reference_skips_the_check() {
        let (_db, mut session, insumo_id) = session_with_insumo().await;
        let created = create(&mut session, supplier(insumo_id)).await.unwrap();

        insumos::delete(&mut session, insumo_id, DeletePolicy::Allow)
            .await
            .unwrap();

        // The stored idInsumo now dangles, but the patch does not mention it.
        let updated = update(&mut session, created.id, json!({"precoInsumo": 30.0}))
            .await
            .unwrap();
        assert_eq!(updated.price, 30.0);
        assert_eq!(updated.insumo_id, insumo_id);

        let err = update(&mut session, created.id, json!({"idInsumo": insumo_id}))
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::InvalidReference));
    }

    #[tokio::test]
    async fn restrict_policy_blocks_deleting_referenced_insumo() {
        let (_db, mut session, insumo_id) = session_with_insumo().await;
        create(&mut session, supplier(insumo_id)).await.unwrap();

        let err = insumos::delete(&mut session, insumo_id, DeletePolicy::Restrict)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            InventoryError::StillReferenced { count: 1, .. }
        ));
        assert!(insumos::exists(&mut session, insumo_id).await.unwrap());
    }
}
