//! Resource handler for supply items.

use crate::app::fornecedores;
use crate::domain::model::{parse_payload, Insumo, InsumoPatch, Model};
use crate::domain::{DeletePolicy, InventoryError};
use crate::storage::{repository, Session};
use serde_json::Value as JsonValue;

pub async fn list(session: &mut Session) -> Result<Vec<Insumo>, InventoryError> {
    Ok(repository::list_all::<Insumo>(session).await?)
}

pub async fn get(session: &mut Session, id: i64) -> Result<Insumo, InventoryError> {
    repository::find_by_id::<Insumo>(session, id)
        .await?
        .ok_or(InventoryError::NotFound(Insumo::LABEL))
}

pub async fn exists(session: &mut Session, id: i64) -> Result<bool, InventoryError> {
    Ok(repository::exists::<Insumo>(session, id).await?)
}

pub async fn create(session: &mut Session, payload: JsonValue) -> Result<Insumo, InventoryError> {
    let new = parse_payload::<InsumoPatch>(payload)?.into_new()?;

    let id = session
        .insert(
            "INSERT INTO Insumo (nomeInsumo, QtdInsumo, descricaoInsumo, Status) VALUES (?, ?, ?, ?)",
            &[
                new.name.as_str().into(),
                new.quantity.into(),
                new.description.as_str().into(),
                new.status.as_str().into(),
            ],
        )
        .await?;
    let created = new.with_id(id);
    tracing::info!(id = created.id, name = %created.name, "insumo created");
    Ok(created)
}

pub async fn update(
    session: &mut Session,
    id: i64,
    payload: JsonValue,
) -> Result<Insumo, InventoryError> {
    let patch = parse_payload::<InsumoPatch>(payload)?;
    let existing = get(session, id).await?;
    let merged = Insumo::merge(&existing, &patch);

    session
        .execute(
            "UPDATE Insumo SET nomeInsumo = ?, QtdInsumo = ?, descricaoInsumo = ?, Status = ? WHERE idInsumo = ?",
            &[
                merged.name.as_str().into(),
                merged.quantity.into(),
                merged.description.as_str().into(),
                merged.status.as_str().into(),
                id.into(),
            ],
        )
        .await?;

    tracing::info!(id, "insumo updated");
    Ok(merged)
}

/// Deletes the row. Under [`DeletePolicy::Allow`] referencing suppliers are left untouched.
pub async fn delete(
    session: &mut Session,
    id: i64,
    policy: DeletePolicy,
) -> Result<(), InventoryError> {
    if !exists(session, id).await? {
        return Err(InventoryError::NotFound(Insumo::LABEL));
    }

    let referencing = fornecedores::count_referencing(session, id).await?;
    if referencing > 0 {
        match policy {
            DeletePolicy::Restrict => {
                tracing::warn!(id, referencing, "refusing to delete referenced insumo");
                return Err(InventoryError::StillReferenced {
                    insumo_id: id,
                    count: referencing,
                });
            }
            DeletePolicy::Allow => {
                tracing::warn!(id, referencing, "deleting insumo that suppliers still reference");
            }
        }
    }

    if !repository::delete_by_id::<Insumo>(session, id).await? {
        return Err(InventoryError::NotFound(Insumo::LABEL));
    }
    tracing::info!(id, "insumo deleted");
    Ok(())
}
