//! Entity-agnostic reads and deletes, driven by [`Model`] metadata.

use crate::domain::model::Model;
use crate::storage::gateway::Session;

fn select_clause<M: Model>() -> String {
    format!("SELECT {} FROM {}", M::COLUMNS.join(", "), M::TABLE)
}

pub async fn list_all<M: Model>(session: &mut Session) -> Result<Vec<M>, sqlx::Error> {
    let sql = format!("{} ORDER BY {}", select_clause::<M>(), M::ID_COLUMN);
    session.query(&sql, &[]).await
}

pub async fn find_by_id<M: Model>(session: &mut Session, id: i64) -> Result<Option<M>, sqlx::Error> {
    let sql = format!("{} WHERE {} = ?", select_clause::<M>(), M::ID_COLUMN);
    session.query_one(&sql, &[id.into()]).await
}

pub async fn exists<M: Model>(session: &mut Session, id: i64) -> Result<bool, sqlx::Error> {
    let sql = format!("SELECT 1 FROM {} WHERE {} = ?", M::TABLE, M::ID_COLUMN);
    let row: Option<(i64,)> = session.query_one(&sql, &[id.into()]).await?;
    Ok(row.is_some())
}

/// Returns whether a row was removed.
pub async fn delete_by_id<M: Model>(session: &mut Session, id: i64) -> Result<bool, sqlx::Error> {
    let sql = format!("DELETE FROM {} WHERE {} = ?", M::TABLE, M::ID_COLUMN);
    let removed = session.execute(&sql, &[id.into()]).await?;
    Ok(removed > 0)
}
