//! Table definitions and the sample-data seed used by `init_db`.

use crate::storage::gateway::{Database, SqlParam};
use sqlx::SqlitePool;

const CREATE_INSUMO: &str = "CREATE TABLE IF NOT EXISTS Insumo (
    idInsumo INTEGER PRIMARY KEY AUTOINCREMENT,
    nomeInsumo TEXT NOT NULL,
    QtdInsumo INTEGER NOT NULL,
    descricaoInsumo TEXT NOT NULL,
    Status TEXT NOT NULL
)";

// idInsumo is checked by the handlers before every write, not by a constraint.
const CREATE_FORNECEDOR: &str = "CREATE TABLE IF NOT EXISTS Fornecedor (
    idFornecedor INTEGER PRIMARY KEY AUTOINCREMENT,
    nomeFornecedor TEXT NOT NULL,
    insumoFornecedor TEXT NOT NULL,
    precoInsumo REAL NOT NULL,
    contatoTelefone TEXT NOT NULL,
    contatoEmail TEXT NOT NULL,
    idInsumo INTEGER NOT NULL
)";

pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_INSUMO).execute(pool).await?;
    sqlx::query(CREATE_FORNECEDOR).execute(pool).await?;
    Ok(())
}

/// What a call to [`seed_sample_data`] actually wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub insumo_id: i64,
    pub inserted_insumo: bool,
    pub inserted_fornecedor: bool,
}

/// Inserts the sample item and its supplier unless they are already present.
pub async fn seed_sample_data(db: &Database) -> Result<SeedReport, sqlx::Error> {
    let mut session = db.session().await?;

    let insumo_rows = session
        .execute(
            "INSERT INTO Insumo (nomeInsumo, QtdInsumo, descricaoInsumo, Status)
             SELECT ?, ?, ?, ?
             WHERE NOT EXISTS (SELECT 1 FROM Insumo WHERE nomeInsumo = ?)",
            &[
                "Papel A4".into(),
                500i64.into(),
                "Resma de papel tamanho A4".into(),
                "Ativo".into(),
                "Papel A4".into(),
            ],
        )
        .await?;

    let (insumo_id,): (i64,) = session
        .query_one(
            "SELECT idInsumo FROM Insumo WHERE nomeInsumo = ? ORDER BY idInsumo LIMIT 1",
            &["Papel A4".into()],
        )
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;

    let fornecedor_rows = session
        .execute(
            "INSERT INTO Fornecedor (
                nomeFornecedor, insumoFornecedor, precoInsumo,
                contatoTelefone, contatoEmail, idInsumo
             )
             SELECT ?, ?, ?, ?, ?, ?
             WHERE NOT EXISTS (
                SELECT 1 FROM Fornecedor WHERE nomeFornecedor = ? AND idInsumo = ?
             )",
            &[
                "Papelaria XYZ".into(),
                "Papel A4".into(),
                SqlParam::Real(23.90),
                "11999999999".into(),
                "contato@xyz.com".into(),
                insumo_id.into(),
                "Papelaria XYZ".into(),
                insumo_id.into(),
            ],
        )
        .await?;

    Ok(SeedReport {
        insumo_id,
        inserted_insumo: insumo_rows > 0,
        inserted_fornecedor: fornecedor_rows > 0,
    })
}
