//! Persistence gateway over the SQLite store.
//!
//! Handlers never touch the pool directly. Each request opens a [`Session`]
//! (one pooled connection) and runs parameterized statements through it; the
//! connection goes back to the pool when the session is dropped, on success
//! and on every error path alike.

use crate::storage::schema;
use sqlx::pool::PoolConnection;
use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::{SqliteArguments, SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};
use std::str::FromStr;

/// A bound statement parameter. User input only ever reaches SQL through these.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Int(i64),
    Real(f64),
    Text(String),
}

impl From<i64> for SqlParam {
    fn from(v: i64) -> Self {
        SqlParam::Int(v)
    }
}

impl From<f64> for SqlParam {
    fn from(v: f64) -> Self {
        SqlParam::Real(v)
    }
}

impl From<String> for SqlParam {
    fn from(v: String) -> Self {
        SqlParam::Text(v)
    }
}

impl From<&str> for SqlParam {
    fn from(v: &str) -> Self {
        SqlParam::Text(v.to_string())
    }
}

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens (creating if missing) the store at `url` and ensures both tables exist.
    pub async fn connect(url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;
        schema::ensure_schema(&pool).await?;
        Ok(Self { pool })
    }

    /// Private in-memory store. The pool pins a single connection for its whole
    /// lifetime, since an in-memory SQLite database dies with its connection.
    pub async fn connect_in_memory() -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        schema::ensure_schema(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Acquires a connection scoped to one request.
    pub async fn session(&self) -> Result<Session, sqlx::Error> {
        let conn = self.pool.acquire().await?;
        Ok(Session { conn })
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// One pooled connection, held for the duration of a request.
pub struct Session {
    conn: PoolConnection<Sqlite>,
}

impl Session {
    /// Runs a read-only statement and decodes every row.
    pub async fn query<T>(&mut self, sql: &str, params: &[SqlParam]) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        bind_as(sqlx::query_as::<_, T>(sql), params)
            .fetch_all(&mut *self.conn)
            .await
    }

    /// Runs a read-only statement and decodes the first row, if any.
    pub async fn query_one<T>(
        &mut self,
        sql: &str,
        params: &[SqlParam],
    ) -> Result<Option<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        bind_as(sqlx::query_as::<_, T>(sql), params)
            .fetch_optional(&mut *self.conn)
            .await
    }

    /// Runs a mutating statement and returns the number of rows it touched.
    /// SQLite auto-commits it on its own.
    pub async fn execute(&mut self, sql: &str, params: &[SqlParam]) -> Result<u64, sqlx::Error> {
        let result = bind(sqlx::query(sql), params)
            .execute(&mut *self.conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Runs a single-row `INSERT` and returns the identity SQLite generated for it.
    pub async fn insert(&mut self, sql: &str, params: &[SqlParam]) -> Result<i64, sqlx::Error> {
        let result = bind(sqlx::query(sql), params)
            .execute(&mut *self.conn)
            .await?;
        Ok(result.last_insert_rowid())
    }
}

fn bind<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    params: &'q [SqlParam],
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for param in params {
        query = match param {
            SqlParam::Int(v) => query.bind(*v),
            SqlParam::Real(v) => query.bind(*v),
            SqlParam::Text(v) => query.bind(v.as_str()),
        };
    }
    query
}

fn bind_as<'q, T>(
    mut query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
    params: &'q [SqlParam],
) -> QueryAs<'q, Sqlite, T, SqliteArguments<'q>> {
    for param in params {
        query = match param {
            SqlParam::Int(v) => query.bind(*v),
            SqlParam::Real(v) => query.bind(*v),
            SqlParam::Text(v) => query.bind(v.as_str()),
        };
    }
    query
}
