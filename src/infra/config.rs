//! Centralized configuration (environment variables + defaults).

use crate::domain::DeletePolicy;
use anyhow::Context;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Location of the relational store. The file is created if missing.
pub fn database_url() -> String {
    non_empty_var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

/// Address the HTTP server listens on.
pub fn bind_addr() -> String {
    non_empty_var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
}

/// Connection pool size.
pub fn max_connections() -> anyhow::Result<u32> {
    match non_empty_var("DB_MAX_CONNECTIONS") {
        Some(v) => parse_max_connections(&v),
        None => Ok(DEFAULT_MAX_CONNECTIONS),
    }
}

/// What happens when an Insumo that suppliers still point at is deleted.
pub fn insumo_delete_policy() -> anyhow::Result<DeletePolicy> {
    match non_empty_var("INSUMO_DELETE_POLICY") {
        Some(v) => v
            .parse::<DeletePolicy>()
            .map_err(|e| anyhow::anyhow!("INSUMO_DELETE_POLICY: {}", e)),
        None => Ok(DeletePolicy::default()),
    }
}

fn parse_max_connections(raw: &str) -> anyhow::Result<u32> {
    raw.parse::<u32>()
        .with_context(|| format!("DB_MAX_CONNECTIONS must be a valid u32, got '{}'", raw))
        .map(|n| n.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_connections_is_clamped_to_one() {
        assert_eq!(parse_max_connections("0").unwrap(), 1);
        assert_eq!(parse_max_connections("8").unwrap(), 8);
    }

    #[test]
    fn max_connections_rejects_garbage() {
        let err = parse_max_connections("lots").unwrap_err();
        assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));
    }
}
