pub mod error;
pub mod model;

pub use error::InventoryError;

use std::fmt;
use std::str::FromStr;

/// Behaviour of `DELETE /insumos/{id}` when Fornecedor rows still reference the Insumo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Delete anyway; referencing suppliers keep a dangling `idInsumo`.
    #[default]
    Allow,
    /// Refuse the delete while any supplier references the Insumo.
    Restrict,
}

impl FromStr for DeletePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "allow" => Ok(DeletePolicy::Allow),
            "restrict" => Ok(DeletePolicy::Restrict),
            other => Err(format!("unknown delete policy '{}' (expected allow|restrict)", other)),
        }
    }
}

impl fmt::Display for DeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeletePolicy::Allow => f.write_str("allow"),
            DeletePolicy::Restrict => f.write_str("restrict"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_policy_parses_case_insensitively() {
        assert_eq!("Restrict".parse::<DeletePolicy>(), Ok(DeletePolicy::Restrict));
        assert_eq!(" allow ".parse::<DeletePolicy>(), Ok(DeletePolicy::Allow));
        assert!("cascade".parse::<DeletePolicy>().is_err());
    }
}
