pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::model::{Fornecedor, Insumo};
pub use domain::{DeletePolicy, InventoryError};
pub use storage::Database;
