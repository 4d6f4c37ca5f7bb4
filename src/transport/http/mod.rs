pub mod router;
pub mod types;
pub mod handlers {
    pub mod common;
    pub mod fornecedores;
    pub mod health;
    pub mod index;
    pub mod insumos;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
