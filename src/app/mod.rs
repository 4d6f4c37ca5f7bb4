//! Resource handlers: validation, partial-update merge and referential checks,
//! independent of the HTTP transport.

pub mod fornecedores;
pub mod insumos;
