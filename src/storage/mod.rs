pub mod gateway;
pub mod repository;
pub mod schema;

pub use gateway::{Database, Session, SqlParam};
