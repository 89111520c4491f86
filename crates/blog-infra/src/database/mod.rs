//! Database connection management and the SeaORM-backed repository.

mod connections;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres_repo;

pub use connections::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use connections::{connect, ensure_schema};
#[cfg(feature = "postgres")]
pub use postgres_repo::PostgresPostRepository;
