//! Post storage: connection pool setup and repository implementations.

mod connections;
mod memory;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
pub mod post_query;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

pub use connections::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use connections::connect;
#[cfg(feature = "postgres")]
pub use postgres_repo::PostgresPostRepository;

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
