//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//! - `minimal` - In-memory repository only, no database driver

pub mod database;

pub use database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;
