//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::{DatabaseConfig, InMemoryPostRepository};

/// Which storage backend is serving requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    Postgres,
    InMemory,
}

impl Storage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Storage::Postgres => "postgres",
            Storage::InMemory => "in-memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub storage: Storage,
}

impl AppState {
    pub fn with_repository(posts: Arc<dyn PostRepository>, storage: Storage) -> Self {
        Self { posts, storage }
    }

    /// State backed by the in-memory repository with default reference data.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryPostRepository::default()), Storage::InMemory)
    }

    /// Build the application state, falling back to in-memory storage when
    /// the database is not configured or unreachable.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => match blog_infra::database::connect(config).await {
                Ok(conn) => Self::with_repository(
                    Arc::new(blog_infra::PostgresPostRepository::new(conn)),
                    Storage::Postgres,
                ),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repository");
            Self::in_memory()
        };

        tracing::info!(storage = state.storage.as_str(), "Application state initialized");

        state
    }
}
