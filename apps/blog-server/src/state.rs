//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;

use crate::config::AppConfig;

/// Shared application state.
///
/// Built once at startup and handed to the route table; handlers only see
/// the repository through this.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Connect to the store and build the state.
    ///
    /// A failed connection is fatal: the server must not start without its store.
    #[cfg(feature = "postgres")]
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        use anyhow::Context;
        use blog_infra::database;

        let conn = database::connect(&config.database)
            .await
            .context("failed to connect to the post store")?;
        database::ensure_schema(&conn)
            .await
            .context("failed to prepare the post store schema")?;

        tracing::info!("Application state initialized");
        Ok(Self::new(Arc::new(blog_infra::PostgresPostRepository::new(
            conn,
        ))))
    }

    #[cfg(not(feature = "postgres"))]
    pub async fn init(_config: &AppConfig) -> anyhow::Result<Self> {
        tracing::warn!("Running without postgres feature - posts are kept in memory");
        Ok(Self::new(Arc::new(blog_infra::InMemoryPostRepository::new())))
    }
}
