//! Application configuration.
//!
//! The only environment input is `DATABASE_URL`; everything else is fixed.

use std::env;
use std::path::PathBuf;

use blog_infra::DatabaseConfig;

/// Port the server always listens on.
pub const PORT: u16 = 8080;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory served as static assets at `/`.
    pub public_dir: PathBuf,
    #[cfg_attr(not(feature = "postgres"), allow(dead_code))]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::with_database_url(env::var("DATABASE_URL").ok())
    }

    fn with_database_url(url: Option<String>) -> Self {
        let database = url.map(DatabaseConfig::new).unwrap_or_default();

        Self {
            host: "0.0.0.0".to_string(),
            port: PORT,
            public_dir: PathBuf::from("public"),
            database,
        }
    }
}
