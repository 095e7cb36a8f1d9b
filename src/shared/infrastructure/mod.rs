/// Shared infrastructure concerns
///
/// Configuration and the pooled PostgreSQL connection used by every repository.
pub mod config;
pub mod database;

// Re-exports for convenience
pub use config::DatabaseConfig;
pub use database::{Database, DbPool};
