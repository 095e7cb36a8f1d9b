// Shared kernel: errors, pagination, database plumbing and logging used by every module

pub mod application;
pub mod errors;
pub mod infrastructure;
pub mod utils;

// Re-exports for convenience
pub use infrastructure::{Database, DatabaseConfig};
