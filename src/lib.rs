pub mod modules;
mod schema;
pub mod shared;

use modules::relationships::{RelationshipService, RelationshipsRepositoryImpl};
use shared::errors::AppResult;
use shared::utils::init_logger;
use shared::{Database, DatabaseConfig};
use std::sync::Arc;

/// Build the relationship service from the environment (`DATABASE_URL` and friends)
pub fn bootstrap() -> AppResult<RelationshipService> {
    init_logger();

    let config = DatabaseConfig::from_env()?;
    bootstrap_with_config(&config)
}

pub fn bootstrap_with_config(config: &DatabaseConfig) -> AppResult<RelationshipService> {
    let db = Arc::new(Database::new(config)?);
    let repository =
        RelationshipsRepositoryImpl::with_partition_size(Arc::clone(&db), config.partition_size);

    let status = db.pool_status();
    log_info!(
        "Relationship service ready (pool {}/{} connections, partition size {}, max page size {})",
        status.connections,
        status.max_size,
        config.partition_size,
        config.max_page_size
    );

    Ok(RelationshipService::with_max_page_size(
        Arc::new(repository),
        config.max_page_size,
    ))
}
