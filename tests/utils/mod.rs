/// Shared integration test utilities
pub mod factories;
pub mod test_db;

use catalog_relations::modules::relationships::RelationshipsRepositoryImpl;
use catalog_relations::shared::infrastructure::DbPool;
use catalog_relations::shared::Database;
use std::sync::Arc;

pub use factories::{DataEntityFactory, RelationshipFactory};
pub use test_db::TestDb;

/// Repository over an isolated test pool
pub fn repository_with_pool(pool: DbPool, partition_size: usize) -> RelationshipsRepositoryImpl {
    let db = Arc::new(Database::from_pool(pool));
    RelationshipsRepositoryImpl::with_partition_size(db, partition_size)
}
