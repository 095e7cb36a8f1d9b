/// Relationship persistence
///
/// 1. **batching** - partitioned execution for unbounded id lists
/// 2. **queries** - the role join skeleton, type filter stage and page window
/// 3. **mapper** - assembles joined rows into `RelationshipResult`
/// 4. **RelationshipsRepositoryImpl** - the repository port over the pooled connection
pub mod batching;
pub mod mapper;
pub mod queries;
pub mod relationships_repository_impl;

// Re-export the implementation for convenience
pub use relationships_repository_impl::RelationshipsRepositoryImpl;
