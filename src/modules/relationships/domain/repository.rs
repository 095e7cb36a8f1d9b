/// Repository port for relationship reads
///
/// The implementation lives in `infrastructure::persistence`; handlers and
/// services depend on this trait only.
use crate::modules::relationships::domain::entities::{Relationship, RelationshipResult};
use crate::modules::relationships::domain::value_objects::RelationshipTypeFilter;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use futures::stream::BoxStream;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RelationshipsRepository: Send + Sync {
    /// All relationships declared by any of the given owning entities, in no particular order
    async fn fetch_by_owning_ids(&self, owning_ids: &[i64]) -> AppResult<Vec<Relationship>>;

    /// Relationships whose source or target is the given entity. Lazy: nothing
    /// runs until the stream is polled.
    fn traverse(
        &self,
        data_entity_id: i64,
        filter: RelationshipTypeFilter,
    ) -> BoxStream<'static, AppResult<RelationshipResult>>;

    /// One page ordered by relationship id. `total_count` counts the text
    /// predicate alone, independent of the type filter.
    async fn list(
        &self,
        params: PaginationParams,
        text_filter: &str,
        filter: RelationshipTypeFilter,
    ) -> AppResult<PaginatedResult<RelationshipResult>>;
}
