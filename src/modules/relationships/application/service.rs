use crate::modules::relationships::domain::{
    entities::{Relationship, RelationshipResult},
    repository::RelationshipsRepository,
    value_objects::RelationshipTypeFilter,
};
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::config::DEFAULT_MAX_PAGE_SIZE;
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};
use futures::stream::BoxStream;
use futures::TryStreamExt;
use std::sync::Arc;

/// Entry point for handlers reading relationships
pub struct RelationshipService {
    repository: Arc<dyn RelationshipsRepository>,
    max_page_size: u32,
}

impl RelationshipService {
    pub fn new(repository: Arc<dyn RelationshipsRepository>) -> Self {
        Self::with_max_page_size(repository, DEFAULT_MAX_PAGE_SIZE)
    }

    pub fn with_max_page_size(
        repository: Arc<dyn RelationshipsRepository>,
        max_page_size: u32,
    ) -> Self {
        Self {
            repository,
            max_page_size,
        }
    }

    pub async fn get_relationships_by_owning_ids(
        &self,
        owning_ids: &[i64],
    ) -> AppResult<Vec<Relationship>> {
        if owning_ids.is_empty() {
            return Ok(Vec::new());
        }

        let relationships = self.repository.fetch_by_owning_ids(owning_ids).await?;
        log_debug!(
            "Loaded {} relationships for {} owning entities",
            relationships.len(),
            owning_ids.len()
        );

        Ok(relationships)
    }

    /// Lazy stream of the relationships touching an entity
    pub fn stream_relations_of_entity(
        &self,
        data_entity_id: i64,
        filter: RelationshipTypeFilter,
    ) -> BoxStream<'static, AppResult<RelationshipResult>> {
        self.repository.traverse(data_entity_id, filter)
    }

    pub async fn get_relations_of_entity(
        &self,
        data_entity_id: i64,
        filter: RelationshipTypeFilter,
    ) -> AppResult<Vec<RelationshipResult>> {
        self.repository
            .traverse(data_entity_id, filter)
            .try_collect()
            .await
    }

    /// `page` is 1-based. Invalid pages or sizes fail before any query runs.
    pub async fn get_relationships_page(
        &self,
        page: i64,
        size: i64,
        query: &str,
        filter: RelationshipTypeFilter,
    ) -> AppResult<PaginatedResult<RelationshipResult>> {
        Validator::validate_page_request(page, size, self.max_page_size)?;
        let params = PaginationParams::new(page as u32, size as u32);

        let result = self.repository.list(params, query, filter).await?;
        log_info!(
            "Listed relationships page {}/{} ({} items, {} total, type {})",
            result.page,
            result.total_pages,
            result.items.len(),
            result.total_count,
            filter
        );

        Ok(result)
    }
}
