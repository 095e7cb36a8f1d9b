use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use std::sync::Arc;
use tokio::task;

use super::batching::{distinct_ids, execute_in_partitions};
use super::mapper::{assemble, JoinShape, RelationshipRow};
use super::queries;
use crate::modules::relationships::domain::{
    entities::{Relationship, RelationshipResult},
    repository::RelationshipsRepository,
    value_objects::RelationshipTypeFilter,
};
use crate::modules::relationships::infrastructure::models::RelationshipModel;
use crate::shared::application::{PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::config::DEFAULT_PARTITION_SIZE;
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::shared::Database;
use crate::{log_debug, log_error};

pub struct RelationshipsRepositoryImpl {
    db: Arc<Database>,
    partition_size: usize,
}

impl RelationshipsRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self::with_partition_size(db, DEFAULT_PARTITION_SIZE)
    }

    pub fn with_partition_size(db: Arc<Database>, partition_size: usize) -> Self {
        Self {
            db,
            partition_size: partition_size.max(1),
        }
    }

    /// Run `work` on a pooled connection inside a blocking task
    async fn with_connection<T, F>(db: Arc<Database>, work: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> AppResult<T> + Send + 'static,
    {
        task::spawn_blocking(move || -> AppResult<T> {
            let mut conn = db.get_connection()?;
            work(&mut conn)
        })
        .await?
    }

    fn load_traversal(
        conn: &mut PgConnection,
        data_entity_id: i64,
        filter: RelationshipTypeFilter,
    ) -> AppResult<Vec<RelationshipResult>> {
        let anchor: Option<String> = queries::anchor_oddrn(data_entity_id)
            .first(conn)
            .optional()?;

        let Some(anchor) = anchor else {
            log_debug!(
                "Data entity {} has no address, traversal is empty",
                data_entity_id
            );
            return Ok(Vec::new());
        };

        let rows: Vec<RelationshipRow> = queries::traversal(anchor, filter).load(conn)?;
        let results: Vec<RelationshipResult> = rows
            .into_iter()
            .map(|row| assemble(row, JoinShape::ALL_ROLES))
            .collect();

        log_debug!(
            "Data entity {} has {} relationships ({} with unresolved endpoints)",
            data_entity_id,
            results.len(),
            results.iter().filter(|r| !r.is_fully_resolved()).count()
        );

        Ok(results)
    }

    fn load_page(
        conn: &mut PgConnection,
        text_filter: &str,
        params: PaginationParams,
        filter: RelationshipTypeFilter,
    ) -> AppResult<Vec<RelationshipResult>> {
        let rows: Vec<RelationshipRow> =
            queries::page_enrichment(text_filter, params.offset(), params.limit(), filter)
                .load(conn)?;

        Ok(rows
            .into_iter()
            .map(|row| assemble(row, JoinShape::ALL_ROLES))
            .collect())
    }

    fn count_matching(conn: &mut PgConnection, text_filter: &str) -> AppResult<u64> {
        let count = queries::text_filtered(text_filter)
            .count()
            .get_result::<i64>(conn)?;

        Ok(count.max(0) as u64)
    }
}

#[async_trait]
impl RelationshipsRepository for RelationshipsRepositoryImpl {
    async fn fetch_by_owning_ids(&self, owning_ids: &[i64]) -> AppResult<Vec<Relationship>> {
        LogContext::db_operation("fetch_by_owning_ids", "relationships", None);
        let timer = TimedOperation::new("relationships.fetch_by_owning_ids");

        let owning_ids = distinct_ids(owning_ids);
        let db = Arc::clone(&self.db);
        let models = execute_in_partitions(&owning_ids, self.partition_size, move |partition| {
            Self::with_connection(Arc::clone(&db), move |conn| {
                Ok(queries::owned_by(partition).load::<RelationshipModel>(conn)?)
            })
        })
        .await
        .inspect_err(|e| log_error!("Failed to fetch relationships by owning ids: {}", e))?;

        timer.finish_with_info(&format!("{} relationships", models.len()));

        Ok(models.into_iter().map(Relationship::from).collect())
    }

    fn traverse(
        &self,
        data_entity_id: i64,
        filter: RelationshipTypeFilter,
    ) -> BoxStream<'static, AppResult<RelationshipResult>> {
        let db = Arc::clone(&self.db);

        stream::once(async move {
            log_debug!(
                "Traversing relationships of data entity {} (type: {})",
                data_entity_id,
                filter
            );
            Self::with_connection(db, move |conn| {
                Self::load_traversal(conn, data_entity_id, filter)
            })
            .await
        })
        .map_ok(|results| stream::iter(results.into_iter().map(Ok::<_, AppError>)))
        .try_flatten()
        .boxed()
    }

    async fn list(
        &self,
        params: PaginationParams,
        text_filter: &str,
        filter: RelationshipTypeFilter,
    ) -> AppResult<PaginatedResult<RelationshipResult>> {
        LogContext::db_operation("list", "relationships", None);
        LogContext::page_window(params.page, params.page_size, text_filter);
        let timer = TimedOperation::new("relationships.list");

        let page_text = text_filter.to_string();
        let count_text = text_filter.to_string();

        // Page and count are independent; each borrows its own connection.
        let (items, total_count) = tokio::try_join!(
            Self::with_connection(Arc::clone(&self.db), move |conn| {
                Self::load_page(conn, &page_text, params, filter)
            }),
            Self::with_connection(Arc::clone(&self.db), move |conn| {
                Self::count_matching(conn, &count_text)
            })
        )
        .inspect_err(|e| log_error!("Failed to list relationships: {}", e))?;

        timer.finish_with_info(&format!(
            "page {} with {} of {} relationships",
            params.page,
            items.len(),
            total_count
        ));

        Ok(PaginatedResult::new(items, total_count, &params))
    }
}
