/// Query shapes for relationship reads
///
/// Every enriched query uses the same skeleton: the relationship table joined
/// to three aliases of `data_entity`, one per role. The owner is an inner join
/// (it always exists); source and target are left joins so an unresolved
/// address keeps its relationship row. The type filter is the only optional
/// stage and is appended to the boxed query when it names a concrete type.
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::query_builder::QueryFragment;
use diesel::query_dsl::LoadQuery;
use diesel::sql_types::{BigInt, Varchar};

use super::mapper::RelationshipRow;
use crate::modules::relationships::domain::value_objects::RelationshipTypeFilter;
use crate::schema::{data_entity, relationships};

macro_rules! with_entity_roles {
    ($from:expr) => {{
        let (owner, source, target) = diesel::alias!(
            data_entity as relationships_data_entity,
            data_entity as source_data_entity,
            data_entity as target_data_entity
        );

        $from
            .inner_join(owner.on(relationships::data_entity_id.eq(owner.field(data_entity::id))))
            .left_join(
                source.on(relationships::source_dataset_oddrn
                    .assume_not_null()
                    .eq(source.field(data_entity::oddrn))),
            )
            .left_join(
                target.on(relationships::target_dataset_oddrn
                    .assume_not_null()
                    .eq(target.field(data_entity::oddrn))),
            )
            .select((
                relationships::all_columns,
                owner.fields(data_entity::all_columns),
                source.fields(data_entity::all_columns).nullable(),
                target.fields(data_entity::all_columns).nullable(),
            ))
    }};
}

/// `ILIKE` pattern for a free-text filter; `None` when the filter is blank
pub fn like_pattern(text_filter: &str) -> Option<String> {
    let text = text_filter.trim();
    if text.is_empty() {
        return None;
    }

    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for ch in text.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    Some(pattern)
}

/// Base relationship table restricted by the free-text predicate, no joins
pub fn text_filtered(text_filter: &str) -> relationships::BoxedQuery<'static, Pg> {
    let mut query = relationships::table.into_boxed();

    if let Some(pattern) = like_pattern(text_filter) {
        query = query.filter(
            relationships::source_dataset_oddrn
                .ilike(pattern.clone())
                .or(relationships::target_dataset_oddrn.ilike(pattern)),
        );
    }

    query
}

pub fn owned_by(owning_ids: Vec<i64>) -> relationships::BoxedQuery<'static, Pg> {
    relationships::table
        .filter(relationships::data_entity_id.eq_any(owning_ids))
        .into_boxed()
}

pub fn anchor_oddrn(data_entity_id: i64) -> data_entity::BoxedQuery<'static, Pg, Varchar> {
    data_entity::table
        .filter(data_entity::id.eq(data_entity_id))
        .select(data_entity::oddrn)
        .into_boxed()
}

/// Relationships touching `anchor_oddrn` as source or target, with all three roles
pub fn traversal(
    anchor_oddrn: String,
    filter: RelationshipTypeFilter,
) -> impl LoadQuery<'static, PgConnection, RelationshipRow>
       + RunQueryDsl<PgConnection>
       + QueryFragment<Pg> {
    let mut query = with_entity_roles!(relationships::table)
        .filter(
            relationships::source_dataset_oddrn
                .eq(anchor_oddrn.clone())
                .or(relationships::target_dataset_oddrn.eq(anchor_oddrn)),
        )
        .order(relationships::id.asc())
        .into_boxed::<Pg>();

    if let Some(relationship_type) = filter.concrete() {
        query = query.filter(relationships::relationship_type.eq(relationship_type));
    }

    query
}

/// Ids of exactly one page of the text-filtered table, no joins
pub fn page_window(
    text_filter: &str,
    offset: i64,
    limit: i64,
) -> relationships::BoxedQuery<'static, Pg, BigInt> {
    text_filtered(text_filter)
        .select(relationships::id)
        .order(relationships::id.asc())
        .offset(offset)
        .limit(limit)
}

/// One listing page with its roles, in a single statement.
///
/// The window is a subselect the join runs against, so the join only ever
/// sees the page's rows. `DISTINCT` over every selected column (all
/// relationship columns plus all three aliases) collapses any join fan-out
/// back to one row per page row. The type filter applies after the window.
pub fn page_enrichment(
    text_filter: &str,
    offset: i64,
    limit: i64,
    filter: RelationshipTypeFilter,
) -> impl LoadQuery<'static, PgConnection, RelationshipRow>
       + RunQueryDsl<PgConnection>
       + QueryFragment<Pg> {
    let mut query = with_entity_roles!(relationships::table)
        .filter(relationships::id.eq_any(page_window(text_filter, offset, limit)))
        .distinct()
        .order(relationships::id.asc())
        .into_boxed::<Pg>();

    if let Some(relationship_type) = filter.concrete() {
        query = query.filter(relationships::relationship_type.eq(relationship_type));
    }

    query
}
