/// Diesel models for the relationships and data_entity tables
use crate::modules::relationships::domain::entities::{DataEntity, Relationship};
use crate::modules::relationships::domain::value_objects::RelationshipType;
use crate::schema::{data_entity, relationships};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Diesel model for querying relationships
#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = relationships)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RelationshipModel {
    pub id: i64,
    pub data_entity_id: i64,
    pub source_dataset_oddrn: Option<String>,
    pub target_dataset_oddrn: Option<String>,
    pub relationship_type: RelationshipType,
}

/// Diesel model for querying data entities (any of the three role aliases)
#[derive(Queryable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = data_entity)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DataEntityModel {
    pub id: i64,
    pub oddrn: String,
    pub internal_name: Option<String>,
    pub external_name: Option<String>,
    pub hollow: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<RelationshipModel> for Relationship {
    fn from(model: RelationshipModel) -> Self {
        Relationship {
            id: model.id,
            data_entity_id: model.data_entity_id,
            source_dataset_oddrn: model.source_dataset_oddrn,
            target_dataset_oddrn: model.target_dataset_oddrn,
            relationship_type: model.relationship_type,
        }
    }
}

impl From<DataEntityModel> for DataEntity {
    fn from(model: DataEntityModel) -> Self {
        DataEntity {
            id: model.id,
            oddrn: model.oddrn,
            internal_name: model.internal_name,
            external_name: model.external_name,
            hollow: model.hollow,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
