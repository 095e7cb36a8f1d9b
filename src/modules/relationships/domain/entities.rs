/// Domain entities for relationships between catalog data entities
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::RelationshipType;

/// Directed, typed edge between two addressable entities, declared by an owning entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: i64,
    /// Entity that declared this relationship
    pub data_entity_id: i64,
    pub source_dataset_oddrn: Option<String>,
    pub target_dataset_oddrn: Option<String>,
    pub relationship_type: RelationshipType,
}

/// Read-only projection of a catalog data entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEntity {
    pub id: i64,
    pub oddrn: String,
    pub internal_name: Option<String>,
    pub external_name: Option<String>,
    pub hollow: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A relationship enriched with whichever role entities resolved.
///
/// A missing role is an expected state (an address that is dangling or not yet
/// ingested), not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipResult {
    pub relationship: Relationship,
    pub owning_entity: Option<DataEntity>,
    pub source_entity: Option<DataEntity>,
    pub target_entity: Option<DataEntity>,
}

impl RelationshipResult {
    pub fn is_fully_resolved(&self) -> bool {
        self.source_entity.is_some() && self.target_entity.is_some()
    }
}
