use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Kind of a stored relationship. Values match the PostgreSQL `relationship_type` enum.
#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::RelationshipType"]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipType {
    #[db_rename = "ERD"]
    Erd,
    #[db_rename = "GRAPH"]
    Graph,
    #[db_rename = "DATA_FLOW"]
    DataFlow,
    #[db_rename = "LINEAGE"]
    Lineage,
}

impl RelationshipType {
    pub const VALUES: [RelationshipType; 4] = [
        RelationshipType::Erd,
        RelationshipType::Graph,
        RelationshipType::DataFlow,
        RelationshipType::Lineage,
    ];

    /// Get the database representation (matches the enum values in PostgreSQL)
    pub fn db_value(&self) -> &'static str {
        match self {
            RelationshipType::Erd => "ERD",
            RelationshipType::Graph => "GRAPH",
            RelationshipType::DataFlow => "DATA_FLOW",
            RelationshipType::Lineage => "LINEAGE",
        }
    }
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.db_value())
    }
}

impl FromStr for RelationshipType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        Self::VALUES
            .into_iter()
            .find(|t| t.db_value() == normalized)
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown relationship type: {}", s)))
    }
}

/// Type restriction applied to relationship queries. `All` is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RelationshipTypeFilter {
    #[default]
    All,
    Only(RelationshipType),
}

impl RelationshipTypeFilter {
    /// The concrete type to filter on, if any
    pub fn concrete(self) -> Option<RelationshipType> {
        match self {
            RelationshipTypeFilter::All => None,
            RelationshipTypeFilter::Only(relationship_type) => Some(relationship_type),
        }
    }
}

impl From<RelationshipType> for RelationshipTypeFilter {
    fn from(relationship_type: RelationshipType) -> Self {
        RelationshipTypeFilter::Only(relationship_type)
    }
}

impl FromStr for RelationshipTypeFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("ALL") {
            return Ok(RelationshipTypeFilter::All);
        }
        s.parse().map(RelationshipTypeFilter::Only)
    }
}

impl std::fmt::Display for RelationshipTypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RelationshipTypeFilter::All => f.write_str("ALL"),
            RelationshipTypeFilter::Only(relationship_type) => write!(f, "{}", relationship_type),
        }
    }
}
