/// Maps joined relationship rows into domain results
use crate::modules::relationships::domain::entities::{DataEntity, RelationshipResult};
use crate::modules::relationships::infrastructure::models::{DataEntityModel, RelationshipModel};

/// Raw row of an enriched query: relationship, owner, source, target
pub type RelationshipRow = (
    RelationshipModel,
    DataEntityModel,
    Option<DataEntityModel>,
    Option<DataEntityModel>,
);

/// Which role aliases a query shape carried.
///
/// `queries::traversal` and `queries::page_enrichment` both select all three
/// roles and are assembled with `ALL_ROLES`. The bulk lookup (`queries::owned_by`)
/// selects the relationship table alone and maps rows straight to `Relationship`
/// without going through `assemble`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinShape {
    pub owning: bool,
    pub source: bool,
    pub target: bool,
}

impl JoinShape {
    pub const ALL_ROLES: JoinShape = JoinShape {
        owning: true,
        source: true,
        target: true,
    };
}

/// A relationship row with whatever role columns its query produced
#[derive(Debug, Clone)]
pub(crate) struct JoinedRow {
    relationship: RelationshipModel,
    owning: Option<DataEntityModel>,
    source: Option<DataEntityModel>,
    target: Option<DataEntityModel>,
}

impl From<RelationshipRow> for JoinedRow {
    fn from((relationship, owning, source, target): RelationshipRow) -> Self {
        Self {
            relationship,
            owning: Some(owning),
            source,
            target,
        }
    }
}

/// Roles the shape did not carry are absent regardless of the row's content.
pub(crate) fn assemble(row: impl Into<JoinedRow>, shape: JoinShape) -> RelationshipResult {
    let row = row.into();
    let role = |present: bool, entity: Option<DataEntityModel>| -> Option<DataEntity> {
        if present {
            entity.map(Into::into)
        } else {
            None
        }
    };

    RelationshipResult {
        relationship: row.relationship.into(),
        owning_entity: role(shape.owning, row.owning),
        source_entity: role(shape.source, row.source),
        target_entity: role(shape.target, row.target),
    }
}
