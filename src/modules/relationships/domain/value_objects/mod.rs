pub mod relationship_type;

pub use relationship_type::{RelationshipType, RelationshipTypeFilter};
