pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{DataEntity, Relationship, RelationshipResult};
pub use repository::RelationshipsRepository;
pub use value_objects::{RelationshipType, RelationshipTypeFilter};
