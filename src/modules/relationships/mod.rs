pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use application::RelationshipService;
pub use domain::{
    DataEntity, Relationship, RelationshipResult, RelationshipType, RelationshipTypeFilter,
    RelationshipsRepository,
};
pub use infrastructure::RelationshipsRepositoryImpl;
