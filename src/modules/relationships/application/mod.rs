pub mod service;

pub use service::RelationshipService;
