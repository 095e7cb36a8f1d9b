pub mod relationships;
