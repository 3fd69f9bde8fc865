//! Parser layer
//! - types.rs: Common types (ConfigOption)
//! - sections.rs: option declarations in sections.go files

pub mod sections;
pub mod types;

pub use sections::SectionsParser;
pub use types::ConfigOption;
