//! Download pages and option docs for split-sync and split-proxy releases
//!
//! - [`version`]: release tag listing, filtering and ordering
//! - [`release`]: era classification, artifact binding and page rendering
//! - [`parser`]: option declarations in sections files
//! - [`docs`]: option table and flag list rendering

pub mod config;
pub mod docs;
pub mod logging;
pub mod parser;
pub mod release;
pub mod version;
