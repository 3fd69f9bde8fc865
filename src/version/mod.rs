//! Version layer for release tags
//!
//! Turns the raw tag listing of the repository into an ordered set of
//! release versions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  TagSource  │────▶│  Tag filter │────▶│   Semver    │
//! │ (git, file) │     │ (normalize) │     │ (compare)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`source`]: Tag sources (`git tag -l`, saved tag dumps)
//! - [`tag`]: Release tag filtering and normalization
//! - [`semver`]: Version parsing, comparison, milestones and ordering
//! - [`error`]: Error types for tag sources

pub mod error;
pub mod semver;
pub mod source;
pub mod tag;
