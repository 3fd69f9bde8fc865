//! Release download pages
//!
//! Maps each release version to the packaging convention it was published
//! under, binds the matching artifact links and renders them through the
//! page templates.
//!
//! # Modules
//!
//! - [`types`]: Product, Era, Platform and ArtifactSet
//! - [`era`]: Era classification by milestone
//! - [`binder`]: Artifact path binding per era
//! - [`template`]: Template loading and placeholder substitution
//! - [`page`]: Ordering and page assembly
//! - [`error`]: Error types for release page generation

pub mod binder;
pub mod era;
pub mod error;
pub mod page;
pub mod template;
pub mod types;

pub use binder::bind;
pub use era::classify;
pub use page::{PageOptions, RenderedPage, render_download_page, render_page};
pub use template::Templates;
pub use types::{ArtifactSet, Era, Platform, Product};
