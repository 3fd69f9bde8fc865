use std::path::PathBuf;

use thiserror::Error;

use crate::release::types::Product;
use crate::version::error::SourceError;
use crate::version::semver::Version;

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("{product} has no standalone release for version {version}")]
    UnsupportedCombination { product: Product, version: Version },

    #[error("Unknown era: {0}")]
    UnknownEra(String),

    #[error("Unknown app {0}: must be \"sync\" or \"proxy\"")]
    UnknownProduct(String),
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to read template {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse template {template:?}: {source}")]
    Parse {
        template: String,
        #[source]
        source: tera::Error,
    },

    #[error("Failed to render template {template:?}: {source}")]
    Render {
        template: String,
        #[source]
        source: tera::Error,
    },
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Release(#[from] ReleaseError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Source(#[from] SourceError),
}
