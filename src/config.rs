use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::version::semver::{Version, parse_version};

// =============================================================================
// Template files
// =============================================================================

/// Directory holding the download page templates, relative to the repository root
pub const DEFAULT_TEMPLATE_DIR: &str = "release";

/// Stylesheet inlined into the page header
pub const TEMPLATE_STYLE_FILE: &str = "versions.css.tpl";

/// Page header
pub const TEMPLATE_HEADER_FILE: &str = "versions.pre.html.tpl";

/// Page footer
pub const TEMPLATE_FOOTER_FILE: &str = "versions.pos.html.tpl";

/// One download row per release
pub const TEMPLATE_ROW_FILE: &str = "versions.download-row.html.tpl";

/// Download row for releases with FIPS builds (optional)
pub const TEMPLATE_FIPS_ROW_FILE: &str = "versions.download-row-fips.html.tpl";

/// Default tracing filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "split_docgen=info";

/// Generator configuration, read from an optional JSON file
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DocgenConfig {
    /// Directory holding the page templates
    pub template_dir: Option<PathBuf>,
    /// First release that shipped FIPS builds (e.g., "5.4.0")
    pub fips_since: Option<String>,
}

/// Errors raised while loading the configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid version {0:?}: expected MAJOR.MINOR.PATCH")]
    InvalidVersion(String),
}

impl DocgenConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Template directory, falling back to [`DEFAULT_TEMPLATE_DIR`]
    pub fn template_dir(&self) -> PathBuf {
        self.template_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_DIR))
    }

    /// Parsed FIPS milestone, if configured
    pub fn fips_since(&self) -> Result<Option<Version>, ConfigError> {
        self.fips_since
            .as_deref()
            .map(parse_fips_since)
            .transpose()
    }
}

/// Parse a FIPS milestone, accepting an optional `v` prefix
pub fn parse_fips_since(value: &str) -> Result<Version, ConfigError> {
    parse_version(value.strip_prefix('v').unwrap_or(value))
        .ok_or_else(|| ConfigError::InvalidVersion(value.to_string()))
}
