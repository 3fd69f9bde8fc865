//! Common types for parsers

/// A configuration option declared in a sections source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigOption {
    /// Command line flag name, without dashes (e.g., "log-level")
    pub cli: String,
    /// JSON key in the config file (e.g., "level")
    pub json: String,
    /// Human readable description
    pub description: String,
}
