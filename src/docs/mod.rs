//! Configuration option documentation
//!
//! Renders the options parsed from sections files either as the Markdown
//! table published in the README, or as the quoted flag list used when
//! building container entrypoints.

pub mod flags;
pub mod table;

use std::path::Path;

use tracing::debug;

use crate::parser::sections::SectionsParser;
use crate::parser::types::ConfigOption;

pub use flags::render_flag_list;
pub use table::{cli_to_env, render_options_table};

/// Parse options from several sections files, keeping file order
pub fn collect_options<P: AsRef<Path>>(files: &[P]) -> std::io::Result<Vec<ConfigOption>> {
    let parser = SectionsParser::new();
    let mut options = Vec::new();
    for file in files {
        let content = std::fs::read_to_string(file.as_ref())?;
        let parsed = parser.parse(&content);
        debug!("Found {} options in {:?}", parsed.len(), file.as_ref());
        options.extend(parsed);
    }
    Ok(options)
}

/// Collect command line flags from several sections files, keeping file order
pub fn collect_flags<P: AsRef<Path>>(files: &[P]) -> std::io::Result<Vec<String>> {
    let parser = SectionsParser::new();
    let mut flags = Vec::new();
    for file in files {
        let content = std::fs::read_to_string(file.as_ref())?;
        flags.extend(parser.parse_flags(&content));
    }
    Ok(flags)
}
