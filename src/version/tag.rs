//! Release tag filtering
//!
//! Tags come straight from `git tag -l`, so the list mixes releases with
//! release candidates, betas and whatever else was ever pushed. Only plain
//! `[v]MAJOR.MINOR.PATCH` tags describe a published download.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::version::semver::{Version, parse_version};

static VALID_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{1,2}$").unwrap());

/// Normalize a single tag, returning None if it is not a release tag
pub fn normalize_tag(tag: &str) -> Option<Version> {
    let tag = tag.trim_end_matches('\r');
    if !VALID_TAG.is_match(tag) {
        return None;
    }
    parse_version(tag.strip_prefix('v').unwrap_or(tag))
}

/// Normalize a raw newline-separated tag dump into a set of versions.
///
/// Non-release tags are dropped silently; duplicates ("v4.0.0" and "4.0.0")
/// collapse into a single entry.
pub fn normalize_tags(raw: &str) -> BTreeSet<Version> {
    normalize(raw.split('\n'))
}

/// Normalize an already split sequence of tags
pub fn normalize<'a, I>(tags: I) -> BTreeSet<Version>
where
    I: IntoIterator<Item = &'a str>,
{
    tags.into_iter()
        .filter_map(|tag| {
            let version = normalize_tag(tag);
            if version.is_none() && !tag.trim().is_empty() {
                debug!("Skipping non-release tag {:?}", tag);
            }
            version
        })
        .collect()
}
