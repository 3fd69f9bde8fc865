use std::cmp::Ordering;

pub use semver::Version;

/// First release whose tags carry the `v` prefix (modular layout, still one binary)
pub const MODULAR_MILESTONE: Version = Version::new(4, 0, 0);

/// First release shipping `split-sync` and `split-proxy` as separate executables
pub const MULTIEXEC_MILESTONE: Version = Version::new(5, 0, 0);

/// Parse a `MAJOR.MINOR.PATCH` string into a Version.
///
/// Each segment is read as a plain non-negative integer, so leading zeros are
/// accepted and dropped ("04.0.0" -> 4.0.0). Does NOT strip the 'v' prefix and
/// rejects pre-release or build suffixes.
pub fn parse_version(version: &str) -> Option<Version> {
    let mut parts = version.split('.');
    let major = parse_segment(parts.next()?)?;
    let minor = parse_segment(parts.next()?)?;
    let patch = parse_segment(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(Version::new(major, minor, patch))
}

fn parse_segment(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// Numeric comparison of two versions, major first.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then(a.minor.cmp(&b.minor))
        .then(a.patch.cmp(&b.patch))
}

/// Check whether `version` is at or beyond `milestone`
pub fn at_least(version: &Version, milestone: &Version) -> bool {
    compare(version, milestone) != Ordering::Less
}

/// Sort newest first
pub fn sort_descending(versions: &mut [Version]) {
    sort_descending_by(versions, |v| v);
}

/// Sort oldest first
pub fn sort_ascending(versions: &mut [Version]) {
    versions.sort_by(compare);
}

/// Sort items newest first by the version `key` returns. Stable, so items
/// with equal versions keep their relative order.
pub fn sort_descending_by<T>(items: &mut [T], key: impl Fn(&T) -> &Version) {
    items.sort_by(|a, b| compare(key(b), key(a)));
}
