//! Era classification
//!
//! The artifact naming changed at two milestones:
//! - 4.0.0: tags gained the `v` prefix (binary still named the same)
//! - 5.0.0: split-sync and split-proxy became separate executables

use crate::release::error::ReleaseError;
use crate::release::types::{Era, Product};
use crate::version::semver::{MODULAR_MILESTONE, MULTIEXEC_MILESTONE, Version, at_least};

/// Determine which packaging convention applies to `version` of `product`.
///
/// Proxy releases only exist from [`MULTIEXEC_MILESTONE`] on; asking for an
/// earlier one is a caller error.
pub fn classify(version: &Version, product: Product) -> Result<Era, ReleaseError> {
    let era = if !at_least(version, &MODULAR_MILESTONE) {
        Era::LegacySingleBinary
    } else if !at_least(version, &MULTIEXEC_MILESTONE) {
        Era::ModularSingleBinary
    } else {
        Era::MultiExecutable
    };

    ensure_supported(version, product, era)?;
    Ok(era)
}

/// Reject product/era pairs that were never published
pub(crate) fn ensure_supported(
    version: &Version,
    product: Product,
    era: Era,
) -> Result<(), ReleaseError> {
    match (product, era) {
        (Product::Proxy, Era::LegacySingleBinary | Era::ModularSingleBinary) => {
            Err(ReleaseError::UnsupportedCombination {
                product,
                version: version.clone(),
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn v(major: u64, minor: u64, patch: u64) -> Version {
        Version::new(major, minor, patch)
    }

    #[rstest]
    #[case(v(1, 0, 0), Era::LegacySingleBinary)]
    #[case(v(3, 9, 9), Era::LegacySingleBinary)]
    #[case(v(4, 0, 0), Era::ModularSingleBinary)]
    #[case(v(4, 9, 9), Era::ModularSingleBinary)]
    #[case(v(5, 0, 0), Era::MultiExecutable)]
    #[case(v(5, 1, 0), Era::MultiExecutable)]
    #[case(v(10, 0, 0), Era::MultiExecutable)]
    fn classify_sync_returns_expected(#[case] version: Version, #[case] expected: Era) {
        assert_eq!(classify(&version, Product::Sync).unwrap(), expected);
    }

    #[rstest]
    #[case(v(5, 0, 0))]
    #[case(v(5, 3, 1))]
    fn classify_proxy_after_split_is_multi_executable(#[case] version: Version) {
        assert_eq!(
            classify(&version, Product::Proxy).unwrap(),
            Era::MultiExecutable
        );
    }

    #[rstest]
    #[case(v(4, 9, 9))]
    #[case(v(4, 0, 0))]
    #[case(v(3, 5, 0))]
    fn classify_proxy_before_split_fails(#[case] version: Version) {
        let err = classify(&version, Product::Proxy).unwrap_err();
        assert!(matches!(
            err,
            ReleaseError::UnsupportedCombination { product: Product::Proxy, version: ref got } if *got == version
        ));
    }
}
