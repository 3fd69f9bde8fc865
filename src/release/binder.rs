//! Row binding
//!
//! Resolves the artifact paths a download row links to. Paths are relative to
//! the page and must match the files actually uploaded for that release:
//!
//! ```text
//! build
//! ├── 4.1.0
//! │   ├── install_linux_4.1.0.bin
//! │   ├── install_osx_4.1.0.bin
//! │   └── split-sync-win_4.1.0.zip
//! └── 5.0.0
//!     ├── install_split_proxy_linux_5.0.0.bin
//!     ├── install_split_proxy_osx_5.0.0.bin
//!     ├── install_split_sync_linux_5.0.0.bin
//!     ├── install_split_sync_osx_5.0.0.bin
//!     ├── split_proxy_windows_5.0.0.zip
//!     └── split_sync_windows_5.0.0.zip
//! ```

use indexmap::IndexMap;
use tracing::debug;

use crate::release::era::ensure_supported;
use crate::release::error::ReleaseError;
use crate::release::types::{ArtifactSet, Era, Platform, Product};
use crate::version::semver::Version;

/// Bind the artifact paths of `version` for `product` under `era`.
///
/// `fips` asks for the FIPS builds as well; they were only ever published
/// for multi-executable releases, so the flag has no effect before that.
pub fn bind(
    version: &Version,
    product: Product,
    era: Era,
    fips: bool,
) -> Result<ArtifactSet, ReleaseError> {
    ensure_supported(version, product, era)?;

    let v = version.to_string();
    let mut artifacts = IndexMap::new();

    match era {
        Era::LegacySingleBinary | Era::ModularSingleBinary => {
            if fips {
                debug!("No FIPS builds exist for {} ({})", v, era);
            }
            artifacts.insert(Platform::Osx, format!("./{v}/install_osx_{v}.bin"));
            artifacts.insert(Platform::Linux, format!("./{v}/install_linux_{v}.bin"));
            artifacts.insert(Platform::Windows, format!("./{v}/split-sync-win_{v}.zip"));
        }
        Era::MultiExecutable => {
            let app = product.as_str();
            artifacts.insert(
                Platform::Osx,
                format!("./{v}/install_split_{app}_osx_{v}.bin"),
            );
            artifacts.insert(
                Platform::Linux,
                format!("./{v}/install_split_{app}_linux_{v}.bin"),
            );
            artifacts.insert(
                Platform::Windows,
                format!("./{v}/split_{app}_windows_{v}.zip"),
            );
            if fips {
                artifacts.insert(
                    Platform::FipsLinux,
                    format!("./{v}/install_split_{app}_linux_fips_{v}.bin"),
                );
                artifacts.insert(
                    Platform::FipsWindows,
                    format!("./{v}/split_{app}_windows_fips_{v}.zip"),
                );
            }
        }
    }

    Ok(ArtifactSet {
        version: v,
        artifacts,
    })
}
