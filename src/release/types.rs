//! Common types for release pages

use indexmap::IndexMap;
use serde::Serialize;

use crate::release::error::ReleaseError;

/// Released application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Product {
    /// split-sync (split-synchronizer)
    Sync,
    /// split-proxy, shipped on its own since 5.0.0
    Proxy,
}

impl Product {
    /// Returns the string representation used in artifact names
    pub fn as_str(&self) -> &'static str {
        match self {
            Product::Sync => "sync",
            Product::Proxy => "proxy",
        }
    }

    /// Page-level constants for this product
    pub fn profile(&self) -> &'static ProductProfile {
        match self {
            Product::Sync => &SYNC_PROFILE,
            Product::Proxy => &PROXY_PROFILE,
        }
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Product {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sync" => Ok(Product::Sync),
            "proxy" => Ok(Product::Proxy),
            _ => Err(ReleaseError::UnknownProduct(s.to_string())),
        }
    }
}

/// Packaging convention in effect for a release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Era {
    /// Before 4.0.0: single binary, unprefixed tags
    LegacySingleBinary,
    /// 4.x: `v`-prefixed tags, packaging unchanged
    ModularSingleBinary,
    /// 5.0.0 onwards: separate sync and proxy executables
    MultiExecutable,
}

impl Era {
    pub fn as_str(&self) -> &'static str {
        match self {
            Era::LegacySingleBinary => "legacy-single-binary",
            Era::ModularSingleBinary => "modular-single-binary",
            Era::MultiExecutable => "multi-executable",
        }
    }
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Era {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legacy-single-binary" => Ok(Era::LegacySingleBinary),
            "modular-single-binary" => Ok(Era::ModularSingleBinary),
            "multi-executable" => Ok(Era::MultiExecutable),
            _ => Err(ReleaseError::UnknownEra(s.to_string())),
        }
    }
}

/// Download target of an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    Linux,
    Osx,
    Windows,
    FipsLinux,
    FipsWindows,
}

impl Platform {
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Osx => "osx",
            Platform::Windows => "windows",
            Platform::FipsLinux => "fips-linux",
            Platform::FipsWindows => "fips-windows",
        }
    }

    /// Name of the row template field holding this platform's download link
    pub fn template_field(&self) -> &'static str {
        match self {
            Platform::Linux => "old_file_linux",
            Platform::Osx => "old_file_osx",
            Platform::Windows => "old_file_windows",
            Platform::FipsLinux => "old_file_fips_linux",
            Platform::FipsWindows => "old_file_fips_windows",
        }
    }
}

/// Template fields in insertion order
pub type Fields = IndexMap<&'static str, String>;

/// Download links of a single release
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactSet {
    /// Version as displayed on the page (no `v` prefix)
    pub version: String,
    /// Relative artifact path per platform
    pub artifacts: IndexMap<Platform, String>,
}

impl ArtifactSet {
    pub fn get(&self, platform: Platform) -> Option<&str> {
        self.artifacts.get(&platform).map(String::as_str)
    }

    /// Whether FIPS builds were bound for this release
    pub fn has_fips(&self) -> bool {
        self.artifacts.contains_key(&Platform::FipsLinux)
            || self.artifacts.contains_key(&Platform::FipsWindows)
    }

    /// Fields substituted into a download row
    pub fn template_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("version", self.version.clone());
        for (platform, path) in &self.artifacts {
            fields.insert(platform.template_field(), path.clone());
        }
        fields
    }
}

/// Page-level constants of a product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductProfile {
    pub title: &'static str,
    pub description: &'static str,
    pub dockerhub_url: &'static str,
    pub latest_linux: &'static str,
    pub latest_osx: &'static str,
    pub latest_windows: &'static str,
}

pub static SYNC_PROFILE: ProductProfile = ProductProfile {
    title: "Split Sync Download Page",
    description: "Download latest version of split-sync. A background service to synchronize Split information with your SDK",
    dockerhub_url: "https://hub.docker.com/r/splitsoftware/split-synchronizer/",
    latest_linux: "install_split_sync_linux.bin",
    latest_osx: "install_split_sync_osx.bin",
    latest_windows: "split_sync_windows.zip",
};

pub static PROXY_PROFILE: ProductProfile = ProductProfile {
    title: "Split Proxy Download Page",
    description: "Download latest version of split-proxy. A background service that mimics our BE to deploy in your own infra.\n\
                  Prior to version 5.0.0, the split-synchronizer & proxy were a single app. Those versions can be found in the \
                  Split-Synchronizer download page.",
    dockerhub_url: "https://hub.docker.com/r/splitsoftware/split-proxy/",
    latest_linux: "install_split_proxy_linux.bin",
    latest_osx: "install_split_proxy_osx.bin",
    latest_windows: "split_proxy_windows.zip",
};
