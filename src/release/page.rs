//! Download page assembly
//!
//! Owns the ordering policy: multi-executable releases come first, newest
//! first, followed (for sync only) by the older single-binary releases, also
//! newest first.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::release::binder::bind;
use crate::release::era::classify;
use crate::release::error::PageError;
use crate::release::template::{Templates, escape_pipes};
use crate::release::types::{Fields, Product};
use crate::version::semver::{MULTIEXEC_MILESTONE, Version, at_least, sort_descending};
use crate::version::source::TagSource;
use crate::version::tag::normalize_tags;

/// Page-wide rendering options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// First release that published FIPS builds, if any
    pub fips_since: Option<Version>,
}

impl PageOptions {
    fn has_fips(&self, version: &Version) -> bool {
        self.fips_since
            .as_ref()
            .is_some_and(|since| at_least(version, since))
    }
}

/// A rendered download page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub header: String,
    pub rows: Vec<String>,
    pub footer: String,
}

impl RenderedPage {
    /// Final page text: header, rows and footer, each terminated by a newline
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for part in std::iter::once(&self.header)
            .chain(&self.rows)
            .chain(std::iter::once(&self.footer))
        {
            text.push_str(part);
            text.push('\n');
        }
        text
    }
}

/// Order versions for display on the page of `product`.
///
/// Proxy pages only list multi-executable releases; older versions belong to
/// the synchronizer page.
pub fn order_versions(versions: &BTreeSet<Version>, product: Product) -> Vec<Version> {
    let (mut multi, mut single): (Vec<Version>, Vec<Version>) = versions
        .iter()
        .cloned()
        .partition(|v| at_least(v, &MULTIEXEC_MILESTONE));

    sort_descending(&mut multi);
    match product {
        Product::Sync => {
            sort_descending(&mut single);
            multi.extend(single);
        }
        Product::Proxy => {
            if !single.is_empty() {
                debug!(
                    "Leaving {} pre-{} versions off the proxy page",
                    single.len(),
                    MULTIEXEC_MILESTONE
                );
            }
        }
    }
    multi
}

/// Header fields for `product`
pub fn header_fields(product: Product, style: &str) -> Fields {
    let profile = product.profile();
    let mut fields = Fields::new();
    fields.insert("title", escape_pipes(profile.title));
    fields.insert("description", escape_pipes(profile.description));
    fields.insert("dockerhub_url", profile.dockerhub_url.to_string());
    fields.insert("latest_linux", profile.latest_linux.to_string());
    fields.insert("latest_osx", profile.latest_osx.to_string());
    fields.insert("latest_windows", profile.latest_windows.to_string());
    fields.insert("style", style.to_string());
    fields
}

/// Render the download page of `product` from a raw tag listing
pub fn render_page(
    raw_tags: &str,
    product: Product,
    templates: &Templates,
    options: &PageOptions,
) -> Result<RenderedPage, PageError> {
    let versions = normalize_tags(raw_tags);
    let ordered = order_versions(&versions, product);

    let header = templates.render_header(&header_fields(product, templates.style()))?;

    let rows = ordered
        .iter()
        .map(|version| -> Result<String, PageError> {
            let era = classify(version, product)?;
            let artifacts = bind(version, product, era, options.has_fips(version))?;
            debug!("Binding {} {} as {}", product, version, era);
            let row = templates.render_row(&artifacts.template_fields(), artifacts.has_fips())?;
            Ok(row)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let footer = templates.render_footer()?;

    info!(
        "Rendered {} page with {} releases ({} tags kept)",
        product,
        rows.len(),
        versions.len()
    );

    Ok(RenderedPage {
        header,
        rows,
        footer,
    })
}

/// Fetch tags from `source` and render the download page of `product`
pub fn render_download_page<S: TagSource + ?Sized>(
    source: &S,
    product: Product,
    templates: &Templates,
    options: &PageOptions,
) -> Result<RenderedPage, PageError> {
    let raw_tags = source.list_tags()?;
    render_page(&raw_tags, product, templates, options)
}
