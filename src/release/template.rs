//! Tera-backed page templates
//!
//! A page is made of four templates (header, row, optional FIPS row, footer)
//! plus a stylesheet that is bound into the header as `{{ style }}`.
//! Templates are registered under names without an `.html` suffix, so Tera
//! never autoescapes the links and markup bound into them.

use std::path::{Path, PathBuf};

use tera::{Context, Tera};
use tracing::debug;

use crate::config::{
    TEMPLATE_FIPS_ROW_FILE, TEMPLATE_FOOTER_FILE, TEMPLATE_HEADER_FILE, TEMPLATE_ROW_FILE,
    TEMPLATE_STYLE_FILE,
};
use crate::release::error::TemplateError;
use crate::release::types::Fields;

const HEADER: &str = "header";
const ROW: &str = "row";
const FIPS_ROW: &str = "fips_row";
const FOOTER: &str = "footer";

/// The set of templates making up a download page
#[derive(Debug, Clone)]
pub struct Templates {
    tera: Tera,
    style: String,
    has_fips_row: bool,
}

impl Templates {
    /// Build templates from their sources. The FIPS row is optional and
    /// falls back to the normal row.
    pub fn from_sources(
        style: &str,
        header: &str,
        row: &str,
        fips_row: Option<&str>,
        footer: &str,
    ) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        let sources = [
            (HEADER, Some(header)),
            (ROW, Some(row)),
            (FIPS_ROW, fips_row),
            (FOOTER, Some(footer)),
        ];
        for (name, source) in sources {
            if let Some(source) = source {
                tera.add_raw_template(name, source)
                    .map_err(|source| TemplateError::Parse {
                        template: name.to_string(),
                        source,
                    })?;
            }
        }

        Ok(Self {
            tera,
            style: style.to_string(),
            has_fips_row: fips_row.is_some(),
        })
    }

    /// Load all templates from `dir`. The FIPS row template is optional.
    pub fn load(dir: &Path) -> Result<Self, TemplateError> {
        let fips_path = dir.join(TEMPLATE_FIPS_ROW_FILE);
        let fips_row = if fips_path.is_file() {
            Some(read_template(fips_path)?)
        } else {
            debug!("No FIPS row template in {:?}", dir);
            None
        };

        Self::from_sources(
            &read_template(dir.join(TEMPLATE_STYLE_FILE))?,
            &read_template(dir.join(TEMPLATE_HEADER_FILE))?,
            &read_template(dir.join(TEMPLATE_ROW_FILE))?,
            fips_row.as_deref(),
            &read_template(dir.join(TEMPLATE_FOOTER_FILE))?,
        )
    }

    /// Stylesheet inlined into the header
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Whether a dedicated FIPS row template was supplied
    pub fn has_fips_row(&self) -> bool {
        self.has_fips_row
    }

    pub fn render_header(&self, fields: &Fields) -> Result<String, TemplateError> {
        self.render(HEADER, fields)
    }

    /// Render a download row, using the FIPS row for releases with FIPS builds
    pub fn render_row(&self, fields: &Fields, has_fips: bool) -> Result<String, TemplateError> {
        let name = if has_fips && self.has_fips_row {
            FIPS_ROW
        } else {
            ROW
        };
        self.render(name, fields)
    }

    pub fn render_footer(&self) -> Result<String, TemplateError> {
        self.render(FOOTER, &Fields::new())
    }

    fn render(&self, name: &str, fields: &Fields) -> Result<String, TemplateError> {
        let mut context = Context::new();
        for (key, value) in fields {
            context.insert(*key, value);
        }
        self.tera
            .render(name, &context)
            .map_err(|source| TemplateError::Render {
                template: name.to_string(),
                source,
            })
    }
}

fn read_template(path: PathBuf) -> Result<String, TemplateError> {
    std::fs::read_to_string(&path).map_err(|source| TemplateError::Read { path, source })
}

/// Escape `|` so text can be placed inside a table cell
pub fn escape_pipes(text: &str) -> String {
    text.replace('|', "&#124;")
}
