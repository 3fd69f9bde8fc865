use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use split_docgen::config::{DocgenConfig, parse_fips_since};
use split_docgen::docs::{collect_flags, collect_options, render_flag_list, render_options_table};
use split_docgen::logging::init_tracing;
use split_docgen::release::{
    Era, PageOptions, Product, Templates, bind, classify, render_download_page,
};
use split_docgen::version::semver::parse_version;
use split_docgen::version::source::{FileTagSource, GitTagSource, TagSource};

#[derive(Parser)]
#[command(name = "split-docgen")]
#[command(version, about = "Download pages and option docs for split-sync and split-proxy")]
struct Cli {
    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// JSON config file (templateDir, fipsSince)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the download page of an app
    DownloadPage {
        /// App to build the download page for [sync|proxy]
        #[arg(short, long)]
        app: String,

        /// Directory holding the page templates
        #[arg(short, long)]
        templates: Option<PathBuf>,

        /// Read tags from this file instead of running `git tag -l`
        #[arg(long, conflicts_with = "repo")]
        tags_file: Option<PathBuf>,

        /// Repository to list tags from (defaults to the current directory)
        #[arg(long)]
        repo: Option<PathBuf>,

        /// First release that shipped FIPS builds
        #[arg(long)]
        fips_since: Option<String>,
    },
    /// Generate the Markdown table of configuration options
    OptionsTable {
        /// Environment variable prefix (e.g., SPLIT_SYNC)
        #[arg(short, long)]
        env_prefix: String,

        /// Comma separated sections files to process
        #[arg(short, long, value_delimiter = ',', required = true)]
        files: Vec<PathBuf>,
    },
    /// List command line flags as a quoted, space separated string
    CliFlags {
        /// Comma separated sections files to process
        #[arg(short, long, value_delimiter = ',', required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the artifact links of a single release as JSON
    Artifacts {
        /// App the release belongs to [sync|proxy]
        #[arg(short, long)]
        app: String,

        /// Release version (X.Y.Z)
        #[arg(long)]
        version: String,

        /// Force a packaging era instead of classifying the version
        #[arg(long)]
        era: Option<String>,

        /// Include FIPS builds
        #[arg(long)]
        fips: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_file.as_deref())?;
    run(cli)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => DocgenConfig::load(path)?,
        None => DocgenConfig::default(),
    };

    let output = match cli.command {
        Command::DownloadPage {
            app,
            templates,
            tags_file,
            repo,
            fips_since,
        } => {
            let product: Product = app.parse()?;
            let template_dir = templates.unwrap_or_else(|| config.template_dir());
            let templates = Templates::load(&template_dir)?;
            let fips_since = match fips_since {
                Some(value) => Some(parse_fips_since(&value)?),
                None => config.fips_since()?,
            };
            let source: Box<dyn TagSource> = match tags_file {
                Some(path) => Box::new(FileTagSource::new(path)),
                None => Box::new(GitTagSource::new(repo)),
            };

            render_download_page(
                source.as_ref(),
                product,
                &templates,
                &PageOptions { fips_since },
            )?
            .to_text()
        }
        Command::OptionsTable { env_prefix, files } => {
            let options = collect_options(&files).context("Failed to read sections file")?;
            format!("{}\n", render_options_table(&env_prefix, &options))
        }
        Command::CliFlags { files } => {
            let flags = collect_flags(&files).context("Failed to read sections file")?;
            format!("{}\n", render_flag_list(&flags))
        }
        Command::Artifacts {
            app,
            version,
            era,
            fips,
        } => {
            let product: Product = app.parse()?;
            let version = parse_version(version.strip_prefix('v').unwrap_or(&version))
                .with_context(|| format!("Invalid version {:?}", version))?;
            let era = match era {
                Some(label) => label.parse::<Era>()?,
                None => classify(&version, product)?,
            };
            let artifacts = bind(&version, product, era, fips)?;
            format!("{}\n", serde_json::to_string_pretty(&artifacts)?)
        }
    };

    // Write only once everything rendered, so failures leave stdout empty
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
