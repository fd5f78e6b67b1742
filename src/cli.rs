//! Command-line interface definition and option layering.
//!
//! Every accessor resolves one option with the precedence
//! **CLI argument > config file > hardcoded default**.

use std::path::{Path, PathBuf};

use clap::Parser;

use doc_versions::config::{FileConfig, ListOptions, MANIFEST_FILE_NAME, OutputOptions, ParseMode};

#[derive(Parser)]
struct ListingArgs {
    /// How directory names are parsed as versions
    #[arg(short = 'm', long, value_enum)]
    mode: Option<ParseMode>,
}

#[derive(Parser)]
struct OutputArgs {
    /// Where to write the manifest [default: <DIR>/versions.json]
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON manifest
    #[arg(long, conflicts_with = "compact")]
    pretty: bool,

    /// Write single-line JSON even if the config file asks for `pretty`
    #[arg(long)]
    compact: bool,

    /// Print the manifest to stdout instead of writing it
    #[arg(long)]
    dry_run: bool,
}

#[derive(Parser)]
struct ReportingArgs {
    /// Don't print the summary
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,

    /// List every version found and every entry skipped
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Parser)]
#[command(name = "generate-versions", version)]
#[command(about = "Write the versions.json manifest for a documentation site's version switcher")]
pub(crate) struct Cli {
    /// The documentation root whose subdirectories are versions [default: .]
    dir: Option<PathBuf>,

    /// Read option defaults from this TOML file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Listing options
    #[command(flatten)]
    listing: ListingArgs,

    /// Output options
    #[command(flatten)]
    output: OutputArgs,

    /// Reporting options
    #[command(flatten)]
    reporting: ReportingArgs,
}

impl Cli {
    /// Path of the config file passed with `--config`, if any.
    #[must_use]
    pub(crate) fn config_path(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    /// The directory to scan.
    #[must_use]
    pub(crate) fn directory(&self, file_config: &FileConfig) -> PathBuf {
        self.dir
            .clone()
            .or_else(|| file_config.dir())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    #[must_use]
    pub(crate) fn list_options(&self, file_config: &FileConfig) -> ListOptions {
        ListOptions {
            mode: self.listing.mode.or(file_config.mode).unwrap_or_default(),
        }
    }

    /// Output options; the manifest defaults to `versions.json` inside `dir`.
    #[must_use]
    pub(crate) fn output_options(&self, file_config: &FileConfig, dir: &Path) -> OutputOptions {
        OutputOptions {
            path: self
                .output
                .output
                .clone()
                .or_else(|| file_config.output())
                .unwrap_or_else(|| dir.join(MANIFEST_FILE_NAME)),
            pretty: !self.output.compact
                && (self.output.pretty || file_config.pretty.unwrap_or(false)),
            dry_run: self.output.dry_run,
        }
    }

    #[must_use]
    pub(crate) const fn quiet(&self) -> bool {
        self.reporting.quiet
    }

    #[must_use]
    pub(crate) const fn verbose(&self) -> bool {
        self.reporting.verbose
    }
}
