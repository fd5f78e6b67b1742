//! # generate-versions
//!
//! Scans a documentation root for version directories and writes the
//! `versions.json` manifest used by the site's version switcher.
//!
//! ## Usage
//!
//! ```bash
//! # From the documentation root: writes ./versions.json
//! generate-versions
//!
//! # Reject directory names that are not semantic versions
//! generate-versions build/html --mode strict
//!
//! # Preview without writing
//! generate-versions --dry-run --pretty
//! ```

mod cli;

use std::process::exit;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use doc_versions::{config::FileConfig, lister::VersionLister, manifest::write_manifest};

/// Entry point for the generate-versions application.
///
/// Errors from [`inner_main`] are printed to stderr and turned into a non-zero
/// exit status.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("{} {err}", "Error:".red());

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Loads the config file if `--config` was given
/// 3. Lists and sorts the version directories
/// 4. Prints the manifest (`--dry-run`) or writes it atomically
///
/// # Errors
///
/// This function can return errors from:
/// - Config file loading
/// - Directory listing
/// - Version parsing in strict mode
/// - Writing the manifest
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let file_config = match args.config_path() {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let dir = args.directory(&file_config);
    let list_options = args.list_options(&file_config);
    let output_options = args.output_options(&file_config, &dir);
    let quiet = args.quiet() || output_options.dry_run;

    let lister = VersionLister::new(list_options).with_verbose(args.verbose());
    let versions = lister.list(&dir)?;

    if args.verbose() {
        for version in versions.versions() {
            eprintln!("  {} {version}", "+".green());
        }
    }

    if output_options.dry_run {
        println!("{}", versions.to_json(output_options.pretty)?);
        return Ok(());
    }

    write_manifest(&versions, &output_options.path, output_options.pretty)?;

    if !quiet {
        if versions.is_empty() {
            println!("{}", "No version directories found".yellow());
        } else {
            println!(
                "Found {} version directories in {}",
                versions.len(),
                dir.display().to_string().bold()
            );
        }

        println!(
            "{} {}",
            "✅ Wrote".green(),
            output_options.path.display().to_string().bright_white()
        );
    }

    Ok(())
}
