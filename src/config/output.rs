//! Output configuration for the generated manifest.

use std::path::PathBuf;

/// File name of the manifest read by the documentation site's version switcher.
pub const MANIFEST_FILE_NAME: &str = "versions.json";

/// Controls where and how the manifest is emitted.
#[derive(Clone, Debug)]
pub struct OutputOptions {
    /// Destination of the manifest
    pub path: PathBuf,

    /// Pretty-print the JSON instead of the compact single-line form
    pub pretty: bool,

    /// Print the manifest to stdout and leave the filesystem untouched
    pub dry_run: bool,
}
