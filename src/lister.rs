//! Version directory discovery.
//!
//! This module lists the immediate children of a documentation root, keeps the
//! ones that name released versions, and orders them for the manifest.

use std::{
    fmt::{self, Display, Formatter},
    fs, io,
    path::Path,
};

use colored::Colorize;
use walkdir::{DirEntry, WalkDir};

use crate::{
    config::ListOptions, error::VersionsError, manifest::VersionList, version::sort_versions,
};

/// Directory names that are never treated as versions.
///
/// `stable` and `devel` are re-added verbatim at the end of every manifest.
pub const EXCLUDED_NAMES: [&str; 3] = ["dev", "devel", "stable"];

/// Why a directory entry was left out of the manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// One of [`EXCLUDED_NAMES`]
    Excluded,

    /// Name starts with `.`
    Hidden,

    /// A file or anything else that doesn't resolve to a directory
    NotADirectory,
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Excluded => "reserved name",
            Self::Hidden => "hidden",
            Self::NotADirectory => "not a directory",
        };

        f.write_str(reason)
    }
}

/// Classify a directory name, returning why it is skipped, if it is.
#[must_use]
pub fn skip_reason(name: &str) -> Option<SkipReason> {
    if EXCLUDED_NAMES.contains(&name) {
        Some(SkipReason::Excluded)
    } else if name.starts_with('.') {
        Some(SkipReason::Hidden)
    } else {
        None
    }
}

/// Lists version directories under a documentation root.
pub struct VersionLister {
    options: ListOptions,

    /// When `true`, every skipped entry is reported on stderr.
    verbose: bool,
}

impl VersionLister {
    #[must_use]
    pub const fn new(options: ListOptions) -> Self {
        Self {
            options,
            verbose: false,
        }
    }

    /// Enable or disable reporting of skipped entries.
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build the ordered manifest for `root`.
    ///
    /// Candidates are collected with [`collect_candidates`](Self::collect_candidates),
    /// sorted with the configured [`ParseMode`](crate::config::ParseMode), and
    /// followed by the `stable` and `devel` sentinels.
    ///
    /// # Errors
    ///
    /// Fails when `root` or one of its entries cannot be read, when a directory
    /// name is not UTF-8, or (in strict mode) when a name is not a semantic
    /// version.
    pub fn list(&self, root: &Path) -> Result<VersionList, VersionsError> {
        let candidates = self.collect_candidates(root)?;
        let sorted = sort_versions(candidates, self.options.mode)?;

        Ok(VersionList::new(sorted))
    }

    /// Collect the names of qualifying immediate subdirectories of `root`.
    ///
    /// Names are returned in directory-listing order. The walk never descends
    /// below the first level.
    ///
    /// # Errors
    ///
    /// Returns [`VersionsError::ReadDir`] if `root` is missing, is not a
    /// directory, or cannot be listed, and [`VersionsError::NonUtf8Name`] for a
    /// directory whose name cannot be represented in JSON.
    pub fn collect_candidates(&self, root: &Path) -> Result<Vec<String>, VersionsError> {
        let metadata = fs::metadata(root).map_err(|source| VersionsError::ReadDir {
            path: root.to_path_buf(),
            source,
        })?;

        if !metadata.is_dir() {
            return Err(VersionsError::ReadDir {
                path: root.to_path_buf(),
                source: io::Error::other("not a directory"),
            });
        }

        let mut candidates = Vec::new();

        for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|err| VersionsError::ReadDir {
                path: err.path().unwrap_or(root).to_path_buf(),
                source: err.into(),
            })?;

            if !Self::is_directory(&entry) {
                self.report_skip(&entry.file_name().to_string_lossy(), SkipReason::NotADirectory);
                continue;
            }

            // Invalid bytes become U+FFFD, so hidden and reserved names classify
            // the same as their raw bytes would
            let lossy = entry.file_name().to_string_lossy();
            if let Some(reason) = skip_reason(&lossy) {
                self.report_skip(&lossy, reason);
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                return Err(VersionsError::NonUtf8Name {
                    path: entry.path().to_path_buf(),
                });
            };

            candidates.push(name.to_string());
        }

        Ok(candidates)
    }

    /// Directories, and symlinks that resolve to directories.
    fn is_directory(entry: &DirEntry) -> bool {
        entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
    }

    fn report_skip(&self, name: &str, reason: SkipReason) {
        if self.verbose {
            eprintln!("{}", format!("  skipped {name} ({reason})").dimmed());
        }
    }
}
