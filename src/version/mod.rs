//! Version comparison keys and ordering.
//!
//! Directory names are compared by version precedence, never lexically: `0.9.0`
//! sorts before `0.10.0`. Two parsing policies exist, selected by [`ParseMode`]:
//!
//! - **tolerant**: any name is accepted and ordered with [`LooseVersion`]
//! - **strict**: every name must be a semantic version, otherwise sorting fails
//!   with [`VersionsError::Parse`] naming the directory

pub mod loose;

pub use loose::{Component, LooseVersion};

use semver::Version;

use crate::{config::ParseMode, error::VersionsError};

/// Strip a single leading lowercase `v` used to form the comparison key.
///
/// Only the first character is inspected and only a lowercase `v` counts, so
/// `V1.0` is returned unchanged.
#[must_use]
pub fn strip_prefix(name: &str) -> &str {
    name.strip_prefix('v').unwrap_or(name)
}

/// Parse a directory name as a strict semantic version.
///
/// # Errors
///
/// Returns [`VersionsError::Parse`] carrying the original (unstripped) name when
/// the key is not `MAJOR.MINOR.PATCH` with optional pre-release/build parts.
pub fn parse_strict(name: &str) -> Result<Version, VersionsError> {
    Version::parse(strip_prefix(name)).map_err(|source| VersionsError::Parse {
        name: name.to_string(),
        source,
    })
}

/// Sort directory names ascending by version precedence.
///
/// The sort is stable: names with equal keys keep their input order. The
/// returned strings are the original names, prefix included.
///
/// # Errors
///
/// In [`ParseMode::Strict`], the first name that fails to parse aborts the sort
/// with [`VersionsError::Parse`]. Tolerant mode never fails.
pub fn sort_versions(names: Vec<String>, mode: ParseMode) -> Result<Vec<String>, VersionsError> {
    match mode {
        ParseMode::Tolerant => Ok(sort_by_key(
            names
                .into_iter()
                .map(|name| (LooseVersion::parse(strip_prefix(&name)), name))
                .collect(),
        )),
        ParseMode::Strict => {
            let keyed = names
                .into_iter()
                .map(|name| parse_strict(&name).map(|version| (version, name)))
                .collect::<Result<Vec<_>, _>>()?;

            Ok(sort_by_key(keyed))
        }
    }
}

fn sort_by_key<K: Ord>(mut keyed: Vec<(K, String)>) -> Vec<String> {
    // `sort_by` is stable, equal keys keep directory-listing order
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    keyed.into_iter().map(|(_, name)| name).collect()
}
