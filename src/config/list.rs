//! Listing configuration: how directory names are turned into version keys.

use clap::ValueEnum;
use serde::Deserialize;

/// Policy for interpreting directory names as versions.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Accept any name and order it best-effort, component by component
    #[default]
    Tolerant,

    /// Require every name to be a `MAJOR.MINOR.PATCH` semantic version
    Strict,
}

/// Options for the [`VersionLister`](crate::lister::VersionLister).
#[derive(Clone, Debug, Default)]
pub struct ListOptions {
    /// Version parsing policy
    pub mode: ParseMode,
}
