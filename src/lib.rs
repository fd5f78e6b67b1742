//! # doc-versions
//!
//! Generates the `versions.json` manifest read by a documentation site's
//! version switcher.
//!
//! The immediate subdirectories of a documentation root are treated as released
//! versions (except `dev`, `devel`, `stable` and hidden directories), ordered by
//! version precedence, and followed by the `stable` and `devel` sentinels.

pub mod config;
pub mod error;
pub mod lister;
pub mod manifest;
pub mod version;

pub use error::VersionsError;
