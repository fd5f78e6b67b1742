//! Configuration types and options for the application.
//!
//! This module contains the option structures threaded through the lister and
//! the manifest writer, plus the optional TOML configuration file.

pub mod file;
pub mod list;
pub mod output;

pub use file::FileConfig;
pub use list::{ListOptions, ParseMode};
pub use output::{MANIFEST_FILE_NAME, OutputOptions};
