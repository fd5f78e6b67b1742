//! The `versions.json` manifest.
//!
//! A manifest is a JSON array of strings: every version directory in ascending
//! order, then the [`SENTINELS`]. It is written atomically so a failed run never
//! leaves a truncated file behind.

use std::{fs, io::Write, path::Path};

use serde::{Serialize, Serializer};
use tempfile::NamedTempFile;

use crate::error::VersionsError;

/// Rolling documentation builds, always listed after the released versions.
pub const SENTINELS: [&str; 2] = ["stable", "devel"];

/// Ordered version directories plus the trailing sentinels.
///
/// Serializes as a flat JSON array of strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VersionList {
    versions: Vec<String>,
}

impl VersionList {
    /// Wrap already-sorted version names.
    #[must_use]
    pub const fn new(versions: Vec<String>) -> Self {
        Self { versions }
    }

    /// The sorted version names, without sentinels.
    #[must_use]
    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    /// Every manifest entry in output order, sentinels included.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.versions
            .iter()
            .map(String::as_str)
            .chain(SENTINELS)
    }

    /// Number of version directories, sentinels excluded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Encode the manifest as JSON, compact unless `pretty` is set.
    ///
    /// # Errors
    ///
    /// Returns [`VersionsError::Serialize`] if encoding fails.
    pub fn to_json(&self, pretty: bool) -> Result<String, VersionsError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };

        Ok(json)
    }
}

impl Serialize for VersionList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries())
    }
}

/// Write `list` to `path`, replacing any existing file.
///
/// The JSON is written to a temporary file in the destination directory, then
/// renamed over `path`. An existing manifest keeps its permissions; a new one
/// is created world-readable so a web server can serve it.
///
/// # Errors
///
/// Returns [`VersionsError::Write`] if the temporary file can't be created or
/// written, or the rename fails.
pub fn write_manifest(list: &VersionList, path: &Path, pretty: bool) -> Result<(), VersionsError> {
    let json = list.to_json(pretty)?;
    let write_err = |source| VersionsError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(json.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    set_manifest_permissions(&tmp, path).map_err(write_err)?;
    tmp.persist(path).map_err(|err| write_err(err.error))?;

    Ok(())
}

#[cfg(unix)]
fn set_manifest_permissions(tmp: &NamedTempFile, path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match fs::metadata(path) {
        Ok(metadata) => metadata.permissions(),
        Err(_) => fs::Permissions::from_mode(0o644),
    };

    tmp.as_file().set_permissions(permissions)
}

#[cfg(not(unix))]
fn set_manifest_permissions(_tmp: &NamedTempFile, _path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn list(values: &[&str]) -> VersionList {
        VersionList::new(values.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_entries_end_with_sentinels() {
        let list = list(&["0.6.1", "0.8.0"]);
        let entries: Vec<&str> = list.entries().collect();

        assert_eq!(entries, ["0.6.1", "0.8.0", "stable", "devel"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_empty_list_is_only_sentinels() {
        let list = VersionList::default();

        assert!(list.is_empty());
        assert_eq!(list.to_json(false).unwrap(), r#"["stable","devel"]"#);
    }

    #[test]
    fn test_to_json_compact() {
        let list = list(&["0.6.0", "0.6.1", "0.8.0", "0.14.4"]);

        assert_eq!(
            list.to_json(false).unwrap(),
            r#"["0.6.0","0.6.1","0.8.0","0.14.4","stable","devel"]"#
        );
    }

    #[test]
    fn test_to_json_pretty() {
        let json = list(&["0.6.1"]).to_json(true).unwrap();

        assert_eq!(json, "[\n  \"0.6.1\",\n  \"stable\",\n  \"devel\"\n]");
    }

    #[test]
    fn test_write_manifest_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("versions.json");

        write_manifest(&list(&["0.6.1"]), &path, false).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, r#"["0.6.1","stable","devel"]"#);
    }

    #[test]
    fn test_write_manifest_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("versions.json");
        fs::write(&path, r#"["0.1.0","0.2.0","0.3.0","old","stable","devel"]"#).unwrap();

        write_manifest(&VersionList::default(), &path, false).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, r#"["stable","devel"]"#);
    }

    #[test]
    fn test_write_manifest_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("versions.json");

        write_manifest(&list(&["0.6.1"]), &path, false).unwrap();

        let names: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["versions.json"]);
    }

    #[test]
    #[cfg(unix)]
    fn test_write_manifest_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("versions.json");

        write_manifest(&list(&["0.6.1"]), &path, false).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_write_manifest_missing_directory_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("versions.json");

        let err = write_manifest(&list(&["0.6.1"]), &path, false).unwrap_err();

        assert!(matches!(err, VersionsError::Write { path: ref p, .. } if *p == path));
    }
}
