use crate::error::{Result, SwitchError};
use crate::events::{Event, EventSink};
use crate::platform::PlatformRoots;
use fs_err as fs;
use std::path::Path;

/// Names of the directories directly under the SDK root, in the order the
/// filesystem hands them back.
pub fn list_installed(roots: &PlatformRoots, sink: &dyn EventSink) -> Result<Vec<String>> {
    let versions = list_versions_in(&roots.sdk_root)?;
    sink.record(&Event::InstalledListed { root: roots.sdk_root.clone(), count: versions.len() });
    Ok(versions)
}

pub fn list_versions_in(sdk_root: &Path) -> Result<Vec<String>> {
    if !sdk_root.is_dir() {
        return Err(SwitchError::NotFound(sdk_root.to_path_buf()));
    }
    let entries = fs::read_dir(sdk_root).map_err(|source| SwitchError::Read { path: sdk_root.to_path_buf(), source })?;
    let mut out = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SwitchError::Read { path: sdk_root.to_path_buf(), source })?;
        // Follows symlinks so linked SDK directories still count.
        if entry.path().is_dir() {
            out.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(out)
}

/// The last enumerated entry. Enumeration order is whatever the filesystem
/// returned, not a version sort.
pub fn latest(installed: &[String]) -> Option<&str> {
    installed.last().map(String::as_str)
}

pub fn is_installed(installed: &[String], version: &str) -> bool {
    installed.iter().any(|v| v == version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::tempdir;

    #[test]
    fn lists_only_directories() {
        let tmp = tempdir().unwrap();
        for v in ["1.0.0", "2.1.3", "6.0.100-rc.1"] {
            std::fs::create_dir(tmp.path().join(v)).unwrap();
        }
        std::fs::write(tmp.path().join("README.txt"), "not an sdk").unwrap();
        std::fs::write(tmp.path().join("7.0.0"), "file named like a version").unwrap();

        let got: HashSet<String> = list_versions_in(tmp.path()).unwrap().into_iter().collect();
        let want: HashSet<String> = ["1.0.0", "2.1.3", "6.0.100-rc.1"].iter().map(|s| s.to_string()).collect();
        assert_eq!(got, want);
    }

    #[test]
    fn missing_root_is_not_found() {
        let tmp = tempdir().unwrap();
        let missing = tmp.path().join("sdk");
        assert!(matches!(list_versions_in(&missing), Err(SwitchError::NotFound(p)) if p == missing));
    }

    #[test]
    fn file_root_is_not_found() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("sdk");
        std::fs::write(&file, "").unwrap();
        assert!(matches!(list_versions_in(&file), Err(SwitchError::NotFound(_))));
    }

    #[test]
    fn empty_root_lists_nothing() {
        let tmp = tempdir().unwrap();
        assert!(list_versions_in(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn latest_is_last_enumerated() {
        let installed = vec!["6.0.100".to_string(), "2.1.3".to_string()];
        assert_eq!(latest(&installed), Some("2.1.3"));
        assert_eq!(latest(&[]), None);
        assert!(is_installed(&installed, "6.0.100"));
        assert!(!is_installed(&installed, "6.0.10"));
    }
}
