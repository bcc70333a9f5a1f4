use crate::error::{Result, SwitchError};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// `global.json`. Unknown keys are ignored on read.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PointerFile {
    pub sdk: Option<SdkSection>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SdkSection {
    pub version: Option<String>,
}

impl PointerFile {
    pub fn for_version(version: &str) -> Self {
        Self { sdk: Some(SdkSection { version: Some(version.to_string()) }) }
    }

    pub fn version(&self) -> Option<&str> {
        self.sdk.as_ref()?.version.as_deref()
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }
}

/// Read and decode a pointer file down to its `sdk.version` string.
pub fn read_version(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(|source| SwitchError::Read { path: path.to_path_buf(), source })?;
    let doc: PointerFile =
        serde_json::from_str(&raw).map_err(|source| SwitchError::Decode { path: path.to_path_buf(), source })?;
    doc.version()
        .map(str::to_string)
        .ok_or_else(|| SwitchError::MissingVersion(path.to_path_buf()))
}

/// Truncate `path` and write a fresh document naming `version`.
pub fn write_version(path: &Path, version: &str) -> Result<()> {
    let body = PointerFile::for_version(version)
        .to_pretty_json()
        .map_err(|e| SwitchError::Write { path: path.to_path_buf(), source: e.into() })?;
    fs::write(path, body).map_err(|source| SwitchError::Write { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_version_and_ignores_extra_keys() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("global.json");
        std::fs::write(
            &p,
            r#"{"sdk":{"version":"5.0.200","rollForward":"latestFeature"},"msbuild-sdks":{"X":"1.0"}}"#,
        )
        .unwrap();
        assert_eq!(read_version(&p).unwrap(), "5.0.200");
    }

    #[test]
    fn malformed_document_is_decode_error() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("global.json");
        std::fs::write(&p, "{ sdk: ").unwrap();
        assert!(matches!(read_version(&p), Err(SwitchError::Decode { .. })));
    }

    #[test]
    fn missing_version_key_is_reported() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("global.json");
        for body in [r#"{}"#, r#"{"sdk":{}}"#, r#"{"sdk":null}"#] {
            std::fs::write(&p, body).unwrap();
            assert!(matches!(read_version(&p), Err(SwitchError::MissingVersion(_))), "{body}");
        }
    }

    #[test]
    fn missing_file_is_read_error() {
        let tmp = tempdir().unwrap();
        assert!(matches!(read_version(&tmp.path().join("global.json")), Err(SwitchError::Read { .. })));
    }

    #[test]
    fn write_replaces_whole_file() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("global.json");
        std::fs::write(&p, r#"{"sdk":{"version":"1.0.0"},"tools":{"keep":"me"},"padding":"xxxxxxxxxxxxxxxx"}"#).unwrap();
        write_version(&p, "6.0.100").unwrap();

        let raw = std::fs::read_to_string(&p).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!({"sdk": {"version": "6.0.100"}}));
        assert!(raw.contains("\n  \"sdk\""), "expected pretty output, got {raw}");
    }
}
