//! Determine the active SDK version.
//!
//! The primary strategy reads the nearest `global.json`. Any failure there
//! (no file, unreadable, malformed, no `sdk.version`) degrades to asking
//! the toolchain itself via `--version`. Failures are kept on the
//! [`Resolution`] rather than raised.

use crate::config::SwitchOptions;
use crate::error::{Result, SwitchError};
use crate::events::{Event, EventSink};
use crate::locator;
use crate::platform::PlatformRoots;
use crate::pointer;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Pointer(PathBuf),
    Toolchain(PathBuf),
}

#[derive(Debug)]
pub struct Resolution {
    /// Empty when `ok` is false.
    pub version: String,
    pub is_global: bool,
    pub ok: bool,
    pub origin: Option<Origin>,
    /// Every strategy failure encountered, in order.
    pub failures: Vec<SwitchError>,
}

/// Asks an installed toolchain for its version.
pub trait VersionQuery: Send + Sync {
    fn program(&self) -> &Path;
    /// Trimmed stdout of the query.
    fn query(&self) -> Result<String>;
}

/// Runs `<exe> --version` and waits for it.
#[derive(Debug, Clone)]
pub struct ToolchainCommand {
    program: PathBuf,
    args: Vec<String>,
}

impl ToolchainCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into(), args: vec!["--version".to_string()] }
    }

    /// Prefer the conventional install path, then PATH, then the bare name
    /// so a launch failure still names what was tried.
    pub fn locate(roots: &PlatformRoots) -> Self {
        if roots.toolchain_exe.is_file() {
            return Self::new(&roots.toolchain_exe);
        }
        match which::which(roots.toolchain_name) {
            Ok(found) => Self::new(found),
            Err(_) => Self::new(roots.toolchain_name),
        }
    }

    #[cfg(test)]
    fn with_args(mut self, args: &[&str]) -> Self {
        self.args = args.iter().map(|a| a.to_string()).collect();
        self
    }
}

impl VersionQuery for ToolchainCommand {
    fn program(&self) -> &Path {
        &self.program
    }

    fn query(&self) -> Result<String> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| SwitchError::ProcessLaunch { program: self.program.clone(), source })?;
        if !output.status.success() {
            tracing::warn!(program = %self.program.display(), status = %output.status, "toolchain exited unsuccessfully");
        }
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if version.is_empty() {
            return Err(SwitchError::EmptyOutput(self.program.clone()));
        }
        Ok(version)
    }
}

/// Read the version from the pointer file the locator finds.
pub fn from_pointer(cwd: &Path, home: &Path, opts: SwitchOptions, sink: &dyn EventSink) -> Result<(String, bool, PathBuf)> {
    let location = locator::find(cwd, home, opts)?;
    let Some(file) = location.file else {
        sink.record(&Event::PointerMissing { stopped_at: location.dir });
        return Err(SwitchError::PointerNotFound);
    };
    sink.record(&Event::PointerFound { path: file.clone(), at_home: location.stopped_at_home });
    let version = pointer::read_version(&file)?;
    Ok((version, location.stopped_at_home, file))
}

pub fn resolve_current(
    cwd: &Path,
    home: &Path,
    opts: SwitchOptions,
    toolchain: &dyn VersionQuery,
    sink: &dyn EventSink,
) -> Resolution {
    let mut failures = Vec::new();
    match from_pointer(cwd, home, opts, sink) {
        Ok((version, is_global, file)) => {
            return Resolution { version, is_global, ok: true, origin: Some(Origin::Pointer(file)), failures };
        }
        Err(e) => {
            sink.record(&Event::FallbackToToolchain { reason: e.to_string() });
            failures.push(e);
        }
    }

    let program = toolchain.program().to_path_buf();
    match toolchain.query() {
        Ok(version) => {
            sink.record(&Event::ToolchainQueried { program: program.clone(), version: Some(version.clone()) });
            Resolution { version, is_global: true, ok: true, origin: Some(Origin::Toolchain(program)), failures }
        }
        Err(e) => {
            sink.record(&Event::ToolchainQueried { program, version: None });
            failures.push(e);
            Resolution { version: String::new(), is_global: true, ok: false, origin: None, failures }
        }
    }
}
