//! OS-specific filesystem roots.
//!
//! [`PlatformRoots`] is computed once at startup from the OS identity and a
//! handful of environment variables, then handed to every component that
//! needs it. Nothing in here touches the filesystem.

use crate::error::{Result, SwitchError};
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;

mod unix;
mod windows;

pub use unix::UNIX_PLATFORM;
pub use windows::WINDOWS_PLATFORM;

/// Directory under the install base holding the SDK tree.
pub const VENDOR_DIR: &str = "dotnet";

/// Read access to environment variables.
pub trait EnvSource {
    fn var_os(&self, key: &str) -> Option<OsString>;
}

/// The real process environment.
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

impl EnvSource for HashMap<String, String> {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.get(key).map(OsString::from)
    }
}

pub trait PlatformOps: Sync + Send {
    fn name(&self) -> &'static str;
    fn home_dir(&self, env: &dyn EnvSource) -> Result<PathBuf>;
    /// Directory whose children are the installed SDK versions.
    fn sdk_root(&self, env: &dyn EnvSource) -> Result<PathBuf>;
    fn toolchain_exe(&self, env: &dyn EnvSource) -> Result<PathBuf>;
    fn toolchain_binary_name(&self) -> &'static str;
}

/// Pick the implementation for an OS identity as reported by
/// `std::env::consts::OS`.
pub fn platform_for(os: &str) -> Result<&'static dyn PlatformOps> {
    match os {
        "windows" => Ok(&WINDOWS_PLATFORM),
        "linux" | "macos" => Ok(&UNIX_PLATFORM),
        other => Err(SwitchError::UnsupportedPlatform(other.to_string())),
    }
}

pub(crate) fn require_var(env: &dyn EnvSource, key: &'static str) -> Result<PathBuf> {
    env.var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .ok_or(SwitchError::MissingEnvironment(key))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformRoots {
    pub home: PathBuf,
    pub sdk_root: PathBuf,
    pub toolchain_exe: PathBuf,
    /// Bare binary name used for a PATH lookup when `toolchain_exe` is absent.
    pub toolchain_name: &'static str,
}

impl PlatformRoots {
    /// Resolve against the running OS and process environment.
    pub fn detect() -> Result<Self> {
        Self::resolve(std::env::consts::OS, &ProcessEnv)
    }

    /// All fields resolve together or the whole thing fails.
    pub fn resolve(os: &str, env: &dyn EnvSource) -> Result<Self> {
        let ops = platform_for(os)?;
        let roots = PlatformRoots {
            home: ops.home_dir(env)?,
            sdk_root: ops.sdk_root(env)?,
            toolchain_exe: ops.toolchain_exe(env)?,
            toolchain_name: ops.toolchain_binary_name(),
        };
        tracing::debug!(platform = ops.name(), home = %roots.home.display(), sdk_root = %roots.sdk_root.display(), "resolved platform roots");
        Ok(roots)
    }
}
