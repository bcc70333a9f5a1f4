use crate::error::Result;
use crate::platform::{require_var, EnvSource, PlatformOps, VENDOR_DIR};
use std::path::PathBuf;

pub static UNIX_PLATFORM: Unix = Unix;

/// Linux and macOS share the `/opt/dotnet` convention.
pub struct Unix;

impl Unix {
    fn install_base(&self) -> PathBuf {
        PathBuf::from("/opt").join(VENDOR_DIR)
    }
}

impl PlatformOps for Unix {
    fn name(&self) -> &'static str {
        "unix"
    }
    fn home_dir(&self, env: &dyn EnvSource) -> Result<PathBuf> {
        require_var(env, "HOME")
    }
    fn sdk_root(&self, _env: &dyn EnvSource) -> Result<PathBuf> {
        Ok(self.install_base().join("sdk"))
    }
    fn toolchain_exe(&self, _env: &dyn EnvSource) -> Result<PathBuf> {
        Ok(self.install_base().join(self.toolchain_binary_name()))
    }
    fn toolchain_binary_name(&self) -> &'static str {
        "dotnet"
    }
}
