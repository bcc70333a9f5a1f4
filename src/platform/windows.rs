use crate::error::Result;
use crate::platform::{require_var, EnvSource, PlatformOps, VENDOR_DIR};
use std::path::PathBuf;

pub static WINDOWS_PLATFORM: Windows = Windows;

pub struct Windows;

impl PlatformOps for Windows {
    fn name(&self) -> &'static str { "windows" }
    fn home_dir(&self, env: &dyn EnvSource) -> Result<PathBuf> { require_var(env, "USERPROFILE") }
    fn sdk_root(&self, env: &dyn EnvSource) -> Result<PathBuf> { Ok(require_var(env, "ProgramFiles")?.join(VENDOR_DIR).join("sdk")) }
    fn toolchain_exe(&self, env: &dyn EnvSource) -> Result<PathBuf> { Ok(require_var(env, "ProgramFiles")?.join(VENDOR_DIR).join(self.toolchain_binary_name())) }
    fn toolchain_binary_name(&self) -> &'static str { "dotnet.exe" }
}
