use crate::config::{RequestedVersion, SwitchOptions};
use crate::error::{Result, SwitchError};
use crate::events::EventSink;
use crate::installed;
use crate::locator;
use crate::platform::PlatformRoots;
use crate::resolver::{self, Origin, Resolution, ToolchainCommand, VersionQuery};
use crate::writer::{self, Written};
use std::path::{Path, PathBuf};

/// Everything a command needs, wired once in `main`.
pub struct Switcher<'a> {
    roots: PlatformRoots,
    cwd: PathBuf,
    toolchain: Box<dyn VersionQuery + 'a>,
    sink: &'a dyn EventSink,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SwitchOutcome {
    AlreadyActive { version: String },
    Written(Written),
}

impl<'a> Switcher<'a> {
    pub fn new(roots: PlatformRoots, cwd: PathBuf, sink: &'a dyn EventSink) -> Self {
        let toolchain = Box::new(ToolchainCommand::locate(&roots));
        Self { roots, cwd, toolchain, sink }
    }

    pub fn with_toolchain(mut self, toolchain: impl VersionQuery + 'a) -> Self {
        self.toolchain = Box::new(toolchain);
        self
    }

    pub fn installed(&self) -> Result<Vec<String>> {
        installed::list_installed(&self.roots, self.sink)
    }

    pub fn current(&self, opts: SwitchOptions) -> Resolution {
        resolver::resolve_current(&self.cwd, &self.roots.home, opts, self.toolchain.as_ref(), self.sink)
    }

    /// Map a request onto an installed version name.
    pub fn pick(&self, requested: &RequestedVersion, installed: &[String]) -> Result<String> {
        match requested {
            RequestedVersion::Latest => installed::latest(installed)
                .map(str::to_string)
                .ok_or_else(|| SwitchError::NotFound(self.roots.sdk_root.clone())),
            RequestedVersion::Exact(v) if installed::is_installed(installed, v) => Ok(v.clone()),
            RequestedVersion::Exact(v) => Err(SwitchError::NotInstalled { version: v.clone() }),
        }
    }

    /// Validate, skip if already active, otherwise write.
    pub fn switch_to(&self, requested: &RequestedVersion, opts: SwitchOptions) -> Result<SwitchOutcome> {
        let installed = self.installed()?;
        let version = self.pick(requested, &installed)?;

        let current = self.current(opts);
        if current.ok && current.version == version {
            if let Some(Origin::Pointer(active)) = &current.origin {
                if self.would_overwrite(active, opts)? {
                    return Ok(SwitchOutcome::AlreadyActive { version });
                }
            }
        }
        if !current.ok {
            tracing::debug!(failures = ?current.failures, "current version unknown, writing anyway");
        }

        let written = writer::write(&version, &self.cwd, &self.roots.home, opts, self.sink)?;
        Ok(SwitchOutcome::Written(written))
    }

    /// True when the writer would overwrite `active` in place, so an equal
    /// version there means nothing changes.
    fn would_overwrite(&self, active: &Path, opts: SwitchOptions) -> Result<bool> {
        let location = locator::find(&self.cwd, &self.roots.home, opts)?;
        let target = writer::plan_target(&location, opts, &self.cwd, &self.roots.home);
        Ok(!target.is_new_file && target.path == active)
    }
}
