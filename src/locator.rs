//! Upward search for `global.json`.
//!
//! The walk starts at the working directory (local scope) or the home
//! directory (global scope) and checks one path per level. What happens
//! when the filesystem root is reached depends on scope and `force`:
//!
//! * global, not forced: the walk ends at home, `found` reflects home.
//! * local, or forced: the walk ends at the root with `found == false`.
//!
//! Nothing is cached between calls.

use crate::config::{Scope, SwitchOptions, POINTER_FILE};
use crate::error::{Result, SwitchError};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Path of the pointer file when one was found.
    pub file: Option<PathBuf>,
    /// Directory the walk ended in.
    pub dir: PathBuf,
    pub stopped_at_home: bool,
    pub found: bool,
}

pub fn start_dir<'a>(scope: Scope, cwd: &'a Path, home: &'a Path) -> &'a Path {
    match scope {
        Scope::Local => cwd,
        Scope::Global => home,
    }
}

pub fn find(cwd: &Path, home: &Path, opts: SwitchOptions) -> Result<Location> {
    let start = start_dir(opts.scope, cwd, home);
    if !start.is_dir() {
        return Err(SwitchError::DirectoryNotFound(start.to_path_buf()));
    }

    let mut dir = start.to_path_buf();
    let found = loop {
        if dir.join(POINTER_FILE).is_file() {
            break true;
        }
        match dir.parent().map(Path::to_path_buf) {
            Some(parent) => dir = parent,
            None if opts.scope == Scope::Global && !opts.force => {
                dir = home.to_path_buf();
                break dir.join(POINTER_FILE).is_file();
            }
            None => break false,
        }
    };

    let stopped_at_home = same_dir(&dir, home);
    Ok(Location {
        file: found.then(|| dir.join(POINTER_FILE)),
        dir,
        stopped_at_home,
        found,
    })
}

fn same_dir(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
