use crate::config::{Scope, SwitchOptions, POINTER_FILE};
use crate::error::Result;
use crate::events::{Event, EventSink};
use crate::locator::{self, Location};
use crate::pointer;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteTarget {
    pub path: PathBuf,
    pub is_new_file: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub version: String,
    pub path: PathBuf,
    pub created: bool,
}

/// Choose where a new pointer goes given what the locator saw.
///
/// A fresh file at the scope root is used when nothing was found, or when
/// `force` is set and the found file sits on the wrong side of home for
/// the requested scope. Otherwise the found file is overwritten in place.
pub fn plan_target(location: &Location, opts: SwitchOptions, cwd: &Path, home: &Path) -> WriteTarget {
    let scope_mismatch = match opts.scope {
        Scope::Global => !location.stopped_at_home && opts.force,
        Scope::Local => location.stopped_at_home && opts.force,
    };
    match &location.file {
        Some(file) if location.found && !scope_mismatch => WriteTarget { path: file.clone(), is_new_file: false },
        _ => {
            let dir = locator::start_dir(opts.scope, cwd, home);
            WriteTarget { path: dir.join(POINTER_FILE), is_new_file: true }
        }
    }
}

pub fn write(version: &str, cwd: &Path, home: &Path, opts: SwitchOptions, sink: &dyn EventSink) -> Result<Written> {
    let location = locator::find(cwd, home, opts)?;
    let target = plan_target(&location, opts, cwd, home);
    pointer::write_version(&target.path, version)?;
    sink.record(&Event::PointerWritten {
        path: target.path.clone(),
        version: version.to_string(),
        created: target.is_new_file,
    });
    Ok(Written { version: version.to_string(), path: target.path, created: target.is_new_file })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::CapturingSink;

    fn loc(file: Option<&str>, stopped_at_home: bool) -> Location {
        Location {
            file: file.map(PathBuf::from),
            dir: PathBuf::from("/x"),
            stopped_at_home,
            found: file.is_some(),
        }
    }

    fn opts(scope: Scope, force: bool) -> SwitchOptions {
        SwitchOptions { scope, force }
    }

    const CWD: &str = "/work/proj";
    const HOME: &str = "/home/ada";

    fn plan(l: &Location, o: SwitchOptions) -> WriteTarget {
        plan_target(l, o, Path::new(CWD), Path::new(HOME))
    }

    #[test]
    fn nothing_found_creates_at_scope_root() {
        let t = plan(&loc(None, false), opts(Scope::Local, false));
        assert_eq!(t, WriteTarget { path: Path::new(CWD).join("global.json"), is_new_file: true });

        let t = plan(&loc(None, true), opts(Scope::Global, false));
        assert_eq!(t, WriteTarget { path: Path::new(HOME).join("global.json"), is_new_file: true });
    }

    #[test]
    fn found_file_is_reused_without_force() {
        for scope in [Scope::Local, Scope::Global] {
            for at_home in [false, true] {
                let t = plan(&loc(Some("/work/global.json"), at_home), opts(scope, false));
                assert_eq!(t.path, PathBuf::from("/work/global.json"));
                assert!(!t.is_new_file);
            }
        }
    }

    #[test]
    fn forced_global_ignores_file_outside_home() {
        let t = plan(&loc(Some("/work/global.json"), false), opts(Scope::Global, true));
        assert_eq!(t.path, Path::new(HOME).join("global.json"));
        assert!(t.is_new_file);
    }

    #[test]
    fn forced_global_reuses_home_file() {
        let t = plan(&loc(Some("/home/ada/global.json"), true), opts(Scope::Global, true));
        assert!(!t.is_new_file);
    }

    #[test]
    fn forced_local_ignores_home_file() {
        let t = plan(&loc(Some("/home/ada/global.json"), true), opts(Scope::Local, true));
        assert_eq!(t.path, Path::new(CWD).join("global.json"));
        assert!(t.is_new_file);
    }

    #[test]
    fn forced_local_reuses_ancestor_file() {
        let t = plan(&loc(Some("/work/global.json"), false), opts(Scope::Local, true));
        assert_eq!(t.path, PathBuf::from("/work/global.json"));
        assert!(!t.is_new_file);
    }

    #[test]
    fn write_reports_and_records() {
        let tmp = tempfile::TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        let home = root.join("home");
        let cwd = root.join("proj");
        std::fs::create_dir_all(&home).unwrap();
        std::fs::create_dir_all(&cwd).unwrap();
        let sink = CapturingSink::new();

        let w = write("6.0.100", &cwd, &home, opts(Scope::Local, false), &sink).unwrap();
        assert_eq!(w, Written { version: "6.0.100".into(), path: cwd.join("global.json"), created: true });
        assert!(sink.contains(|e| matches!(e, Event::PointerWritten { created: true, .. })));
    }

    #[test]
    fn write_into_missing_cwd_fails() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = write("6.0.100", &tmp.path().join("gone"), tmp.path(), opts(Scope::Local, false), &CapturingSink::new())
            .unwrap_err();
        assert!(matches!(err, crate::error::SwitchError::DirectoryNotFound(_)));
    }
}
