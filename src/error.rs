use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwitchError {
    /// Only Windows, Linux and macOS are known.
    #[error("unsupported platform '{0}'")]
    UnsupportedPlatform(String),

    #[error("environment variable {0} is not set")]
    MissingEnvironment(&'static str),

    /// SDK root (or another required path) is absent or not a directory.
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    #[error("directory {} does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("decoding {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} has no sdk.version entry", .0.display())]
    MissingVersion(PathBuf),

    #[error("no global.json found")]
    PointerNotFound,

    #[error("could not run {}: {source}", .program.display())]
    ProcessLaunch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} --version produced no output", .0.display())]
    EmptyOutput(PathBuf),

    #[error("writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("sdk {version} is not installed")]
    NotInstalled { version: String },

    #[error("'{0}' is not a valid sdk version (expected x.y.z[-suffix] or 'latest')")]
    InvalidVersion(String),
}

pub type Result<T> = std::result::Result<T, SwitchError>;
