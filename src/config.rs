use crate::error::{Result, SwitchError};
use once_cell::sync::Lazy;
use regex::Regex;

pub const POINTER_FILE: &str = "global.json";
pub const LATEST: &str = "latest";

static VERSION_GRAMMAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+(-\S+)?$").expect("static regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Project tree rooted at the working directory.
    Local,
    /// User-wide, anchored at the home directory.
    Global,
}

impl Scope {
    pub fn from_global_flag(global: bool) -> Self {
        if global { Scope::Global } else { Scope::Local }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchOptions {
    pub scope: Scope,
    /// Anchor at the requested scope's root instead of falling back to home.
    pub force: bool,
}

impl SwitchOptions {
    pub fn new(global: bool, force: bool) -> Self {
        Self { scope: Scope::from_global_flag(global), force }
    }
}

impl Default for SwitchOptions {
    fn default() -> Self {
        Self { scope: Scope::Local, force: false }
    }
}

/// A user-supplied version as accepted on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestedVersion {
    Exact(String),
    Latest,
}

impl RequestedVersion {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed == LATEST {
            return Ok(RequestedVersion::Latest);
        }
        if VERSION_GRAMMAR.is_match(trimmed) {
            Ok(RequestedVersion::Exact(trimmed.to_string()))
        } else {
            Err(SwitchError::InvalidVersion(input.to_string()))
        }
    }
}
