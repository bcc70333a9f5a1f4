//! CoreSwitch: find the active .NET SDK for a directory and switch it by
//! writing `global.json`.

pub mod config;
pub mod error;
pub mod events;
pub mod installed;
pub mod locator;
pub mod platform;
pub mod pointer;
pub mod resolver;
pub mod switcher;
pub mod writer;

pub use config::{RequestedVersion, Scope, SwitchOptions};
pub use error::SwitchError;
pub use platform::PlatformRoots;
pub use switcher::{SwitchOutcome, Switcher};
