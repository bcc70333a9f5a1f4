use anyhow::Result;
use coreswitch::{SwitchError, Switcher};

/// Prints installed versions. `Ok(false)` means no SDK root exists.
pub fn list_installed(switcher: &Switcher) -> Result<bool> {
    match switcher.installed() {
        Ok(versions) => {
            for v in versions {
                println!("v{v}");
            }
            Ok(true)
        }
        Err(SwitchError::NotFound(_)) => {
            println!("Could not find any installed sdks.");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
