use crate::cli::Commands;
use crate::command_handlers::{current, list, use_version};
use anyhow::Result;
use coreswitch::{SwitchOptions, Switcher};

pub fn dispatch(cmd: Option<Commands>, switcher: &Switcher, opts: SwitchOptions) -> Result<()> {
    match cmd {
        Some(Commands::List) => list::list_installed(switcher).map(|_| ()),
        Some(Commands::Current) => current::show_current(switcher, opts),
        Some(Commands::Use { version }) => use_version::use_version(switcher, &version, opts),
        None => {
            if !list::list_installed(switcher)? {
                return Ok(());
            }
            current::show_current(switcher, opts)
        }
    }
}
