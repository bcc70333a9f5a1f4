use anyhow::Result;
use coreswitch::resolver::Origin;
use coreswitch::{SwitchOptions, Switcher};

pub fn show_current(switcher: &Switcher, opts: SwitchOptions) -> Result<()> {
    let current = switcher.current(opts);
    if !current.ok {
        let reasons: Vec<String> = current.failures.iter().map(ToString::to_string).collect();
        anyhow::bail!("could not determine active sdk version ({})", reasons.join("; "));
    }
    let scope = if current.is_global { "global" } else { "local" };
    match &current.origin {
        Some(Origin::Pointer(path)) => {
            println!("Selected version: {} ({scope}, {})", current.version, path.display())
        }
        Some(Origin::Toolchain(program)) => {
            println!("Selected version: {} ({scope}, reported by {})", current.version, program.display())
        }
        None => println!("Selected version: {}", current.version),
    }
    Ok(())
}
