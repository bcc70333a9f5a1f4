use anyhow::{Context, Result};
use coreswitch::{RequestedVersion, SwitchOptions, SwitchOutcome, Switcher};

pub fn use_version(switcher: &Switcher, input: &str, opts: SwitchOptions) -> Result<()> {
    let requested = RequestedVersion::parse(input)?;
    let outcome = switcher
        .switch_to(&requested, opts)
        .with_context(|| format!("switching sdk to {input}"))?;
    match outcome {
        SwitchOutcome::AlreadyActive { version } => println!("Already using {version}"),
        SwitchOutcome::Written(w) => {
            let verb = if w.created { "Created" } else { "Updated" };
            println!("{verb} {} -> {}", w.path.display(), w.version);
        }
    }
    Ok(())
}
