use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    version,
    name = "coreswitch",
    about = "CoreSwitch: show installed .NET SDKs and switch the active one via global.json"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the user-wide global.json in the home directory
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Anchor at the scope root: no fallback to home, create a new file if the
    /// nearest one belongs to the other scope
    #[arg(short, long, global = true)]
    pub force: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List installed SDK versions
    List,
    /// Show the active SDK version and where it comes from
    Current,
    /// Switch to an installed SDK version.
    /// Examples:
    ///   coreswitch use 6.0.100            # nearest global.json, or ./global.json
    ///   coreswitch use latest --global    # ~/global.json
    ///   coreswitch use 7.0.400 --force    # always ./global.json
    Use {
        /// x.y.z[-suffix] or 'latest'
        #[arg(value_name = "VERSION")]
        version: String,
    },
}
