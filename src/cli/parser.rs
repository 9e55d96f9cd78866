use clap::{Parser, Subcommand};

/// Command-line interface definition for rraincast
/// CLI application to chart the next two hours of rain
#[derive(Parser)]
#[command(
    name = "rraincast",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render a two-hour rain forecast as an ASCII timeline chart",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a forecast read from a file or standard input
    Show {
        /// Forecast file, one `<code>|<HH:MM>` line per sample ("-" = stdin)
        #[arg(long, short, value_name = "FILE", default_value = "-")]
        file: String,

        /// Location label shown in the header (overrides the configuration)
        #[arg(long, short)]
        label: Option<String>,

        /// Fail when the input had malformed, missing or extra lines
        #[arg(long)]
        strict: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
