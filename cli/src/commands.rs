pub mod demo;

use clap::{ArgAction, Parser, Subcommand};
use lotkeeper_core::scenario::DEFAULT_CAPACITY;

#[derive(Parser)]
#[command(name = "lotkeeper")]
#[command(about = "A fixed-capacity parking lot manager.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the startup banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Less output. Once hides headers, twice also hides log lines
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the reference parking scenario
    #[command(alias = "d")]
    Demo {
        /// Number of slots in the lot
        #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
        capacity: usize,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
