mod commands;
mod terminal;

use commands::{CommandLine, Commands, demo};
use lotkeeper_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    logging::init_logging(&cfg)?;
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Demo { capacity } => {
            print::header("running reference scenario", cfg.quiet);
            demo::demo(capacity, &cfg)
        }
    }
}
