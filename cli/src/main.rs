mod commands;
mod report;
mod terminal;

use commands::{CommandLine, Commands, allocate, inspect};
use terminal::{logging, print};
use vlsm_common::config::Config;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        disable_input: commands.no_input,
        cursor_mask: commands.cursor_mask,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Allocate {
            network,
            sizes,
            output,
        } => {
            print::header("getting ready for allocation", cfg.quiet);
            allocate::allocate(network, sizes, output, &cfg)
        }
        Commands::Inspect { network } => {
            print::header("network details", cfg.quiet);
            inspect::inspect(&network, &cfg);
            Ok(())
        }
    }
}
