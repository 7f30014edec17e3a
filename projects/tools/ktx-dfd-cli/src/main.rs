#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
#[cfg(test)]
mod test_prelude;
mod util;
use argh::FromArgs;
use core::error::Error;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs, Debug)]
/// Inspect, end-swap and patch the data format descriptors of KTX2 files
struct TopLevel {
    /// log debug output; RUST_LOG takes precedence when set
    #[argh(switch, short = 'v')]
    verbose: bool,

    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Info(commands::info::InfoCmd),
    Endswap(commands::endswap::EndswapCmd),
    Patch(commands::patch::PatchCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: TopLevel = argh::from_env();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Info(cmd) => {
            commands::info::handle_info_command(cmd)?;
        }
        Commands::Endswap(cmd) => {
            commands::endswap::handle_endswap_command(cmd)?;
        }
        Commands::Patch(cmd) => {
            commands::patch::handle_patch_command(cmd)?;
        }
    }

    Ok(())
}

/// Logs to stderr, filtered by `RUST_LOG` or else by the verbosity switch.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
