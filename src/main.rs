use clap::Parser;

use pine_guard::cli::{CheckArgs, Cli, Commands};
use pine_guard::commands::{run_check, run_init};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Some(Commands::Check(args)) => run_check(args, &cli),
        Some(Commands::Init(args)) => run_init(args),
        None => run_check(&CheckArgs::default(), &cli),
    };

    std::process::exit(exit_code);
}
