use std::process::ExitCode;

use clap::Parser;
use stockpolicy::commands::base_commands::{CliArgs, Commands};
use stockpolicy::commands::completions_cmd::completions_command;
use stockpolicy::commands::policy_cmd::policy_command;
use stockpolicy::commands::simulate_cmd::simulate_command;
use stockpolicy::commands::simulate_n_cmd::simulate_n_command;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("stockpolicy=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Policy { .. } => policy_command(cmd),
        cmd @ Commands::Simulate { .. } => simulate_command(cmd),
        cmd @ Commands::SimulateN { .. } => simulate_n_command(cmd),
        cmd @ Commands::Completions { .. } => completions_command(cmd),
    }
}
