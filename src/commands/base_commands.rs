use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the economic order quantity and reorder point
    Policy {
        /// Path to the inventory config YAML (defaults are used when omitted)
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Simulate the reorder policy day by day against synthetic demand
    Simulate {
        /// Path to the inventory config YAML (defaults are used when omitted)
        #[arg(short, long)]
        config: Option<String>,
        /// Output file for the report and trajectory
        #[arg(short, long)]
        output: String,
        /// Simulation horizon in days
        #[arg(short, long)]
        days: Option<usize>,
        /// Stock on hand at the start of day 1
        #[arg(long)]
        initial_stock: Option<u64>,
        /// Seed for the demand random source
        #[arg(short, long)]
        seed: Option<u64>,
        /// Output file format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Run many independent simulations and summarise stockout days
    SimulateN {
        /// Path to the inventory config YAML (defaults are used when omitted)
        #[arg(short, long)]
        config: Option<String>,
        /// Output file for the batch report
        #[arg(short, long)]
        output: String,
        /// Number of simulation runs
        #[arg(short = 'n', long, default_value_t = 1000)]
        iterations: usize,
        /// Simulation horizon in days
        #[arg(short, long)]
        days: Option<usize>,
        /// Seed for the master random source
        #[arg(short, long)]
        seed: Option<u64>,
        /// Output file format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}
