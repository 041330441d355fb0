use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::{format_batch_report, serialize_output};
use crate::services::batch_simulation::simulate_batch_from_config_file;
use crate::services::config_yaml::SimulationOverrides;

pub fn simulate_n_command(cmd: Commands) -> ExitCode {
    if let Commands::SimulateN {
        config,
        output,
        iterations,
        days,
        seed,
        format,
    } = cmd
    {
        let overrides = SimulationOverrides {
            days,
            initial_stock: None,
            seed,
        };
        let histogram_path = format!("{output}.png");
        let batch = match simulate_batch_from_config_file(
            config.as_deref(),
            &overrides,
            iterations,
            &histogram_path,
        ) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Failed to run batch simulation: {e}");
                return ExitCode::FAILURE;
            }
        };

        let contents = match serialize_output(&batch, format) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize batch output: {e}");
                return ExitCode::FAILURE;
            }
        };

        if let Err(e) = std::fs::write(&output, contents) {
            eprintln!("Failed to write batch output: {e}");
            return ExitCode::FAILURE;
        }
        println!("{}", format_batch_report(&batch.report));
        println!("Batch result for {iterations} runs written to {output}");
        println!("Stockout histogram written to {histogram_path}");
    }
    ExitCode::SUCCESS
}
