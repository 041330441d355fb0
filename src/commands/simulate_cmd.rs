use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::{format_simulation_report, serialize_output};
use crate::services::config_yaml::SimulationOverrides;
use crate::services::simulation::simulate_from_config_file;

pub fn simulate_command(cmd: Commands) -> ExitCode {
    if let Commands::Simulate {
        config,
        output,
        days,
        initial_stock,
        seed,
        format,
    } = cmd
    {
        let overrides = SimulationOverrides {
            days,
            initial_stock,
            seed,
        };
        let plot_path = format!("{output}.png");
        let simulation = match simulate_from_config_file(config.as_deref(), &overrides, &plot_path)
        {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Failed to simulate inventory: {e}");
                return ExitCode::FAILURE;
            }
        };

        let contents = match serialize_output(&simulation, format) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize simulation output: {e}");
                return ExitCode::FAILURE;
            }
        };

        if let Err(e) = std::fs::write(&output, contents) {
            eprintln!("Failed to write simulation output: {e}");
            return ExitCode::FAILURE;
        }
        println!("{}", format_simulation_report(&simulation.report));
        println!("Simulation result written to {output}");
        println!("Inventory plot written to {plot_path}");
    }
    ExitCode::SUCCESS
}
