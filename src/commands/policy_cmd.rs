use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_policy;
use crate::services::config_yaml::load_config;
use crate::services::policy_calculator::calculate_policy;

pub fn policy_command(cmd: Commands) -> ExitCode {
    if let Commands::Policy { config } = cmd {
        let inventory_config = match load_config(config.as_deref()) {
            Ok(inventory_config) => inventory_config,
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                return ExitCode::FAILURE;
            }
        };
        match calculate_policy(&inventory_config.policy) {
            Ok(policy) => println!("{}", format_policy(&policy)),
            Err(e) => {
                eprintln!("Failed to compute policy: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
