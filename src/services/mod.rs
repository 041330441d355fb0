pub mod batch_simulation;
pub mod config_yaml;
pub mod demand;
pub mod histogram;
pub mod inventory_plot;
pub mod percentiles;
pub mod policy_calculator;
pub mod probit;
pub mod simulation;
pub mod simulation_types;
pub mod validation;
