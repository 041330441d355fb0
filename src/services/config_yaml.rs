use std::io;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::policy::PolicyParameters;
use crate::services::demand::DemandModel;
use crate::services::validation::{ValidationError, require_horizon};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// Run settings that sit next to the policy parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSettings {
    pub days: usize,
    pub initial_stock: u64,
    pub seed: Option<u64>,
    pub demand_model: DemandModel,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            days: 365,
            initial_stock: 500,
            seed: None,
            demand_model: DemandModel::Uniform,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryConfig {
    pub policy: PolicyParameters,
    pub simulation: SimulationSettings,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationOverrides {
    pub days: Option<usize>,
    pub initial_stock: Option<u64>,
    pub seed: Option<u64>,
}

impl InventoryConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.policy.validate()?;
        require_horizon(self.simulation.days)?;
        Ok(())
    }

    pub fn with_overrides(mut self, overrides: &SimulationOverrides) -> Self {
        if let Some(days) = overrides.days {
            self.simulation.days = days;
        }
        if let Some(initial_stock) = overrides.initial_stock {
            self.simulation.initial_stock = initial_stock;
        }
        if overrides.seed.is_some() {
            self.simulation.seed = overrides.seed;
        }
        self
    }
}

#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct ConfigRecord {
    policy: PolicyRecord,
    simulation: SimulationRecord,
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PolicyRecord {
    annual_demand: f64,
    order_cost: f64,
    holding_cost: f64,
    avg_daily_demand: u32,
    lead_time_days: u32,
    service_level: f64,
    demand_std: u32,
}

impl Default for PolicyRecord {
    fn default() -> Self {
        let defaults = PolicyParameters::default();
        Self {
            annual_demand: defaults.annual_demand,
            order_cost: defaults.order_cost,
            holding_cost: defaults.holding_cost,
            avg_daily_demand: defaults.avg_daily_demand,
            lead_time_days: defaults.lead_time_days,
            service_level: defaults.service_level,
            demand_std: defaults.demand_std,
        }
    }
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SimulationRecord {
    days: usize,
    initial_stock: u64,
    seed: Option<u64>,
    demand_model: DemandModel,
}

impl Default for SimulationRecord {
    fn default() -> Self {
        let defaults = SimulationSettings::default();
        Self {
            days: defaults.days,
            initial_stock: defaults.initial_stock,
            seed: defaults.seed,
            demand_model: defaults.demand_model,
        }
    }
}

/// Reads the config at `path`, or the built-in defaults when no path is
/// given. The result is validated either way.
pub fn load_config(path: Option<&str>) -> Result<InventoryConfig, ConfigError> {
    match path {
        Some(path) => load_config_from_yaml_file(path),
        None => {
            let config = InventoryConfig::default();
            config.validate()?;
            Ok(config)
        }
    }
}

pub fn load_config_from_yaml_file(path: &str) -> Result<InventoryConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_config_from_yaml_str(&contents)
}

pub fn deserialize_config_from_yaml_str(input: &str) -> Result<InventoryConfig, ConfigError> {
    // An empty document means "all defaults".
    let record: ConfigRecord = if input.trim().is_empty() {
        ConfigRecord::default()
    } else {
        serde_yaml::from_str(input)?
    };

    let config = InventoryConfig {
        policy: PolicyParameters {
            annual_demand: record.policy.annual_demand,
            order_cost: record.policy.order_cost,
            holding_cost: record.policy.holding_cost,
            avg_daily_demand: record.policy.avg_daily_demand,
            lead_time_days: record.policy.lead_time_days,
            service_level: record.policy.service_level,
            demand_std: record.policy.demand_std,
        },
        simulation: SimulationSettings {
            days: record.simulation.days,
            initial_stock: record.simulation.initial_stock,
            seed: record.simulation.seed,
            demand_model: record.simulation.demand_model,
        },
    };
    config.validate()?;
    Ok(config)
}
