use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, info, trace};

use crate::domain::simulation::{SimulationInput, SimulationResult};
use crate::domain::state::SimulationState;
use crate::services::config_yaml::{
    ConfigError, InventoryConfig, SimulationOverrides, load_config,
};
use crate::services::demand::{DemandGenerator, DemandModel, NormalDemand, UniformDemand};
use crate::services::inventory_plot::{InventoryPlotError, write_inventory_plot_png};
use crate::services::policy_calculator::calculate_policy;
use crate::services::simulation_types::{SimulationOutput, SimulationReport};
use crate::services::validation::{
    ValidationError, require_finite, require_horizon, require_non_negative,
};

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("invalid simulation parameters: {0}")]
    Validation(#[from] ValidationError),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to render inventory plot: {0}")]
    Plot(#[from] InventoryPlotError),
}

/// What happened on one simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOutcome {
    /// 1-based day index.
    pub day: usize,
    pub delivered: u64,
    pub demand: u64,
    pub stockout: bool,
    pub order_placed: bool,
    pub inventory: u64,
}

/// Day-stepped continuous-review reorder policy with a fixed lead time.
///
/// Each day runs, in order: delivery check, demand draw, fulfillment,
/// reorder decision, record. Changing that order changes stockout counts.
pub struct SimulationEngine<G: DemandGenerator> {
    input: SimulationInput,
    order_units: u64,
    generator: G,
    state: SimulationState,
    inventory_levels: Vec<u64>,
}

impl<G: DemandGenerator> SimulationEngine<G> {
    pub fn new(input: SimulationInput, generator: G) -> Result<Self, ValidationError> {
        validate_input(&input)?;
        let order_units = input.order_quantity.round() as u64;
        Ok(Self {
            state: SimulationState::new(input.initial_stock),
            inventory_levels: Vec::with_capacity(input.days),
            order_units,
            generator,
            input,
        })
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        self.inventory_levels.len() >= self.input.days
    }

    /// Advances one day. Returns `None` once the horizon is exhausted.
    pub fn step(&mut self) -> Option<DayOutcome> {
        if self.is_finished() {
            return None;
        }
        let day = self.inventory_levels.len() + 1;

        let delivered = self.state.receive_due_delivery();
        if delivered > 0 {
            debug!(day, delivered, "replenishment order delivered");
        }

        let demand = self
            .generator
            .next_demand(self.input.avg_daily_demand, self.input.demand_std);
        let stockout = self.state.fulfill(demand);

        let at_reorder_point = self.state.inventory as f64 <= self.input.reorder_point;
        let order_placed = at_reorder_point
            && self
                .state
                .try_place_order(self.order_units, self.input.lead_time);
        if order_placed {
            debug!(
                day,
                quantity = self.order_units,
                lead_time = self.input.lead_time,
                "replenishment order placed"
            );
        } else {
            self.state.advance_countdown();
        }

        let inventory = self.state.inventory;
        self.inventory_levels.push(inventory);
        trace!(day, demand, stockout, inventory, "day simulated");

        Some(DayOutcome {
            day,
            delivered,
            demand,
            stockout,
            order_placed,
            inventory,
        })
    }

    pub fn run(mut self) -> SimulationResult {
        while self.step().is_some() {}
        SimulationResult {
            inventory_levels: self.inventory_levels,
            stockout_count: self.state.stockout_count,
        }
    }
}

fn validate_input(input: &SimulationInput) -> Result<(), ValidationError> {
    require_horizon(input.days)?;
    if input.lead_time == 0 {
        return Err(ValidationError::NonPositiveLeadTime(0.0));
    }
    require_finite("reorder point", input.reorder_point)?;
    require_non_negative("order quantity", input.order_quantity)?;
    Ok(())
}

/// Runs with the default uniform demand model, seeded from `rng_seed` or
/// from entropy when no seed is given.
pub fn run_simulation(input: &SimulationInput) -> Result<SimulationResult, ValidationError> {
    run_simulation_with_model(input, DemandModel::Uniform)
}

pub fn run_simulation_with_model(
    input: &SimulationInput,
    model: DemandModel,
) -> Result<SimulationResult, ValidationError> {
    let mut rng = match input.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    match model {
        DemandModel::Uniform => run_simulation_with_generator(input, UniformDemand::new(&mut rng)),
        DemandModel::Normal => run_simulation_with_generator(input, NormalDemand::new(&mut rng)),
    }
}

pub fn run_simulation_with_generator<G: DemandGenerator>(
    input: &SimulationInput,
    generator: G,
) -> Result<SimulationResult, ValidationError> {
    let engine = SimulationEngine::new(input.clone(), generator)?;
    info!(
        days = input.days,
        initial_stock = input.initial_stock,
        reorder_point = input.reorder_point,
        order_quantity = input.order_quantity,
        "starting inventory simulation"
    );
    let result = engine.run();
    info!(stockouts = result.stockout_count, "inventory simulation finished");
    Ok(result)
}

/// Loads the configuration, derives the policy, runs one simulation and
/// renders its trajectory to `plot_path`.
pub fn simulate_from_config_file(
    config_path: Option<&str>,
    overrides: &SimulationOverrides,
    plot_path: &str,
) -> Result<SimulationOutput, SimulationError> {
    let config = load_config(config_path)?.with_overrides(overrides);
    config.validate()?;

    let mut output = simulate_config(&config)?;
    output.report.data_source = config_path.map(data_source_name).unwrap_or_default();
    write_inventory_plot_png(plot_path, &output.inventory_levels, output.report.reorder_point)?;
    Ok(output)
}

pub fn simulate_config(config: &InventoryConfig) -> Result<SimulationOutput, SimulationError> {
    let policy = calculate_policy(&config.policy)?;
    let input = simulation_input(config, policy.order_quantity, policy.reorder_point);
    let result = run_simulation_with_model(&input, config.simulation.demand_model)?;

    let report = SimulationReport {
        data_source: String::new(),
        seed: input.rng_seed,
        demand_model: config.simulation.demand_model,
        days: input.days,
        initial_stock: input.initial_stock,
        order_quantity: policy.order_quantity,
        reorder_point: policy.reorder_point,
        stockout_count: result.stockout_count,
        stockout_rate: result.stockout_rate() * 100.0,
        service_level_achieved: (1.0 - result.stockout_rate()) * 100.0,
        average_inventory: result.average_inventory(),
        min_inventory: result.min_inventory(),
    };

    Ok(SimulationOutput {
        report,
        inventory_levels: result.inventory_levels,
    })
}

pub(crate) fn simulation_input(
    config: &InventoryConfig,
    order_quantity: f64,
    reorder_point: f64,
) -> SimulationInput {
    SimulationInput {
        days: config.simulation.days,
        initial_stock: config.simulation.initial_stock,
        reorder_point,
        order_quantity,
        lead_time: config.policy.lead_time_days,
        avg_daily_demand: config.policy.avg_daily_demand,
        demand_std: config.policy.demand_std,
        rng_seed: config.simulation.seed,
    }
}

pub(crate) fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}
