use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use thiserror::Error;
use tracing::info;

use crate::services::config_yaml::{InventoryConfig, SimulationOverrides, load_config};
use crate::services::histogram::{HistogramError, write_stockout_histogram_png};
use crate::services::policy_calculator::calculate_policy;
use crate::services::simulation::{
    SimulationError, data_source_name, run_simulation_with_model, simulation_input,
};
use crate::services::simulation_types::{BatchOutput, BatchReport, StockoutPercentiles};

#[derive(Error, Debug)]
pub enum BatchSimulationError {
    #[error("iterations must be greater than zero")]
    InvalidIterations,
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error("failed to render histogram: {0}")]
    Histogram(#[from] HistogramError),
}

pub fn simulate_batch_from_config_file(
    config_path: Option<&str>,
    overrides: &SimulationOverrides,
    iterations: usize,
    histogram_path: &str,
) -> Result<BatchOutput, BatchSimulationError> {
    let config = load_config(config_path)
        .map_err(SimulationError::from)?
        .with_overrides(overrides);
    config.validate().map_err(SimulationError::from)?;

    let mut output = run_batch(&config, iterations)?;
    output.report.data_source = config_path.map(data_source_name).unwrap_or_default();
    write_stockout_histogram_png(histogram_path, &output.stockout_counts)?;
    Ok(output)
}

/// Seeds the master source from the configured seed, or from entropy.
pub fn run_batch(
    config: &InventoryConfig,
    iterations: usize,
) -> Result<BatchOutput, BatchSimulationError> {
    let mut master = match config.simulation.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    run_batch_with_rng(config, iterations, &mut master)
}

/// Runs `iterations` independent simulations. Each run owns a fresh
/// random source seeded from `master`, so runs never share state.
pub fn run_batch_with_rng<R: RngCore + ?Sized>(
    config: &InventoryConfig,
    iterations: usize,
    master: &mut R,
) -> Result<BatchOutput, BatchSimulationError> {
    if iterations == 0 {
        return Err(BatchSimulationError::InvalidIterations);
    }
    let policy = calculate_policy(&config.policy).map_err(SimulationError::from)?;
    let mut input = simulation_input(config, policy.order_quantity, policy.reorder_point);

    info!(iterations, days = input.days, "starting batch simulation");
    let mut stockout_counts = Vec::with_capacity(iterations);
    let mut stockout_rate_sum = 0.0;
    let mut average_inventory_sum = 0.0;
    for _ in 0..iterations {
        input.rng_seed = Some(master.next_u64());
        let result = run_simulation_with_model(&input, config.simulation.demand_model)
            .map_err(SimulationError::from)?;
        stockout_rate_sum += result.stockout_rate();
        average_inventory_sum += result.average_inventory();
        stockout_counts.push(result.stockout_count);
    }
    stockout_counts.sort_unstable();

    let report = BatchReport {
        data_source: String::new(),
        seed: config.simulation.seed,
        demand_model: config.simulation.demand_model,
        iterations,
        days: input.days,
        order_quantity: policy.order_quantity,
        reorder_point: policy.reorder_point,
        stockout_days: StockoutPercentiles::from_sorted(&stockout_counts),
        mean_stockout_rate: stockout_rate_sum / iterations as f64 * 100.0,
        mean_average_inventory: average_inventory_sum / iterations as f64,
    };

    Ok(BatchOutput {
        report,
        stockout_counts,
    })
}
