use serde::Serialize;

use crate::services::demand::DemandModel;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub data_source: String,
    pub seed: Option<u64>,
    pub demand_model: DemandModel,
    pub days: usize,
    pub initial_stock: u64,
    pub order_quantity: f64,
    pub reorder_point: f64,
    pub stockout_count: usize,
    pub stockout_rate: f64,
    pub service_level_achieved: f64,
    pub average_inventory: f64,
    pub min_inventory: u64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SimulationOutput {
    pub report: SimulationReport,
    pub inventory_levels: Vec<u64>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockoutPercentiles {
    pub p0: usize,
    pub p50: usize,
    pub p85: usize,
    pub p100: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub data_source: String,
    pub seed: Option<u64>,
    pub demand_model: DemandModel,
    pub iterations: usize,
    pub days: usize,
    pub order_quantity: f64,
    pub reorder_point: f64,
    pub stockout_days: StockoutPercentiles,
    pub mean_stockout_rate: f64,
    pub mean_average_inventory: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BatchOutput {
    pub report: BatchReport,
    /// Stockout days of every run, sorted ascending.
    pub stockout_counts: Vec<usize>,
}
