use serde::Serialize;

/// Everything the engine needs for one run. Values are validated by the
/// engine constructor before the first day is simulated.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationInput {
    pub days: usize,
    pub initial_stock: u64,
    pub reorder_point: f64,
    pub order_quantity: f64,
    pub lead_time: u32,
    pub avg_daily_demand: u32,
    pub demand_std: u32,
    pub rng_seed: Option<u64>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    /// On-hand stock at the end of each day, one entry per simulated day.
    pub inventory_levels: Vec<u64>,
    pub stockout_count: usize,
}

impl SimulationResult {
    pub fn average_inventory(&self) -> f64 {
        if self.inventory_levels.is_empty() {
            return 0.0;
        }
        let total: f64 = self.inventory_levels.iter().map(|level| *level as f64).sum();
        total / self.inventory_levels.len() as f64
    }

    pub fn min_inventory(&self) -> u64 {
        self.inventory_levels.iter().copied().min().unwrap_or(0)
    }

    /// Share of days with a stockout, in `[0, 1]`.
    pub fn stockout_rate(&self) -> f64 {
        if self.inventory_levels.is_empty() {
            return 0.0;
        }
        self.stockout_count as f64 / self.inventory_levels.len() as f64
    }
}
