use crate::domain::simulation::SimulationInput;
use crate::services::demand::DemandGenerator;

/// Replays a fixed demand sequence, cycling when it runs out.
pub struct ScriptedDemand {
    values: Vec<u64>,
    position: usize,
}

impl ScriptedDemand {
    pub fn new(values: Vec<u64>) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    pub fn constant(value: u64) -> Self {
        Self::new(vec![value])
    }
}

impl DemandGenerator for ScriptedDemand {
    fn next_demand(&mut self, _avg_daily_demand: u32, _demand_std: u32) -> u64 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

/// Engine input with an average demand of 50 ± 10 and no seed.
pub fn build_input(
    days: usize,
    initial_stock: u64,
    reorder_point: f64,
    order_quantity: f64,
    lead_time: u32,
) -> SimulationInput {
    SimulationInput {
        days,
        initial_stock,
        reorder_point,
        order_quantity,
        lead_time,
        avg_daily_demand: 50,
        demand_std: 10,
        rng_seed: None,
    }
}
