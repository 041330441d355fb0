/// Static inputs of the reorder policy, supplied once per run.
///
/// The first three fields feed the Economic Order Quantity, the rest feed
/// the reorder point with safety stock.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyParameters {
    pub annual_demand: f64,
    pub order_cost: f64,
    pub holding_cost: f64,
    pub avg_daily_demand: u32,
    pub lead_time_days: u32,
    pub service_level: f64,
    pub demand_std: u32,
}

impl Default for PolicyParameters {
    fn default() -> Self {
        Self {
            annual_demand: 10_000.0,
            order_cost: 100.0,
            holding_cost: 5.0,
            avg_daily_demand: 50,
            lead_time_days: 7,
            service_level: 0.95,
            demand_std: 10,
        }
    }
}

/// Derived order quantity and reorder point. Both are non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Policy {
    pub order_quantity: f64,
    pub reorder_point: f64,
}
