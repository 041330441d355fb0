/// Mutable per-run state of the inventory engine.
///
/// At most one replenishment order is in flight at any time: an order is
/// outstanding while `on_order > 0`, and [`SimulationState::try_place_order`]
/// refuses to place another one until it has been delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationState {
    pub inventory: u64,
    pub on_order: u64,
    pub days_until_delivery: u32,
    pub stockout_count: usize,
}

impl SimulationState {
    pub fn new(initial_stock: u64) -> Self {
        Self {
            inventory: initial_stock,
            on_order: 0,
            days_until_delivery: 0,
            stockout_count: 0,
        }
    }

    pub fn has_outstanding_order(&self) -> bool {
        self.on_order > 0
    }

    /// Books the outstanding order into stock when its countdown reads 1.
    /// Returns the delivered quantity, 0 when nothing arrived.
    pub fn receive_due_delivery(&mut self) -> u64 {
        if self.days_until_delivery != 1 {
            return 0;
        }
        let delivered = self.on_order;
        self.inventory = self.inventory.saturating_add(delivered);
        self.on_order = 0;
        delivered
    }

    /// Serves `demand` in full or not at all. Unmet demand is lost and
    /// clears the shelf. Returns `true` on a stockout.
    pub fn fulfill(&mut self, demand: u64) -> bool {
        if self.inventory >= demand {
            self.inventory -= demand;
            false
        } else {
            self.stockout_count += 1;
            self.inventory = 0;
            true
        }
    }

    /// Places a replenishment order unless one is already outstanding.
    pub fn try_place_order(&mut self, quantity: u64, lead_time: u32) -> bool {
        if self.has_outstanding_order() {
            return false;
        }
        self.on_order = quantity;
        self.days_until_delivery = lead_time;
        true
    }

    pub fn advance_countdown(&mut self) {
        if self.days_until_delivery > 0 {
            self.days_until_delivery -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_order_is_refused_while_first_is_outstanding() {
        let mut state = SimulationState::new(0);

        assert!(state.try_place_order(100, 3));
        assert!(!state.try_place_order(250, 5));
        assert_eq!(state.on_order, 100);
        assert_eq!(state.days_until_delivery, 3);
    }

    #[test]
    fn delivery_arrives_only_when_countdown_reads_one() {
        let mut state = SimulationState::new(5);
        state.try_place_order(40, 2);

        assert_eq!(state.receive_due_delivery(), 0);
        state.advance_countdown();
        assert_eq!(state.receive_due_delivery(), 40);
        assert_eq!(state.inventory, 45);
        assert!(!state.has_outstanding_order());
    }

    #[test]
    fn oversized_delivery_saturates_stock() {
        let mut state = SimulationState::new(10);
        state.try_place_order(u64::MAX, 1);

        assert_eq!(state.receive_due_delivery(), u64::MAX);
        assert_eq!(state.inventory, u64::MAX);
    }

    #[test]
    fn shortfall_is_lost_and_counted() {
        let mut state = SimulationState::new(10);

        assert!(!state.fulfill(4));
        assert_eq!(state.inventory, 6);
        assert!(state.fulfill(7));
        assert_eq!(state.inventory, 0);
        assert_eq!(state.stockout_count, 1);
    }

    #[test]
    fn countdown_stops_at_zero() {
        let mut state = SimulationState::new(0);
        state.advance_countdown();
        assert_eq!(state.days_until_delivery, 0);
    }
}
