use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

/// Source of one demand value per simulated day.
pub trait DemandGenerator {
    fn next_demand(&mut self, avg_daily_demand: u32, demand_std: u32) -> u64;
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DemandModel {
    #[default]
    Uniform,
    Normal,
}

/// Integer demand drawn uniformly from
/// `[max(1, avg - 2*std), avg + 2*std]`, both ends inclusive.
///
/// A coarse stand-in for a real demand distribution.
pub struct UniformDemand<R: Rng> {
    rng: R,
}

impl<R: Rng> UniformDemand<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DemandGenerator for UniformDemand<R> {
    fn next_demand(&mut self, avg_daily_demand: u32, demand_std: u32) -> u64 {
        let (low, high) = uniform_bounds(avg_daily_demand, demand_std);
        if low >= high {
            return high;
        }
        self.rng.gen_range(low..=high)
    }
}

fn uniform_bounds(avg_daily_demand: u32, demand_std: u32) -> (u64, u64) {
    let avg = avg_daily_demand as u64;
    let spread = 2 * demand_std as u64;
    (avg.saturating_sub(spread).max(1), avg + spread)
}

/// Normally distributed demand, rounded to whole units and clamped at zero.
pub struct NormalDemand<R: Rng> {
    rng: R,
}

impl<R: Rng> NormalDemand<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DemandGenerator for NormalDemand<R> {
    fn next_demand(&mut self, avg_daily_demand: u32, demand_std: u32) -> u64 {
        let mean = avg_daily_demand as f64;
        let sample = match Normal::new(mean, demand_std as f64) {
            Ok(normal) => normal.sample(&mut self.rng),
            Err(_) => mean,
        };
        sample.round().max(0.0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn uniform_draws_stay_within_two_deviations() {
        let mut demand = UniformDemand::new(StdRng::seed_from_u64(7));
        for _ in 0..1_000 {
            let value = demand.next_demand(50, 10);
            assert!((30..=70).contains(&value), "got {value}");
        }
    }

    #[test]
    fn uniform_lower_bound_is_clamped_to_one() {
        let mut demand = UniformDemand::new(StdRng::seed_from_u64(11));
        let mut seen_one = false;
        for _ in 0..2_000 {
            let value = demand.next_demand(3, 10);
            assert!((1..=23).contains(&value), "got {value}");
            seen_one |= value == 1;
        }
        assert!(seen_one);
    }

    #[test]
    fn zero_spread_yields_the_average() {
        let mut uniform = UniformDemand::new(StdRng::seed_from_u64(1));
        let mut normal = NormalDemand::new(StdRng::seed_from_u64(1));
        for _ in 0..50 {
            assert_eq!(uniform.next_demand(42, 0), 42);
            assert_eq!(normal.next_demand(42, 0), 42);
        }
    }

    #[test]
    fn zero_average_without_spread_yields_zero() {
        let mut demand = UniformDemand::new(StdRng::seed_from_u64(3));
        assert_eq!(demand.next_demand(0, 0), 0);
    }

    #[test]
    fn normal_draws_below_zero_are_clamped() {
        let mut demand = NormalDemand::new(StdRng::seed_from_u64(5));
        let zeros = (0..1_000)
            .map(|_| demand.next_demand(2, 30))
            .filter(|value| *value == 0)
            .count();
        assert!(zeros > 300, "only {zeros} clamped draws");
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut first = UniformDemand::new(StdRng::seed_from_u64(99));
        let mut second = UniformDemand::new(StdRng::seed_from_u64(99));
        let a: Vec<u64> = (0..20).map(|_| first.next_demand(50, 10)).collect();
        let b: Vec<u64> = (0..20).map(|_| second.next_demand(50, 10)).collect();
        assert_eq!(a, b);
    }
}
