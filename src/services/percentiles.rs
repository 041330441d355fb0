use crate::services::simulation_types::StockoutPercentiles;

/// Nearest-rank percentile of an ascending slice.
///
/// Out-of-range percentiles clamp to the first or last element; an empty
/// slice has no percentile.
pub fn value_sorted<T: Copy>(sorted_values: &[T], percentile: f64) -> Option<T> {
    let last = sorted_values.len().checked_sub(1)?;
    let index = if percentile <= 0.0 {
        0
    } else if percentile >= 100.0 {
        last
    } else {
        ((percentile / 100.0) * last as f64).round() as usize
    };
    sorted_values.get(index).copied()
}

impl StockoutPercentiles {
    pub fn from_sorted(sorted_counts: &[usize]) -> Self {
        let at = |percentile| value_sorted(sorted_counts, percentile).unwrap_or(0);
        Self {
            p0: at(0.0),
            p50: at(50.0),
            p85: at(85.0),
            p100: at(100.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slice_has_no_percentile() {
        let values: [usize; 0] = [];
        assert_eq!(value_sorted(&values, 50.0), None);
        assert_eq!(
            StockoutPercentiles::from_sorted(&values),
            StockoutPercentiles {
                p0: 0,
                p50: 0,
                p85: 0,
                p100: 0
            }
        );
    }

    #[test]
    fn out_of_range_percentiles_clamp() {
        let values = [3, 5, 9];
        assert_eq!(value_sorted(&values, -10.0), Some(3));
        assert_eq!(value_sorted(&values, 250.0), Some(9));
    }

    #[test]
    fn stockout_percentiles_round_to_nearest_rank() {
        // 21 values 0..=20: p50 -> index 10, p85 -> index 17
        let counts: Vec<usize> = (0..=20).collect();
        let percentiles = StockoutPercentiles::from_sorted(&counts);
        assert_eq!(percentiles.p0, 0);
        assert_eq!(percentiles.p50, 10);
        assert_eq!(percentiles.p85, 17);
        assert_eq!(percentiles.p100, 20);
    }
}
