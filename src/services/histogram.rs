use std::collections::BTreeMap;

use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("failed to render histogram: {0}")]
    Render(String),
}

/// Renders the distribution of stockout days across batch runs. Empty
/// input writes nothing.
pub fn write_stockout_histogram_png(
    output_path: &str,
    stockout_counts: &[usize],
) -> Result<(), HistogramError> {
    let (Some(min_value), Some(max_value)) = (
        stockout_counts.iter().copied().min(),
        stockout_counts.iter().copied().max(),
    ) else {
        return Ok(());
    };

    let bin_width = bin_width(min_value, max_value, stockout_counts.len());
    let mut counts: BTreeMap<i32, i32> = BTreeMap::new();
    for value in stockout_counts {
        *counts.entry((value / bin_width) as i32).or_insert(0) += 1;
    }
    let max_count = counts.values().copied().max().unwrap_or(1);
    let first_bucket = (min_value / bin_width) as i32;
    let last_bucket = (max_value / bin_width) as i32 + 1;

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Stockout Days per Run", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(first_bucket..last_bucket, 0..(max_count + 1))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Stockout days")
        .y_desc("Runs")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|bucket| format!("{}", *bucket as usize * bin_width))
        .draw()
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let bar_style = ShapeStyle::from(&RGBColor(30, 122, 204)).filled();
    chart
        .draw_series(counts.iter().map(|(bucket, count)| {
            Rectangle::new([(*bucket, 0), (*bucket + 1, *count)], bar_style)
        }))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| HistogramError::Render(e.to_string()))?;
    Ok(())
}

// Square-root rule over the observed range, never narrower than one day.
fn bin_width(min_value: usize, max_value: usize, samples: usize) -> usize {
    let range = (max_value - min_value) as f64;
    let width = (range / (samples as f64).sqrt()).ceil() as usize;
    width.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bin_width_is_at_least_one_day() {
        assert_eq!(bin_width(4, 4, 100), 1);
        assert_eq!(bin_width(0, 5, 100), 1);
    }

    #[test]
    fn bin_width_follows_square_root_rule() {
        // range 90 over sqrt(9) = 3 samples -> 30
        assert_eq!(bin_width(10, 100, 9), 30);
    }

    #[test]
    fn writes_png_for_counts() {
        let output_file = assert_fs::NamedTempFile::new("stockouts.png").unwrap();
        write_stockout_histogram_png(output_file.path().to_str().unwrap(), &[0, 1, 1, 2, 5, 9])
            .unwrap();
        assert!(std::fs::metadata(output_file.path()).unwrap().len() > 0);
    }

    #[test]
    fn empty_counts_write_nothing() {
        let output_file = assert_fs::NamedTempFile::new("none.png").unwrap();
        write_stockout_histogram_png(output_file.path().to_str().unwrap(), &[]).unwrap();
        assert!(!output_file.path().exists());
    }
}
