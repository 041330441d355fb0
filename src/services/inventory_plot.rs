use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryPlotError {
    #[error("inventory trajectory is empty")]
    EmptyTrajectory,
    #[error("failed to render inventory plot: {0}")]
    Render(String),
}

/// Draws the day-by-day inventory level with the reorder point as a
/// horizontal reference line.
pub fn write_inventory_plot_png(
    output_path: &str,
    inventory_levels: &[u64],
    reorder_point: f64,
) -> Result<(), InventoryPlotError> {
    if inventory_levels.is_empty() {
        return Err(InventoryPlotError::EmptyTrajectory);
    }

    let days = inventory_levels.len() as i64;
    let max_level = inventory_levels.iter().copied().max().unwrap_or(0) as f64;
    let max_y = (max_level.max(reorder_point) * 1.1).max(1.0);

    let root = BitMapBackend::new(output_path, (1200, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| InventoryPlotError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Inventory Levels Over Time", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..days.max(1), 0.0..max_y)
        .map_err(|e| InventoryPlotError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Day")
        .y_desc("Units in Stock")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .draw()
        .map_err(|e| InventoryPlotError::Render(e.to_string()))?;

    let line_color = RGBColor(30, 122, 204);
    chart
        .draw_series(LineSeries::new(
            inventory_levels
                .iter()
                .enumerate()
                .map(|(day, level)| (day as i64, *level as f64)),
            line_color.stroke_width(2),
        ))
        .map_err(|e| InventoryPlotError::Render(e.to_string()))?
        .label("Inventory Level")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_color));

    chart
        .draw_series(LineSeries::new(
            [(0, reorder_point), (days, reorder_point)],
            RED.stroke_width(1),
        ))
        .map_err(|e| InventoryPlotError::Render(e.to_string()))?
        .label("Reorder Point")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 18))
        .draw()
        .map_err(|e| InventoryPlotError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| InventoryPlotError::Render(e.to_string()))?;
    Ok(())
}
