use serde::Serialize;
use thiserror::Error;

use crate::commands::base_commands::OutputFormat;
use crate::domain::policy::Policy;
use crate::services::simulation_types::{BatchReport, SimulationReport};

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to serialize yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize json: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn serialize_output<T: Serialize>(
    value: &T,
    format: OutputFormat,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
    }
}

pub fn format_policy(policy: &Policy) -> String {
    [
        format!("Economic Order Quantity (EOQ): {:.0} units", policy.order_quantity),
        format!("Reorder Point with Safety Stock: {:.0} units", policy.reorder_point),
    ]
    .join("\n")
}

pub fn format_simulation_report(report: &SimulationReport) -> String {
    let mut lines = Vec::new();
    lines.push("Simulation Report".to_string());
    lines.push(format!("Data source: {}", data_source_label(&report.data_source)));
    lines.push(format!("Seed: {}", seed_label(report.seed)));
    lines.push(format!("Days: {}", report.days));
    lines.push(format!("Initial stock: {} units", report.initial_stock));
    lines.push(format!("Order quantity: {:.0} units", report.order_quantity));
    lines.push(format!("Reorder point: {:.0} units", report.reorder_point));
    lines.push(String::new());
    lines.push(format!(
        "Stockouts occurred on {} days ({:.1}% of time)",
        report.stockout_count, report.stockout_rate
    ));
    lines.push(format!("Average inventory level: {:.0} units", report.average_inventory));
    lines.push(format!("Minimum inventory level: {} units", report.min_inventory));
    lines.push(format!(
        "Service level achieved: {:.1}%",
        report.service_level_achieved
    ));
    lines.join("\n")
}

pub fn format_batch_report(report: &BatchReport) -> String {
    let mut lines = Vec::new();
    lines.push("Batch Simulation Report".to_string());
    lines.push(format!("Data source: {}", data_source_label(&report.data_source)));
    lines.push(format!("Seed: {}", seed_label(report.seed)));
    lines.push(format!("Iterations: {}", report.iterations));
    lines.push(format!("Days per run: {}", report.days));
    lines.push(format!("Order quantity: {:.0} units", report.order_quantity));
    lines.push(format!("Reorder point: {:.0} units", report.reorder_point));
    lines.push(String::new());
    lines.push("Stockout days:".to_string());
    lines.push("Percentile | Days".to_string());
    lines.push("-----------|-----".to_string());
    lines.push(format!("P0 | {}", report.stockout_days.p0));
    lines.push(format!("P50 | {}", report.stockout_days.p50));
    lines.push(format!("P85 | {}", report.stockout_days.p85));
    lines.push(format!("P100 | {}", report.stockout_days.p100));
    lines.push(String::new());
    lines.push(format!("Mean stockout rate: {:.1}%", report.mean_stockout_rate));
    lines.push(format!(
        "Mean average inventory: {:.0} units",
        report.mean_average_inventory
    ));
    lines.join("\n")
}

fn data_source_label(data_source: &str) -> &str {
    if data_source.is_empty() { "defaults" } else { data_source }
}

fn seed_label(seed: Option<u64>) -> String {
    match seed {
        Some(seed) => seed.to_string(),
        None => "random".to_string(),
    }
}
