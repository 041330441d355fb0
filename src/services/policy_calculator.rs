use crate::domain::policy::{Policy, PolicyParameters};
use crate::services::probit::probit;
use crate::services::validation::{
    ValidationError, require_finite, require_non_negative,
};

/// Economic Order Quantity: `sqrt(2 * D * S / H)`.
pub fn compute_eoq(
    annual_demand: f64,
    order_cost: f64,
    holding_cost: f64,
) -> Result<f64, ValidationError> {
    let annual_demand = require_non_negative("annual demand", annual_demand)?;
    let order_cost = require_non_negative("order cost", order_cost)?;
    let holding_cost = require_finite("holding cost", holding_cost)?;
    if holding_cost <= 0.0 {
        return Err(ValidationError::NonPositiveHoldingCost(holding_cost));
    }
    let eoq = (2.0 * annual_demand * order_cost / holding_cost).sqrt();
    require_finite("economic order quantity", eoq)
}

/// Lead-time demand plus a safety stock of `z(service_level) * std * sqrt(lead_time)`.
///
/// Safety stock is floored at zero, so service levels below 0.5 yield the
/// bare lead-time demand rather than a reduced reorder point.
pub fn compute_reorder_point(
    avg_daily_demand: f64,
    lead_time_days: f64,
    service_level: f64,
    demand_std: f64,
) -> Result<f64, ValidationError> {
    let avg_daily_demand = require_non_negative("average daily demand", avg_daily_demand)?;
    let lead_time_days = require_finite("lead time", lead_time_days)?;
    if lead_time_days <= 0.0 {
        return Err(ValidationError::NonPositiveLeadTime(lead_time_days));
    }
    let demand_std = require_non_negative("demand standard deviation", demand_std)?;
    let z = probit(service_level).ok_or(ValidationError::ServiceLevelOutOfRange(service_level))?;

    let safety_stock = (z * demand_std * lead_time_days.sqrt()).max(0.0);
    require_finite("reorder point", avg_daily_demand * lead_time_days + safety_stock)
}

pub fn calculate_policy(params: &PolicyParameters) -> Result<Policy, ValidationError> {
    params.validate()?;
    let order_quantity =
        compute_eoq(params.annual_demand, params.order_cost, params.holding_cost)?;
    let reorder_point = compute_reorder_point(
        params.avg_daily_demand as f64,
        params.lead_time_days as f64,
        params.service_level,
        params.demand_std as f64,
    )?;
    Ok(Policy {
        order_quantity,
        reorder_point,
    })
}
