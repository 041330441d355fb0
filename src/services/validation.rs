use thiserror::Error;

use crate::domain::policy::PolicyParameters;

/// Longest horizon a single run may cover, one hundred years of days.
pub const MAX_SIMULATION_DAYS: usize = 36_500;

/// Out-of-domain parameters. Raised before any simulation starts and
/// surfaced to the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("holding cost must be greater than zero, got {0}")]
    NonPositiveHoldingCost(f64),
    #[error("service level must lie strictly between 0 and 1, got {0}")]
    ServiceLevelOutOfRange(f64),
    #[error("lead time must be at least one day, got {0}")]
    NonPositiveLeadTime(f64),
    #[error("simulation horizon must be at least one day")]
    NonPositiveHorizon,
    #[error("simulation horizon must not exceed {max} days, got {0}", max = MAX_SIMULATION_DAYS)]
    HorizonTooLong(usize),
    #[error("average daily demand must be greater than zero")]
    ZeroAverageDemand,
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
}

pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite { field, value })
    }
}

pub(crate) fn require_horizon(days: usize) -> Result<usize, ValidationError> {
    if days == 0 {
        return Err(ValidationError::NonPositiveHorizon);
    }
    if days > MAX_SIMULATION_DAYS {
        return Err(ValidationError::HorizonTooLong(days));
    }
    Ok(days)
}

pub(crate) fn require_non_negative(
    field: &'static str,
    value: f64,
) -> Result<f64, ValidationError> {
    let value = require_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(value)
}

impl PolicyParameters {
    /// Checks every field, including the ones the formulas themselves do
    /// not reject (a zero average demand would starve the demand draw).
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_negative("annual demand", self.annual_demand)?;
        require_non_negative("order cost", self.order_cost)?;
        let holding_cost = require_finite("holding cost", self.holding_cost)?;
        if holding_cost <= 0.0 {
            return Err(ValidationError::NonPositiveHoldingCost(holding_cost));
        }
        if self.avg_daily_demand == 0 {
            return Err(ValidationError::ZeroAverageDemand);
        }
        if self.lead_time_days == 0 {
            return Err(ValidationError::NonPositiveLeadTime(0.0));
        }
        let service_level = require_finite("service level", self.service_level)?;
        if service_level <= 0.0 || service_level >= 1.0 {
            return Err(ValidationError::ServiceLevelOutOfRange(service_level));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parameters_are_valid() {
        assert_eq!(PolicyParameters::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_boundary_service_levels() {
        for level in [0.0, 1.0, 1.5, -0.2] {
            let params = PolicyParameters {
                service_level: level,
                ..PolicyParameters::default()
            };
            assert_eq!(
                params.validate(),
                Err(ValidationError::ServiceLevelOutOfRange(level))
            );
        }
    }

    #[test]
    fn rejects_zero_holding_cost_and_lead_time() {
        let params = PolicyParameters {
            holding_cost: 0.0,
            ..PolicyParameters::default()
        };
        assert_eq!(
            params.validate(),
            Err(ValidationError::NonPositiveHoldingCost(0.0))
        );

        let params = PolicyParameters {
            lead_time_days: 0,
            ..PolicyParameters::default()
        };
        assert_eq!(
            params.validate(),
            Err(ValidationError::NonPositiveLeadTime(0.0))
        );
    }

    #[test]
    fn rejects_nan_and_negative_costs() {
        let params = PolicyParameters {
            order_cost: -1.0,
            ..PolicyParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ValidationError::Negative { field: "order cost", .. })
        ));

        let params = PolicyParameters {
            annual_demand: f64::NAN,
            ..PolicyParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ValidationError::NotFinite { field: "annual demand", .. })
        ));
    }

    #[test]
    fn horizon_must_be_between_one_day_and_the_cap() {
        assert_eq!(require_horizon(0), Err(ValidationError::NonPositiveHorizon));
        assert_eq!(require_horizon(1), Ok(1));
        assert_eq!(require_horizon(MAX_SIMULATION_DAYS), Ok(MAX_SIMULATION_DAYS));
        assert_eq!(
            require_horizon(usize::MAX),
            Err(ValidationError::HorizonTooLong(usize::MAX))
        );
    }

    #[test]
    fn rejects_zero_average_demand() {
        let params = PolicyParameters {
            avg_daily_demand: 0,
            ..PolicyParameters::default()
        };
        assert_eq!(params.validate(), Err(ValidationError::ZeroAverageDemand));
    }
}
