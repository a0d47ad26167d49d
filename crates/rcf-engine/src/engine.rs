//! ForecastEngine: validates the request, selects the reference class,
//! corrects prices, and assembles the forecast result.
//!
//! Stage order: filter → per-record correction → point estimate →
//! interval → exterior range → total range.

use rcf_core::config::RcfConfig;
use rcf_core::errors::{ConfigError, RcfResult};
use rcf_core::models::{
    ClassificationSchema, CorrectedProject, CostRange, ExteriorOutcome, ForecastRequest,
    ForecastResult, PointOutcome, ProjectRecord,
};
use rcf_core::traits::{Forecaster, RecordSource};
use tracing::{debug, info, warn};

use crate::interval::{IntervalConfig, IntervalEstimator};
use crate::reference_class::ReferenceClass;
use crate::{exterior, inflation, point};

/// Reference-class forecasting engine. Holds only immutable config, so one
/// instance can serve any number of forecast calls.
#[derive(Debug, Clone)]
pub struct ForecastEngine {
    schema: ClassificationSchema,
    annual_rate: f64,
    interval: IntervalEstimator,
}

impl ForecastEngine {
    /// Build an engine from a loaded configuration.
    pub fn new(config: &RcfConfig) -> Result<Self, ConfigError> {
        RcfConfig::validate(config)?;
        Ok(Self {
            schema: config.schema.schema(),
            annual_rate: config.forecast.effective_annual_rate(),
            interval: IntervalEstimator::new(IntervalConfig::from(&config.forecast)),
        })
    }

    pub fn schema(&self) -> &ClassificationSchema {
        &self.schema
    }

    pub fn annual_rate(&self) -> f64 {
        self.annual_rate
    }

    pub fn interval_config(&self) -> &IntervalConfig {
        self.interval.config()
    }

    /// Forecast against a snapshot taken from `source`.
    pub fn forecast_from(
        &self,
        source: &dyn RecordSource,
        request: &ForecastRequest,
    ) -> RcfResult<ForecastResult> {
        // Reject bad input before touching the store.
        request.validate(&self.schema)?;
        let records = source.snapshot()?;
        self.forecast(&records, request)
    }

    /// Run one forecast over `records`.
    ///
    /// Only a malformed request is an `Err`. Empty reference classes, small
    /// samples, unpriced records and normality-test failures are reported
    /// inside the result.
    pub fn forecast(
        &self,
        records: &[ProjectRecord],
        request: &ForecastRequest,
    ) -> RcfResult<ForecastResult> {
        request.validate(&self.schema)?;

        let class = ReferenceClass::select(records, &self.schema, &request.criterion);
        debug!(
            snapshot = records.len(),
            matched = class.len(),
            "reference class selected"
        );

        let projects: Vec<CorrectedProject> = class
            .iter()
            .map(|r| self.correct_record(r, request.target_year))
            .collect();

        let corrected: Vec<Option<f64>> =
            projects.iter().map(|p| p.corrected_unit_price).collect();
        let sample = point::valid_prices(&corrected);
        let excluded_count = class.len() - sample.len();
        if excluded_count > 0 {
            warn!(
                excluded = excluded_count,
                "matched records without a derivable unit price"
            );
        }

        let estimate = point::estimate(&sample, request.surface, class.len());
        let interval = self.interval.estimate(&sample, request.surface);
        let exterior = exterior::estimate(
            projects.iter().map(|p| p.corrected_exterior_unit_price),
            request.exterior_surface,
        );
        let total_range = total_range(&estimate, &exterior);

        info!(
            matched = class.len(),
            building_cost = ?estimate.estimate().map(|e| e.building_cost),
            interval = interval.tag(),
            target_year = request.target_year,
            "forecast complete"
        );

        Ok(ForecastResult {
            match_count: class.len(),
            excluded_count,
            target_year: request.target_year,
            annual_rate: self.annual_rate,
            estimate,
            interval,
            exterior,
            total_range,
            projects,
        })
    }

    fn correct_record(&self, record: &ProjectRecord, target_year: i32) -> CorrectedProject {
        let unit_price = record.unit_price();
        let exterior_unit_price = record.exterior_unit_price();
        CorrectedProject {
            name: record.name.clone(),
            completion_year: record.completion_year,
            unit_price,
            corrected_unit_price: inflation::correct_optional(
                unit_price,
                record.completion_year,
                target_year,
                self.annual_rate,
            ),
            exterior_unit_price,
            corrected_exterior_unit_price: inflation::correct_optional(
                exterior_unit_price,
                record.completion_year,
                target_year,
                self.annual_rate,
            ),
        }
    }
}

impl Default for ForecastEngine {
    fn default() -> Self {
        let config = RcfConfig::default();
        Self {
            schema: config.schema.schema(),
            annual_rate: config.forecast.effective_annual_rate(),
            interval: IntervalEstimator::default(),
        }
    }
}

impl Forecaster for ForecastEngine {
    fn forecast(
        &self,
        records: &[ProjectRecord],
        request: &ForecastRequest,
    ) -> RcfResult<ForecastResult> {
        ForecastEngine::forecast(self, records, request)
    }
}

/// Building estimate plus the exterior range, when both exist.
fn total_range(estimate: &PointOutcome, exterior: &ExteriorOutcome) -> Option<CostRange> {
    let building = estimate.estimate()?.building_cost;
    let range = exterior.range()?;
    Some(CostRange {
        min: building + range.cost_min,
        max: building + range.cost_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rcf_core::models::{Classification, ExteriorRange, PointEstimate};

    fn hangar() -> Classification {
        Classification::new()
            .with("destination", "hangar")
            .with("special_features", false)
    }

    #[test]
    fn test_total_range_requires_both_parts() {
        let estimate = PointOutcome::Estimate(PointEstimate {
            mean_unit_price: 1000.0,
            building_cost: 100_000.0,
            sample_size: 2,
        });
        let exterior = ExteriorOutcome::Range(ExteriorRange {
            unit_min: 40.0,
            unit_max: 55.0,
            cost_min: 4000.0,
            cost_max: 5500.0,
            sample_size: 2,
        });
        assert_eq!(
            total_range(&estimate, &exterior),
            Some(CostRange {
                min: 104_000.0,
                max: 105_500.0
            })
        );
        assert_eq!(total_range(&PointOutcome::NoMatch, &exterior), None);
        assert_eq!(total_range(&estimate, &ExteriorOutcome::NotRequested), None);
    }

    #[test]
    fn test_invalid_request_rejected_before_filtering() {
        let engine = ForecastEngine::default();
        let request = ForecastRequest::new(hangar(), 0.0, 2025);
        assert!(engine.forecast(&[], &request).is_err());
    }

    #[test]
    fn test_engine_from_config_uses_rate_and_threshold() {
        let config =
            RcfConfig::from_toml("[forecast]\nannual_rate = 0.027\nmin_sample_size = 3").unwrap();
        let engine = ForecastEngine::new(&config).unwrap();
        assert_eq!(engine.annual_rate(), 0.027);
        assert_eq!(engine.interval_config().min_sample_size, 3);
    }
}
