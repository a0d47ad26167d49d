use crate::errors::RcfResult;
use crate::models::{ForecastRequest, ForecastResult, ProjectRecord};

/// Produces a forecast from a record snapshot.
pub trait Forecaster: Send + Sync {
    fn forecast(
        &self,
        records: &[ProjectRecord],
        request: &ForecastRequest,
    ) -> RcfResult<ForecastResult>;
}
