//! Data model: historical records, forecast requests, and forecast results.

pub mod classification;
pub mod record;
pub mod request;
pub mod result;

pub use classification::{AttributeValue, Classification, ClassificationSchema};
pub use record::ProjectRecord;
pub use request::ForecastRequest;
pub use result::{
    CorrectedProject, CostRange, ExteriorOutcome, ExteriorRange, ForecastResult,
    IntervalBounds, IntervalOutcome, PointEstimate, PointOutcome,
};
