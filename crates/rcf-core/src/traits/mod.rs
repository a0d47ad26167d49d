//! Seams to the engine and to external collaborators.

pub mod forecaster;
pub mod record_source;

pub use forecaster::Forecaster;
pub use record_source::{InMemoryRecordStore, RecordSource};
