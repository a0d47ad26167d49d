//! Forecast request parameters.

use serde::{Deserialize, Serialize};

use super::{Classification, ClassificationSchema};
use crate::errors::InputError;

/// What the caller wants estimated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// Value for each schema attribute.
    pub criterion: Classification,
    /// Requested building surface (m²), must be > 0.
    pub surface: f64,
    /// Requested exterior works surface (m²), 0 means not requested.
    #[serde(default)]
    pub exterior_surface: f64,
    /// Year the estimate should be expressed in.
    pub target_year: i32,
}

impl ForecastRequest {
    pub fn new(criterion: Classification, surface: f64, target_year: i32) -> Self {
        Self {
            criterion,
            surface,
            exterior_surface: 0.0,
            target_year,
        }
    }

    pub fn with_exterior_surface(mut self, exterior_surface: f64) -> Self {
        self.exterior_surface = exterior_surface;
        self
    }

    /// Reject malformed requests before any computation.
    pub fn validate(&self, schema: &ClassificationSchema) -> Result<(), InputError> {
        if !(self.surface.is_finite() && self.surface > 0.0) {
            return Err(InputError::NonPositiveSurface {
                value: self.surface,
            });
        }
        if !(self.exterior_surface.is_finite() && self.exterior_surface >= 0.0) {
            return Err(InputError::InvalidExteriorSurface {
                value: self.exterior_surface,
            });
        }
        schema.validate_criterion(&self.criterion)
    }
}
