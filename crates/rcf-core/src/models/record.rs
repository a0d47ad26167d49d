//! Historical completed project.

use serde::{Deserialize, Serialize};

use super::{Classification, ClassificationSchema};
use crate::errors::RecordError;

/// One completed project as supplied by the record store.
///
/// Unit prices are always derived from `price`/`surface`, never stored, so a
/// price update in the store can never leave a stale unit price behind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(default)]
    pub name: String,
    pub classification: Classification,
    /// Building surface (m²).
    pub surface: f64,
    /// Total sale price of the building component.
    pub price: f64,
    #[serde(default)]
    pub exterior_surface: f64,
    #[serde(default)]
    pub exterior_price: f64,
    /// Year the price reflects.
    pub completion_year: i32,
}

impl ProjectRecord {
    pub fn new(
        name: impl Into<String>,
        classification: Classification,
        surface: f64,
        price: f64,
        completion_year: i32,
    ) -> Self {
        Self {
            name: name.into(),
            classification,
            surface,
            price,
            exterior_surface: 0.0,
            exterior_price: 0.0,
            completion_year,
        }
    }

    /// Attach exterior works to the record.
    pub fn with_exterior(mut self, exterior_surface: f64, exterior_price: f64) -> Self {
        self.exterior_surface = exterior_surface;
        self.exterior_price = exterior_price;
        self
    }

    /// `price / surface`, or `None` when it cannot be derived.
    pub fn unit_price(&self) -> Option<f64> {
        let derivable = self.surface.is_finite()
            && self.surface > 0.0
            && self.price.is_finite()
            && self.price > 0.0;
        if !derivable {
            return None;
        }
        let unit = self.price / self.surface;
        unit.is_finite().then_some(unit)
    }

    /// `exterior_price / exterior_surface`, present iff `exterior_surface > 0`.
    pub fn exterior_unit_price(&self) -> Option<f64> {
        if !(self.exterior_surface.is_finite() && self.exterior_surface > 0.0) {
            return None;
        }
        if !self.exterior_price.is_finite() {
            return None;
        }
        let unit = self.exterior_price / self.exterior_surface;
        unit.is_finite().then_some(unit)
    }

    /// Check the stored-record invariants.
    ///
    /// `current_year` bounds `completion_year`; `schema` requires every
    /// stratifying attribute to be present.
    pub fn validate(
        &self,
        schema: &ClassificationSchema,
        current_year: i32,
    ) -> Result<(), RecordError> {
        self.require_positive("surface", self.surface)?;
        self.require_positive("price", self.price)?;
        self.require_non_negative("exterior_surface", self.exterior_surface)?;
        self.require_non_negative("exterior_price", self.exterior_price)?;

        if self.completion_year > current_year {
            return Err(RecordError::FutureCompletionYear {
                name: self.name.clone(),
                year: self.completion_year,
                current_year,
            });
        }

        if let Some(missing) = schema
            .attributes()
            .iter()
            .find(|a| self.classification.get(a).is_none())
        {
            return Err(RecordError::MissingAttribute {
                name: self.name.clone(),
                attribute: missing.clone(),
            });
        }
        Ok(())
    }

    fn require_positive(&self, field: &'static str, value: f64) -> Result<(), RecordError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(RecordError::NonPositive {
                name: self.name.clone(),
                field,
                value,
            })
        }
    }

    fn require_non_negative(&self, field: &'static str, value: f64) -> Result<(), RecordError> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(RecordError::Negative {
                name: self.name.clone(),
                field,
                value,
            })
        }
    }
}
