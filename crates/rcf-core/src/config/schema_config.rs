//! Classification schema configuration.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::models::ClassificationSchema;

/// Which record attributes stratify the reference class.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SchemaConfig {
    /// Ordered attribute names. Default: `["destination", "special_features"]`.
    #[serde(default)]
    pub attributes: Vec<String>,
}

impl SchemaConfig {
    /// Returns the configured attributes, or the default pair when unset.
    pub fn effective_attributes(&self) -> Vec<String> {
        if self.attributes.is_empty() {
            constants::DEFAULT_SCHEMA_ATTRIBUTES
                .iter()
                .map(|a| a.to_string())
                .collect()
        } else {
            self.attributes.clone()
        }
    }

    /// Build the schema used by the reference-class filter.
    pub fn schema(&self) -> ClassificationSchema {
        ClassificationSchema::new(self.effective_attributes())
    }
}
