//! Categorical stratification of records into reference classes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::InputError;

/// One classification attribute value: a yes/no flag or a named category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Flag(bool),
    Category(String),
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        Self::Category(v.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        Self::Category(v)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(true) => f.write_str("yes"),
            Self::Flag(false) => f.write_str("no"),
            Self::Category(c) => f.write_str(c),
        }
    }
}

/// Attribute name → value for a record or a forecast criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Classification(BTreeMap<String, AttributeValue>);

impl Classification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.0.insert(attribute.into(), value.into());
        self
    }

    pub fn insert(&mut self, attribute: impl Into<String>, value: impl Into<AttributeValue>) {
        self.0.insert(attribute.into(), value.into());
    }

    pub fn get(&self, attribute: &str) -> Option<&AttributeValue> {
        self.0.get(attribute)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Classification
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Ordered set of attribute names that define a reference class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationSchema {
    attributes: Vec<String>,
}

impl ClassificationSchema {
    pub fn new(attributes: Vec<String>) -> Self {
        Self { attributes }
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// A criterion must name every schema attribute and nothing else.
    pub fn validate_criterion(&self, criterion: &Classification) -> Result<(), InputError> {
        for attribute in &self.attributes {
            if criterion.get(attribute).is_none() {
                return Err(InputError::MissingAttribute {
                    attribute: attribute.clone(),
                });
            }
        }
        if let Some(unknown) = criterion
            .attributes()
            .find(|a| !self.attributes.iter().any(|s| s == a))
        {
            return Err(InputError::UnknownAttribute {
                attribute: unknown.to_string(),
            });
        }
        Ok(())
    }

    /// True iff `candidate` equals `criterion` on every schema attribute.
    /// A missing attribute on either side never matches.
    pub fn matches(&self, candidate: &Classification, criterion: &Classification) -> bool {
        self.attributes.iter().all(|attribute| {
            match (candidate.get(attribute), criterion.get(attribute)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            }
        })
    }
}

impl Default for ClassificationSchema {
    fn default() -> Self {
        Self::new(
            crate::constants::DEFAULT_SCHEMA_ATTRIBUTES
                .iter()
                .map(|a| a.to_string())
                .collect(),
        )
    }
}
