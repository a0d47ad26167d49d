//! Reference-class selection by exact classification match.

use rcf_core::models::{Classification, ClassificationSchema, ProjectRecord};

/// The historical records sharing the request's classification.
/// Borrowed from the snapshot for the duration of one forecast.
#[derive(Debug, Clone)]
pub struct ReferenceClass<'a> {
    records: Vec<&'a ProjectRecord>,
}

impl<'a> ReferenceClass<'a> {
    /// Select every record equal to `criterion` on all schema attributes.
    /// Snapshot order is preserved.
    pub fn select(
        records: &'a [ProjectRecord],
        schema: &ClassificationSchema,
        criterion: &Classification,
    ) -> Self {
        let records = records
            .iter()
            .filter(|r| schema.matches(&r.classification, criterion))
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[&'a ProjectRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a ProjectRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(destination: &str, special: bool) -> ProjectRecord {
        ProjectRecord::new(
            format!("{destination}-{special}"),
            Classification::new()
                .with("destination", destination)
                .with("special_features", special),
            100.0,
            100_000.0,
            2022,
        )
    }

    #[test]
    fn test_select_exact_match() {
        let records = vec![
            record("hangar", true),
            record("hangar", false),
            record("SME", true),
            record("hangar", true),
        ];
        let criterion = Classification::new()
            .with("destination", "hangar")
            .with("special_features", true);
        let class = ReferenceClass::select(&records, &ClassificationSchema::default(), &criterion);
        assert_eq!(class.len(), 2);
        assert!(class.iter().all(|r| r.classification == criterion));
    }

    #[test]
    fn test_empty_class_is_not_an_error() {
        let records = vec![record("SME", false)];
        let criterion = Classification::new()
            .with("destination", "shoppingcenter")
            .with("special_features", false);
        let class = ReferenceClass::select(&records, &ClassificationSchema::default(), &criterion);
        assert!(class.is_empty());
    }

    #[test]
    fn test_custom_schema_ignores_other_attributes() {
        let schema = ClassificationSchema::new(vec!["has_hvac".into(), "has_solar".into()]);
        let mut a = record("hangar", true);
        a.classification.insert("has_hvac", true);
        a.classification.insert("has_solar", false);
        let mut b = record("SME", false);
        b.classification.insert("has_hvac", true);
        b.classification.insert("has_solar", false);
        let records = vec![a, b];

        let criterion = Classification::new()
            .with("has_hvac", true)
            .with("has_solar", false);
        let class = ReferenceClass::select(&records, &schema, &criterion);
        assert_eq!(class.len(), 2);
    }
}
