//! Record source: where the historical snapshot comes from.

use std::sync::RwLock;

use chrono::Datelike;

use crate::errors::StoreError;
use crate::models::{ClassificationSchema, ProjectRecord};

/// Supplies an immutable snapshot of historical records.
///
/// Durable stores live outside this workspace; they implement this trait
/// and are responsible for handing each forecast a consistent snapshot.
pub trait RecordSource: Send + Sync {
    fn snapshot(&self) -> Result<Vec<ProjectRecord>, StoreError>;
}

impl RecordSource for Vec<ProjectRecord> {
    fn snapshot(&self) -> Result<Vec<ProjectRecord>, StoreError> {
        Ok(self.clone())
    }
}

/// In-memory record store: append, price update, removal.
/// Records are validated against the schema on the way in.
pub struct InMemoryRecordStore {
    schema: ClassificationSchema,
    records: RwLock<Vec<ProjectRecord>>,
}

impl InMemoryRecordStore {
    pub fn new(schema: ClassificationSchema) -> Self {
        Self {
            schema,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Validate and append. Returns the new record's index.
    pub fn append(&self, record: ProjectRecord) -> Result<usize, StoreError> {
        record.validate(&self.schema, current_year())?;
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        records.push(record);
        tracing::debug!(len = records.len(), "record appended");
        Ok(records.len() - 1)
    }

    /// Replace the total price of the record at `index`.
    pub fn update_price(&self, index: usize, price: f64) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        let len = records.len();
        let record = records
            .get_mut(index)
            .ok_or(StoreError::NotFound { index, len })?;
        let mut updated = record.clone();
        updated.price = price;
        updated.validate(&self.schema, current_year())?;
        *record = updated;
        Ok(())
    }

    /// Remove the record at `index`; later records shift down.
    pub fn remove(&self, index: usize) -> Result<ProjectRecord, StoreError> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        let len = records.len();
        if index >= len {
            return Err(StoreError::NotFound { index, len });
        }
        Ok(records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordSource for InMemoryRecordStore {
    fn snapshot(&self) -> Result<Vec<ProjectRecord>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.clone())
    }
}

fn current_year() -> i32 {
    chrono::Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RecordError;
    use crate::models::Classification;

    fn record(price: f64) -> ProjectRecord {
        ProjectRecord::new(
            "Warehouse",
            Classification::new()
                .with("destination", "hangar")
                .with("special_features", false),
            100.0,
            price,
            2020,
        )
    }

    #[test]
    fn test_append_and_snapshot() {
        let store = InMemoryRecordStore::new(ClassificationSchema::default());
        assert!(store.is_empty());
        assert_eq!(store.append(record(100_000.0)).unwrap(), 0);
        assert_eq!(store.append(record(120_000.0)).unwrap(), 1);
        let snap = store.snapshot().unwrap();
        assert_eq!(snap.len(), 2);
        assert_eq!(snap[1].unit_price(), Some(1200.0));
    }

    #[test]
    fn test_append_rejects_invalid() {
        let store = InMemoryRecordStore::new(ClassificationSchema::default());
        let err = store.append(record(-5.0)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Rejected(RecordError::NonPositive { field: "price", .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_price_changes_unit_price() {
        let store = InMemoryRecordStore::new(ClassificationSchema::default());
        store.append(record(100_000.0)).unwrap();
        store.update_price(0, 150_000.0).unwrap();
        assert_eq!(store.snapshot().unwrap()[0].unit_price(), Some(1500.0));
        assert!(store.update_price(0, 0.0).is_err());
        assert!(matches!(
            store.update_price(3, 1.0),
            Err(StoreError::NotFound { index: 3, len: 1 })
        ));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = InMemoryRecordStore::new(ClassificationSchema::default());
        store.append(record(100_000.0)).unwrap();
        let snap = store.snapshot().unwrap();
        store.remove(0).unwrap();
        assert_eq!(snap.len(), 1);
        assert!(store.is_empty());
    }
}
