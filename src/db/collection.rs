use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;
use crate::storage::client::{KeyValueBackend, KvStore};

/// A record persisted as one element of a JSON array under a fixed key.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Storage key of the whole collection.
    const KEY: &'static str;

    fn id(&self) -> &str;
}

/// Linear-scan view over one collection.
///
/// Every read loads the whole array; every write rewrites it. There is no
/// index and no locking.
pub struct Collection<'a, B, T> {
    kv: &'a KvStore<B>,
    _record: PhantomData<T>,
}

impl<'a, B: KeyValueBackend, T: Record> Collection<'a, B, T> {
    pub fn new(kv: &'a KvStore<B>) -> Self {
        Self {
            kv,
            _record: PhantomData,
        }
    }

    /// All records in persisted order.
    pub fn all(&self) -> Result<Vec<T>, AppError> {
        let records: Vec<T> = self.kv.get(T::KEY, Vec::new())?;
        tracing::debug!("Loaded {} record(s) from '{}'", records.len(), T::KEY);
        Ok(records)
    }

    /// First record with the given id.
    pub fn find_by_id(&self, id: &str) -> Result<Option<T>, AppError> {
        self.find(|record| record.id() == id)
    }

    /// First record matching `predicate`.
    pub fn find<P>(&self, predicate: P) -> Result<Option<T>, AppError>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self.all()?.into_iter().find(|record| predicate(record)))
    }

    /// Every record matching `predicate`, in persisted order.
    pub fn filter<P>(&self, predicate: P) -> Result<Vec<T>, AppError>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self
            .all()?
            .into_iter()
            .filter(|record| predicate(record))
            .collect())
    }

    /// Replace the record with the same id in place, or append it.
    pub fn save(&self, record: T) -> Result<(), AppError> {
        let mut records = self.all()?;
        match records.iter().position(|existing| existing.id() == record.id()) {
            Some(index) => {
                tracing::debug!("Replacing '{}' in '{}'", record.id(), T::KEY);
                records[index] = record;
            }
            None => {
                tracing::debug!("Appending '{}' to '{}'", record.id(), T::KEY);
                records.push(record);
            }
        }
        self.kv.set(T::KEY, &records)
    }

    /// Drop every record with the given id and persist the rest.
    pub fn delete_by_id(&self, id: &str) -> Result<(), AppError> {
        let records: Vec<T> = self
            .all()?
            .into_iter()
            .filter(|record| record.id() != id)
            .collect();
        self.kv.set(T::KEY, &records)
    }

    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.all()?.is_empty())
    }
}
