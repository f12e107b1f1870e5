use std::sync::RwLock;

use super::domain::{PolicyCode, PolicyRecord, PolicyValidationError};

/// Read surface the matching engine requires from any policy store.
///
/// The engine never mutates the catalog; refresh and reseeding are the
/// backing store's concern.
pub trait PolicyCatalog: Send + Sync {
    /// All records with `is_active = true`, in catalog order.
    fn active_policies(&self) -> Result<Vec<PolicyRecord>, CatalogError>;

    /// Exact lookup by code.
    fn get(&self, code: &PolicyCode) -> Result<PolicyRecord, CatalogError>;
}

/// Error enumeration for catalog access.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("policy not found")]
    NotFound,
    #[error("policy already exists: {0}")]
    Duplicate(PolicyCode),
    #[error("invalid policy record: {0}")]
    Invalid(#[from] PolicyValidationError),
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Insertion-ordered in-memory catalog.
///
/// Catalog order is load-bearing: the ranker's stable sort keeps it for
/// tied scores, so iteration must be deterministic.
#[derive(Default)]
pub struct InMemoryPolicyCatalog {
    records: RwLock<Vec<PolicyRecord>>,
}

impl InMemoryPolicyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, record: PolicyRecord) -> Result<(), CatalogError> {
        record.validate()?;

        let mut records = self
            .records
            .write()
            .map_err(|_| CatalogError::Unavailable("catalog lock poisoned".to_string()))?;

        if records.iter().any(|existing| existing.code == record.code) {
            return Err(CatalogError::Duplicate(record.code));
        }

        records.push(record);
        Ok(())
    }

    /// Seed the catalog once; a non-empty catalog is left untouched so the
    /// startup job stays idempotent. Returns the number of records added.
    pub fn seed_if_empty<I>(&self, records: I) -> Result<usize, CatalogError>
    where
        I: IntoIterator<Item = PolicyRecord>,
    {
        if !self.is_empty()? {
            return Ok(0);
        }

        let mut added = 0;
        for record in records {
            self.insert(record)?;
            added += 1;
        }
        Ok(added)
    }

    pub fn len(&self) -> Result<usize, CatalogError> {
        let records = self
            .records
            .read()
            .map_err(|_| CatalogError::Unavailable("catalog lock poisoned".to_string()))?;
        Ok(records.len())
    }

    pub fn is_empty(&self) -> Result<bool, CatalogError> {
        Ok(self.len()? == 0)
    }

    /// Flip a record to inactive. Records are never removed.
    pub fn deactivate(&self, code: &PolicyCode) -> Result<(), CatalogError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| CatalogError::Unavailable("catalog lock poisoned".to_string()))?;

        let record = records
            .iter_mut()
            .find(|record| &record.code == code)
            .ok_or(CatalogError::NotFound)?;
        record.is_active = false;
        Ok(())
    }
}

impl PolicyCatalog for InMemoryPolicyCatalog {
    fn active_policies(&self) -> Result<Vec<PolicyRecord>, CatalogError> {
        let records = self
            .records
            .read()
            .map_err(|_| CatalogError::Unavailable("catalog lock poisoned".to_string()))?;
        Ok(records
            .iter()
            .filter(|record| record.is_active)
            .cloned()
            .collect())
    }

    fn get(&self, code: &PolicyCode) -> Result<PolicyRecord, CatalogError> {
        let records = self
            .records
            .read()
            .map_err(|_| CatalogError::Unavailable("catalog lock poisoned".to_string()))?;
        records
            .iter()
            .find(|record| &record.code == code)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }
}
