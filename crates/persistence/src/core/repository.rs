//! Record source trait.
//!
//! This module defines the [`ConsultaRepository`] trait, the only way the
//! listing service reaches the data set. Backends live in
//! [`crate::backends`].

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{Consulta, Insurer};

/// Read-only source of appointment records.
///
/// Implementations return records in a stable order; the listing pipeline
/// relies on it when no sort key is active.
///
/// # Example
///
/// ```
/// use consultas_persistence::backends::memory::InMemoryBackend;
/// use consultas_persistence::core::ConsultaRepository;
///
/// # tokio_test::block_on(async {
/// let backend = InMemoryBackend::with_fixed_records();
///
/// assert_eq!(backend.count().await.unwrap(), 4);
/// assert!(backend.get(3).await.unwrap().is_some());
/// assert!(backend.get(999).await.unwrap().is_none());
/// # });
/// ```
#[async_trait]
pub trait ConsultaRepository: Send + Sync {
    /// Returns a human-readable name for this backend.
    fn backend_name(&self) -> &'static str;

    /// Returns every record, in repository order.
    async fn all(&self) -> StorageResult<Vec<Consulta>>;

    /// Reads one record by id.
    ///
    /// Returns `Ok(None)` when no record has that id.
    async fn get(&self, id: i64) -> StorageResult<Option<Consulta>> {
        Ok(self.all().await?.into_iter().find(|c| c.id == id))
    }

    /// Counts the records in the repository.
    async fn count(&self) -> StorageResult<u64> {
        Ok(self.all().await?.len() as u64)
    }

    /// Returns the insurer catalogue offered as filter options, ordered by id.
    ///
    /// The default collects the distinct insurers of the records. Backends
    /// that know the full catalogue override it.
    async fn insurers(&self) -> StorageResult<Vec<Insurer>> {
        let insurers: BTreeMap<i64, Insurer> = self
            .all()
            .await?
            .into_iter()
            .map(|c| (c.insurer.id, c.insurer))
            .collect();

        Ok(insurers.into_values().collect())
    }
}

#[async_trait]
impl<R: ConsultaRepository + ?Sized> ConsultaRepository for Arc<R> {
    fn backend_name(&self) -> &'static str {
        (**self).backend_name()
    }

    async fn all(&self) -> StorageResult<Vec<Consulta>> {
        (**self).all().await
    }

    async fn get(&self, id: i64) -> StorageResult<Option<Consulta>> {
        (**self).get(id).await
    }

    async fn count(&self) -> StorageResult<u64> {
        (**self).count().await
    }

    async fn insurers(&self) -> StorageResult<Vec<Insurer>> {
        (**self).insurers().await
    }
}
