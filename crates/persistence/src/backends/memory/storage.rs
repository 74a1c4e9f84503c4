//! ConsultaRepository implementation for the in-memory backend.

use async_trait::async_trait;

use super::InMemoryBackend;
use crate::core::ConsultaRepository;
use crate::error::StorageResult;
use crate::types::{Consulta, Insurer};

#[async_trait]
impl ConsultaRepository for InMemoryBackend {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn all(&self) -> StorageResult<Vec<Consulta>> {
        Ok(self.records.clone())
    }

    async fn get(&self, id: i64) -> StorageResult<Option<Consulta>> {
        Ok(self.records.iter().find(|c| c.id == id).cloned())
    }

    async fn count(&self) -> StorageResult<u64> {
        Ok(self.records.len() as u64)
    }

    async fn insurers(&self) -> StorageResult<Vec<Insurer>> {
        Ok(self.insurers.clone())
    }
}
