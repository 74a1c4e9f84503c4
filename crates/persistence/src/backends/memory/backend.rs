//! In-memory backend construction.

use std::fmt::{self, Debug};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use super::seed::{fixed_records, generate_records, insurers};
use crate::types::{Consulta, Insurer};

/// Read-only record store held in memory.
///
/// The data set is built once and never mutated, so the backend can be shared
/// across requests without locking.
pub struct InMemoryBackend {
    pub(super) records: Vec<Consulta>,
    pub(super) insurers: Vec<Insurer>,
}

impl Debug for InMemoryBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryBackend")
            .field("records", &self.records.len())
            .field("insurers", &self.insurers.len())
            .finish()
    }
}

impl InMemoryBackend {
    /// Creates a backend over the given records with the standard insurer
    /// catalogue.
    pub fn new(records: Vec<Consulta>) -> Self {
        Self {
            records,
            insurers: insurers(),
        }
    }

    /// Replaces the insurer catalogue.
    pub fn with_insurers(mut self, mut insurers: Vec<Insurer>) -> Self {
        insurers.sort_by_key(|i| i.id);
        self.insurers = insurers;
        self
    }

    /// Creates a backend holding only the four fixed demo records.
    pub fn with_fixed_records() -> Self {
        Self::new(fixed_records())
    }

    /// Creates a backend with the fixed records plus `generated` random ones.
    ///
    /// A `seed` makes the generated records reproducible; without one the
    /// thread RNG is used.
    pub fn seeded(generated: usize, seed: Option<u64>) -> Self {
        let mut records = fixed_records();
        let extra = match seed {
            Some(seed) => generate_records(generated, &mut StdRng::seed_from_u64(seed)),
            None => generate_records(generated, &mut rand::rng()),
        };
        records.extend(extra);

        info!(
            fixed = records.len() - generated,
            generated,
            seed = ?seed,
            "Seeded in-memory backend"
        );

        Self::new(records)
    }

    /// Returns the stored records.
    pub fn records(&self) -> &[Consulta] {
        &self.records
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the backend holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::with_fixed_records()
    }
}
