//! Test fixtures for the listing pipeline.

use consultas_persistence::backends::memory::InMemoryBackend;
use consultas_persistence::core::ConsultaService;
use consultas_persistence::types::{Consulta, Doctor, Insurer, Patient};

/// Builder for a single record.
#[derive(Debug, Clone)]
pub struct ConsultaFixture {
    id: i64,
    doctor: String,
    patient: String,
    insurer: Insurer,
    created_at: String,
}

impl ConsultaFixture {
    /// Creates a fixture with placeholder names and a 2024-01-01 timestamp.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            doctor: format!("Medico {id}"),
            patient: format!("Paciente {id}"),
            insurer: Insurer::new(1, "Unimed"),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    /// Sets the doctor name.
    pub fn doctor(mut self, name: &str) -> Self {
        self.doctor = name.to_string();
        self
    }

    /// Sets the patient name.
    pub fn patient(mut self, name: &str) -> Self {
        self.patient = name.to_string();
        self
    }

    /// Sets the insurer.
    pub fn insurer(mut self, id: i64, name: &str) -> Self {
        self.insurer = Insurer::new(id, name);
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: &str) -> Self {
        self.created_at = created_at.to_string();
        self
    }

    /// Builds the record.
    pub fn build(self) -> Consulta {
        Consulta::new(
            self.id,
            Doctor::new(self.doctor),
            Patient::new(self.patient, "1980-06-15"),
            self.insurer,
            self.created_at,
        )
    }
}

/// Builds `count` records with ids `1..=count`, one day apart starting on
/// 2020-01-01, cycling through three insurers.
pub fn daily_records(count: usize) -> Vec<Consulta> {
    const INSURERS: [(i64, &str); 3] = [(1, "Unimed"), (2, "Bradesco"), (5, "SulAmérica")];

    (1..=count as i64)
        .map(|id| {
            let (insurer_id, insurer_name) = INSURERS[(id as usize - 1) % INSURERS.len()];
            let day = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
                + chrono::Duration::days(id - 1);
            ConsultaFixture::new(id)
                .insurer(insurer_id, insurer_name)
                .created_at(&format!("{day}T09:00:00Z"))
                .build()
        })
        .collect()
}

/// Wraps `records` in an in-memory service.
pub fn service_with(records: Vec<Consulta>) -> ConsultaService<InMemoryBackend> {
    ConsultaService::new(InMemoryBackend::new(records))
}

/// Service over the demo data set with a fixed seed.
pub fn seeded_service() -> ConsultaService<InMemoryBackend> {
    ConsultaService::new(InMemoryBackend::seeded(50, Some(2024)))
}
