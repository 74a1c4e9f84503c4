//! Appointment record types.
//!
//! Field names are English in Rust; the serialized form keeps the wire names
//! the web client already consumes (`medico`, `paciente`, `convenio`, ...).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One appointment entry.
///
/// Records are built once when the backend is seeded and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consulta {
    /// Unique record id.
    pub id: i64,

    /// The attending doctor.
    #[serde(rename = "medico")]
    pub doctor: Doctor,

    /// The patient.
    #[serde(rename = "paciente")]
    pub patient: Patient,

    /// The health insurer covering the appointment.
    #[serde(rename = "convenio")]
    pub insurer: Insurer,

    /// Creation timestamp as an ISO-8601 string.
    #[serde(rename = "dataCriacao")]
    pub created_at: String,
}

/// Doctor attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,
}

/// Patient attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,

    /// Birth date (`YYYY-MM-DD`).
    #[serde(rename = "dataNascimento")]
    pub birth_date: String,
}

/// Health insurer ("convênio").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Insurer {
    /// Insurer id.
    pub id: i64,

    /// Display name.
    #[serde(rename = "nome")]
    pub name: String,
}

impl Consulta {
    /// Creates a record from its parts.
    pub fn new(
        id: i64,
        doctor: Doctor,
        patient: Patient,
        insurer: Insurer,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id,
            doctor,
            patient,
            insurer,
            created_at: created_at.into(),
        }
    }

    /// Parses `created_at` into an instant.
    ///
    /// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (read as UTC
    /// midnight). Returns `None` for anything else.
    pub fn created_instant(&self) -> Option<DateTime<Utc>> {
        parse_instant(&self.created_at)
    }
}

impl Doctor {
    /// Creates a doctor with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Patient {
    /// Creates a patient with the given name and birth date.
    pub fn new(name: impl Into<String>, birth_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birth_date: birth_date.into(),
        }
    }
}

impl Insurer {
    /// Creates an insurer.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
