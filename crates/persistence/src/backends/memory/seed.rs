//! Demo data set.
//!
//! Four hand-written records followed by generated ones. Generated records use
//! ids from [`GENERATED_ID_OFFSET`] on so they never collide with the fixed ones.

use chrono::{DateTime, SecondsFormat};
use rand::Rng;

use crate::types::{Consulta, Doctor, Insurer, Patient};

/// Id of the first generated record, minus one.
pub const GENERATED_ID_OFFSET: i64 = 1000;

/// Insurer catalogue as `(id, name)`.
pub const INSURERS: [(i64, &str); 5] = [
    (1, "Unimed"),
    (2, "Bradesco"),
    (3, "Amil"),
    (4, "MedSenior"),
    (5, "SulAmérica"),
];

// 2015-01-01T00:00:00Z .. 2024-01-01T00:00:00Z
const CREATED_FROM_MS: i64 = 1_420_070_400_000;
const CREATED_UNTIL_MS: i64 = 1_704_067_200_000;

// 1950-01-01 .. 2001-01-01, in days since the Unix epoch
const BIRTH_FROM_DAY: i64 = -7_305;
const BIRTH_UNTIL_DAY: i64 = 11_323;

const SECONDS_PER_DAY: i64 = 86_400;

/// Returns the insurer catalogue.
pub fn insurers() -> Vec<Insurer> {
    INSURERS
        .iter()
        .map(|(id, name)| Insurer::new(*id, *name))
        .collect()
}

/// Returns the four fixed records (ids 1–4).
pub fn fixed_records() -> Vec<Consulta> {
    vec![
        Consulta::new(
            1,
            Doctor::new("Afonso Silva"),
            Patient::new("Gustavo Santos", "2023-08-21"),
            Insurer::new(1, "Unimed"),
            "2024-09-20T12:00:00Z",
        ),
        Consulta::new(
            2,
            Doctor::new("Fernando Gomes"),
            Patient::new("Jurandir Souza", "1999-08-21"),
            Insurer::new(2, "Bradesco"),
            "2024-09-20T12:00:00Z",
        ),
        Consulta::new(
            3,
            Doctor::new("Maria Costa"),
            Patient::new("Ana Paula", "1985-03-15"),
            Insurer::new(1, "Unimed"),
            "2024-09-21T10:30:00Z",
        ),
        Consulta::new(
            4,
            Doctor::new("Eder Silva"),
            Patient::new("Carlos Eduardo", "1990-07-10"),
            Insurer::new(5, "SulAmérica"),
            "2024-09-22T14:00:00Z",
        ),
    ]
}

/// Generates `count` records with ids `1001..=1000 + count`.
///
/// Birth dates fall in 1950–2000, creation timestamps in 2015–2023 (RFC 3339,
/// millisecond precision, UTC), and the insurer is drawn from [`INSURERS`].
pub fn generate_records<G: Rng + ?Sized>(count: usize, rng: &mut G) -> Vec<Consulta> {
    (1..=count as i64)
        .map(|i| {
            let (insurer_id, insurer_name) = INSURERS[rng.random_range(0..INSURERS.len())];

            Consulta::new(
                GENERATED_ID_OFFSET + i,
                Doctor::new(format!("Medico {i}")),
                Patient::new(format!("Paciente {i}"), random_birth_date(rng)),
                Insurer::new(insurer_id, insurer_name),
                random_created_at(rng),
            )
        })
        .collect()
}

fn random_birth_date<G: Rng + ?Sized>(rng: &mut G) -> String {
    let day = rng.random_range(BIRTH_FROM_DAY..BIRTH_UNTIL_DAY);
    DateTime::from_timestamp(day * SECONDS_PER_DAY, 0)
        .map(|dt| dt.date_naive().format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn random_created_at<G: Rng + ?Sized>(rng: &mut G) -> String {
    let millis = rng.random_range(CREATED_FROM_MS..CREATED_UNTIL_MS);
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}
