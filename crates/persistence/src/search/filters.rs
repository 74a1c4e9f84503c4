//! Per-field record filters.
//!
//! Each active field of an [`EffectiveRequest`] becomes one [`FieldFilter`].
//! A [`FilterChain`] keeps a record only when every filter matches it.

use regex::{Regex, RegexBuilder};
use tracing::warn;

use crate::search::normalize;
use crate::types::{Consulta, EffectiveRequest};

/// A single field predicate.
#[derive(Debug, Clone)]
pub enum FieldFilter {
    /// Doctor name contains the value (accent/case-insensitive).
    DoctorName(NamePattern),
    /// Patient name contains the value (accent/case-insensitive).
    PatientName(NamePattern),
    /// `created_at` starts with the value.
    CreatedDate(String),
    /// Insurer name contains any of the normalized values.
    InsurerNames(Vec<String>),
}

/// Substring pattern over normalized names.
///
/// The value is normalized and escaped before it is compiled, so characters
/// such as `(` or `.` match themselves.
#[derive(Debug, Clone)]
pub struct NamePattern {
    source: String,
    regex: Option<Regex>,
}

impl NamePattern {
    /// Compiles `value` into a pattern.
    pub fn new(value: &str) -> Self {
        let normalized = normalize(value);
        let regex = RegexBuilder::new(&regex::escape(&normalized))
            .case_insensitive(true)
            .build()
            .map_err(|e| warn!(value = %value, error = %e, "Name filter failed to compile"))
            .ok();

        Self {
            source: value.to_string(),
            regex,
        }
    }

    /// Returns the value the pattern was built from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Tests the pattern against `name` after normalizing it.
    ///
    /// A pattern that failed to compile matches nothing.
    pub fn is_match(&self, name: &str) -> bool {
        self.regex
            .as_ref()
            .is_some_and(|regex| regex.is_match(&normalize(name)))
    }
}

impl FieldFilter {
    /// Doctor name filter.
    pub fn doctor_name(value: &str) -> Self {
        FieldFilter::DoctorName(NamePattern::new(value))
    }

    /// Patient name filter.
    pub fn patient_name(value: &str) -> Self {
        FieldFilter::PatientName(NamePattern::new(value))
    }

    /// Creation date prefix filter.
    pub fn created_date(prefix: impl Into<String>) -> Self {
        FieldFilter::CreatedDate(prefix.into())
    }

    /// Insurer names filter.
    pub fn insurer_names<T: AsRef<str>>(names: &[T]) -> Self {
        FieldFilter::InsurerNames(names.iter().map(|n| normalize(n.as_ref())).collect())
    }

    /// Returns the query parameter this filter comes from.
    pub fn field(&self) -> &'static str {
        use crate::search::query::keys;

        match self {
            FieldFilter::DoctorName(_) => keys::DOCTOR_NAME,
            FieldFilter::PatientName(_) => keys::PATIENT_NAME,
            FieldFilter::CreatedDate(_) => keys::CREATED_DATE,
            FieldFilter::InsurerNames(_) => keys::INSURER_NAMES,
        }
    }

    /// Tests `consulta` against this filter.
    pub fn matches(&self, consulta: &Consulta) -> bool {
        match self {
            FieldFilter::DoctorName(pattern) => pattern.is_match(&consulta.doctor.name),
            FieldFilter::PatientName(pattern) => pattern.is_match(&consulta.patient.name),
            FieldFilter::CreatedDate(prefix) => consulta.created_at.starts_with(prefix.as_str()),
            FieldFilter::InsurerNames(names) => {
                let insurer = normalize(&consulta.insurer.name);
                names.iter().any(|name| insurer.contains(name.as_str()))
            }
        }
    }
}

/// Conjunction of field filters.
#[derive(Debug, Clone, Default)]
pub struct FilterChain {
    filters: Vec<FieldFilter>,
}

impl FilterChain {
    /// Creates an empty chain that keeps every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the chain for the active fields of `request`.
    pub fn from_request(request: &EffectiveRequest) -> Self {
        let mut chain = Self::new();

        if let Some(name) = &request.doctor_name {
            chain.push(FieldFilter::doctor_name(name));
        }
        if let Some(name) = &request.patient_name {
            chain.push(FieldFilter::patient_name(name));
        }
        if let Some(date) = &request.created_date {
            chain.push(FieldFilter::created_date(date.clone()));
        }
        if !request.insurer_names.is_empty() {
            chain.push(FieldFilter::insurer_names(&request.insurer_names));
        }

        chain
    }

    /// Adds a filter to the chain.
    pub fn push(&mut self, filter: FieldFilter) {
        self.filters.push(filter);
    }

    /// Adds a filter, builder style.
    pub fn with(mut self, filter: FieldFilter) -> Self {
        self.push(filter);
        self
    }

    /// Returns the filters in evaluation order.
    pub fn filters(&self) -> &[FieldFilter] {
        &self.filters
    }

    /// Returns the number of active filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns true if no filter is active.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns true if `consulta` passes every filter.
    pub fn matches(&self, consulta: &Consulta) -> bool {
        self.filters.iter().all(|filter| filter.matches(consulta))
    }

    /// Returns the records that pass every filter, in their original order.
    pub fn apply(&self, records: &[Consulta]) -> Vec<Consulta> {
        records
            .iter()
            .filter(|consulta| self.matches(consulta))
            .cloned()
            .collect()
    }
}

/// Filters `records` by the active fields of `request`.
pub fn apply_filters(records: &[Consulta], request: &EffectiveRequest) -> Vec<Consulta> {
    FilterChain::from_request(request).apply(records)
}
