//! Query string parsing.
//!
//! Turns loosely-typed query parameters into a [`ListQuery`]. Parsing never
//! fails: a value that cannot be read is treated as absent, and defaults are
//! left to [`ListQuery::resolve`].

use std::collections::HashMap;

use crate::types::ListQuery;

/// Query parameter names understood by the listing endpoint.
pub mod keys {
    /// Page number.
    pub const PAGE: &str = "paginaAtual";
    /// Page size.
    pub const PAGE_SIZE: &str = "itensPorPagina";
    /// Creation date prefix.
    pub const CREATED_DATE: &str = "dataCriacao";
    /// Doctor name.
    pub const DOCTOR_NAME: &str = "nomeMedico";
    /// Patient name.
    pub const PATIENT_NAME: &str = "nomePaciente";
    /// Insurer names (comma-separated or repeated).
    pub const INSURER_NAMES: &str = "nomeConvenio";
    /// Sort key.
    pub const SORT_BY: &str = "ordenarPor";
    /// Sort direction.
    pub const SORT_DIRECTION: &str = "ordem";
}

/// A raw query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// The key appeared once.
    Single(String),
    /// The key appeared several times, or the caller supplied a list.
    Many(Vec<String>),
}

impl RawValue {
    /// Returns the first non-empty scalar in this value.
    fn first_non_empty(&self) -> Option<&str> {
        match self {
            RawValue::Single(value) => Some(value.as_str()).filter(|v| !v.is_empty()),
            RawValue::Many(values) => values.iter().map(String::as_str).find(|v| !v.is_empty()),
        }
    }
}

/// Raw query parameters keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuery {
    params: HashMap<String, RawValue>,
}

impl RawQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a query from key/value pairs, collecting repeated keys into
    /// [`RawValue::Many`].
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut query = Self::new();
        for (key, value) in pairs {
            query.append(key, value);
        }
        query
    }

    /// Parses a `application/x-www-form-urlencoded` query string.
    pub fn from_query_string(query: &str) -> Self {
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()).into_owned())
    }

    /// Appends one occurrence of `key`.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        let merged = match self.params.remove(&key) {
            None => RawValue::Single(value),
            Some(RawValue::Single(first)) => RawValue::Many(vec![first, value]),
            Some(RawValue::Many(mut values)) => {
                values.push(value);
                RawValue::Many(values)
            }
        };
        self.params.insert(key, merged);
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: RawValue) {
        self.params.insert(key.into(), value);
    }

    /// Returns the raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.params.get(key)
    }

    /// Returns true if no parameters are present.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Parses raw query parameters into a [`ListQuery`].
///
/// - `paginaAtual`, `itensPorPagina`: unsigned integers, whole-valued decimals
///   such as `2.0` included; anything else is absent.
/// - `nomeMedico`, `nomePaciente`, `dataCriacao`, `ordenarPor`, `ordem`:
///   passed through unchanged; empty is absent.
/// - `nomeConvenio`: a list passes through; a single string is split on `,`
///   with empty segments dropped.
pub fn parse_list_query(raw: &RawQuery) -> ListQuery {
    ListQuery {
        page: parse_number(raw.get(keys::PAGE)),
        page_size: parse_number(raw.get(keys::PAGE_SIZE)),
        doctor_name: parse_string(raw.get(keys::DOCTOR_NAME)),
        patient_name: parse_string(raw.get(keys::PATIENT_NAME)),
        created_date: parse_string(raw.get(keys::CREATED_DATE)),
        insurer_names: parse_list(raw.get(keys::INSURER_NAMES)),
        sort_by: parse_string(raw.get(keys::SORT_BY)),
        sort_direction: parse_string(raw.get(keys::SORT_DIRECTION)),
    }
}

fn parse_number(value: Option<&RawValue>) -> Option<u64> {
    let text = value?.first_non_empty()?.trim();
    if let Ok(number) = text.parse::<u64>() {
        return Some(number);
    }

    // Whole-valued decimals such as `2.0` or `1e1`; fractions are rejected.
    let number: f64 = text.parse().ok()?;
    let whole = number.is_finite() && number >= 0.0 && number.fract() == 0.0;
    (whole && number < u64::MAX as f64).then_some(number as u64)
}

fn parse_string(value: Option<&RawValue>) -> Option<String> {
    value?.first_non_empty().map(str::to_string)
}

fn parse_list(value: Option<&RawValue>) -> Option<Vec<String>> {
    let list: Vec<String> = match value? {
        RawValue::Many(values) => values.clone(),
        RawValue::Single(value) => value
            .split(',')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect(),
    };

    if list.is_empty() { None } else { Some(list) }
}
