//! Listing request types.
//!
//! [`ListQuery`] is what the query parser produces: every field is optional and
//! nothing is defaulted. [`ListQuery::resolve`] is the one place where page,
//! page size and sort defaults are applied, producing an [`EffectiveRequest`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Page number used when the request carries none.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the request carries none.
pub const DEFAULT_PAGE_SIZE: u64 = 15;

/// Upper bound applied to requested page sizes.
pub const DEFAULT_MAX_PAGE_SIZE: u64 = 1000;

/// A parsed listing request. Absent or invalid fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Requested page (1-based).
    pub page: Option<u64>,
    /// Requested page size.
    pub page_size: Option<u64>,
    /// Doctor name substring.
    pub doctor_name: Option<String>,
    /// Patient name substring.
    pub patient_name: Option<String>,
    /// Prefix of the creation timestamp, usually a `YYYY-MM-DD` date.
    pub created_date: Option<String>,
    /// Insurer name substrings; a record matches if any of them matches.
    pub insurer_names: Option<Vec<String>>,
    /// Raw sort key as supplied by the caller.
    pub sort_by: Option<String>,
    /// Raw sort direction as supplied by the caller.
    pub sort_direction: Option<String>,
}

/// Recognized sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Creation timestamp.
    CreatedAt,
}

impl SortKey {
    /// Parses a sort key parameter. Unrecognized keys yield `None`.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "dataCriacao" | "createdAt" => Some(SortKey::CreatedAt),
            _ => None,
        }
    }

    /// Returns the query parameter value for this key.
    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::CreatedAt => "dataCriacao",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Oldest first.
    Asc,
    /// Newest first.
    #[default]
    Desc,
}

impl SortDirection {
    /// Parses `asc` / `desc` (case-insensitive). Anything else yields `None`.
    pub fn from_param(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(SortDirection::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(SortDirection::Desc)
        } else {
            None
        }
    }

    /// Returns the query parameter value for this direction.
    pub fn as_param(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Page size limits used when resolving a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSettings {
    /// Page size applied when the request has none.
    pub default_page_size: u64,
    /// Largest page size a request may ask for.
    pub max_page_size: u64,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

/// A fully resolved listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveRequest {
    /// Page to return (≥ 1).
    pub page: u64,
    /// Items per page (≥ 1).
    pub page_size: u64,
    /// Active doctor name filter.
    pub doctor_name: Option<String>,
    /// Active patient name filter.
    pub patient_name: Option<String>,
    /// Active creation date prefix filter.
    pub created_date: Option<String>,
    /// Active insurer names; empty means no insurer filter.
    pub insurer_names: Vec<String>,
    /// Sort key; `None` keeps the repository order.
    pub sort_key: Option<SortKey>,
    /// Sort direction.
    pub sort_direction: SortDirection,
}

impl ListQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page.
    pub fn with_page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Sets the doctor name filter.
    pub fn with_doctor_name(mut self, name: impl Into<String>) -> Self {
        self.doctor_name = Some(name.into());
        self
    }

    /// Sets the patient name filter.
    pub fn with_patient_name(mut self, name: impl Into<String>) -> Self {
        self.patient_name = Some(name.into());
        self
    }

    /// Sets the creation date prefix filter.
    pub fn with_created_date(mut self, date: impl Into<String>) -> Self {
        self.created_date = Some(date.into());
        self
    }

    /// Sets the insurer names filter.
    pub fn with_insurer_names<I, T>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.insurer_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the sort key and direction.
    pub fn with_sort(mut self, key: impl Into<String>, direction: impl Into<String>) -> Self {
        self.sort_by = Some(key.into());
        self.sort_direction = Some(direction.into());
        self
    }

    /// Applies defaults and limits, producing the request the pipeline runs.
    ///
    /// Zero page numbers and page sizes count as absent. A missing sort key
    /// means creation timestamp; an unrecognized one means no sorting.
    pub fn resolve(&self, settings: &PageSettings) -> EffectiveRequest {
        let page = self.page.filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE);

        let page_size = self
            .page_size
            .filter(|s| *s >= 1)
            .unwrap_or(settings.default_page_size)
            .min(settings.max_page_size)
            .max(1);

        let sort_key = match self.sort_by.as_deref() {
            None | Some("") => Some(SortKey::CreatedAt),
            Some(key) => SortKey::from_param(key),
        };

        let sort_direction = self
            .sort_direction
            .as_deref()
            .and_then(SortDirection::from_param)
            .unwrap_or_default();

        let insurer_names = self
            .insurer_names
            .iter()
            .flatten()
            .filter(|name| !name.is_empty())
            .cloned()
            .collect();

        EffectiveRequest {
            page,
            page_size,
            doctor_name: non_empty(&self.doctor_name),
            patient_name: non_empty(&self.patient_name),
            created_date: non_empty(&self.created_date),
            insurer_names,
            sort_key,
            sort_direction,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
