//! Pagination types for listing responses.

use serde::{Deserialize, Serialize};

use crate::types::Consulta;

/// Page summary returned with every listing ("paginação").
///
/// Derived per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// The requested page, as given (not clamped to `total_pages`).
    #[serde(rename = "paginaAtual")]
    pub current_page: u64,

    /// Items per page.
    #[serde(rename = "itensPorPagina")]
    pub page_size: u64,

    /// `ceil(total_items / page_size)`; zero when there are no items.
    #[serde(rename = "totalDePaginas")]
    pub total_pages: u64,

    /// Number of records matching the filters.
    #[serde(rename = "totalDeItens")]
    pub total_items: u64,

    /// Link to the next page, if one exists.
    #[serde(rename = "nextPageUrl")]
    pub next_page_url: Option<String>,

    /// Link to the previous page, if one exists.
    #[serde(rename = "prevPageUrl")]
    pub prev_page_url: Option<String>,
}

/// The counts part of [`PageMetadata`], before navigation links are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCounts {
    /// The requested page.
    pub current_page: u64,
    /// Items per page.
    pub page_size: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Total number of matching items.
    pub total_items: u64,
}

/// Previous/next links for a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationUrls {
    /// Link to the next page.
    pub next_page_url: Option<String>,
    /// Link to the previous page.
    pub prev_page_url: Option<String>,
}

impl PageMetadata {
    /// Combines counts and navigation links.
    pub fn from_parts(counts: PageCounts, urls: NavigationUrls) -> Self {
        Self {
            current_page: counts.current_page,
            page_size: counts.page_size,
            total_pages: counts.total_pages,
            total_items: counts.total_items,
            next_page_url: urls.next_page_url,
            prev_page_url: urls.prev_page_url,
        }
    }

    /// Returns true if a next page exists.
    pub fn has_next(&self) -> bool {
        self.next_page_url.is_some()
    }

    /// Returns true if a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.prev_page_url.is_some()
    }
}

/// One page of records with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
    /// Records on this page.
    pub data: Vec<Consulta>,

    /// Page summary.
    pub paginacao: PageMetadata,
}
