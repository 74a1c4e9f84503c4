//! Assertion helpers for listing responses.

use consultas_persistence::types::ListResponse;

/// Asserts the page-level invariants every response must satisfy.
///
/// # Panics
///
/// Panics if the page holds too many records, `total_pages` disagrees with
/// `total_items`, or a navigation link is present when it should not be.
pub fn assert_page_invariants(response: &ListResponse) {
    let meta = &response.paginacao;

    assert!(
        response.data.len() as u64 <= meta.page_size,
        "Page holds {} records but page size is {}",
        response.data.len(),
        meta.page_size
    );
    assert_eq!(
        meta.total_pages,
        meta.total_items.div_ceil(meta.page_size),
        "totalDePaginas mismatch for {} items of {}",
        meta.total_items,
        meta.page_size
    );

    if meta.current_page >= meta.total_pages {
        assert!(meta.next_page_url.is_none(), "Unexpected nextPageUrl on last page");
    } else {
        assert!(meta.next_page_url.is_some(), "Missing nextPageUrl");
    }

    if meta.current_page <= 1 {
        assert!(meta.prev_page_url.is_none(), "Unexpected prevPageUrl on first page");
    } else if meta.current_page <= meta.total_pages {
        assert!(meta.prev_page_url.is_some(), "Missing prevPageUrl");
    }
}

/// Returns the ids on the page, in order.
pub fn page_ids(response: &ListResponse) -> Vec<i64> {
    response.data.iter().map(|c| c.id).collect()
}
