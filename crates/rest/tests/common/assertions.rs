//! Assertion helpers for API responses.

use axum_test::TestResponse;
use serde_json::Value;

/// Asserts an error body carries `status` and `message`.
pub fn assert_error_body(response: &TestResponse, status: u16, message: &str) {
    let body: Value = response.json();
    assert_eq!(body["statusCode"], status, "statusCode mismatch in {body}");
    assert_eq!(body["statusMessage"], message, "statusMessage mismatch in {body}");
}

/// Returns the record ids in a listing body.
pub fn ids(body: &Value) -> Vec<i64> {
    body["data"]
        .as_array()
        .expect("data must be an array")
        .iter()
        .map(|c| c["id"].as_i64().expect("id must be an integer"))
        .collect()
}

/// Asserts the page-level invariants on a listing body.
pub fn assert_listing_invariants(body: &Value) {
    let meta = &body["paginacao"];
    let page = meta["paginaAtual"].as_u64().unwrap();
    let size = meta["itensPorPagina"].as_u64().unwrap();
    let total_pages = meta["totalDePaginas"].as_u64().unwrap();
    let total_items = meta["totalDeItens"].as_u64().unwrap();

    assert!(ids(body).len() as u64 <= size);
    assert_eq!(total_pages, total_items.div_ceil(size));
    assert_eq!(meta["nextPageUrl"].is_null(), page >= total_pages);
    if page <= total_pages {
        assert_eq!(meta["prevPageUrl"].is_null(), page <= 1);
    }
}
