//! Listing pipeline integration tests.
//!
//! These tests drive `ConsultaService::list` from raw query parameters, the
//! same way the REST layer does.

mod common;

use common::*;
use consultas_persistence::search::{RawQuery, normalize, parse_list_query};
use consultas_persistence::types::{ListQuery, ListResponse};

async fn list(pairs: &[(&str, &str)]) -> ListResponse {
    let raw = RawQuery::from_pairs(pairs.iter().copied());
    seeded_service()
        .list(&parse_list_query(&raw))
        .await
        .expect("listing never fails on the in-memory backend")
}

// ============================================================================
// Default Request
// ============================================================================

#[tokio::test]
async fn test_no_params_defaults() {
    let response = list(&[]).await;
    let meta = &response.paginacao;

    assert_eq!(meta.current_page, 1);
    assert_eq!(meta.page_size, 15);
    assert_eq!(meta.total_items, 54);
    assert_eq!(meta.total_pages, 4);
    assert_eq!(response.data.len(), 15);
    assert!(meta.prev_page_url.is_none());
    assert_eq!(
        meta.next_page_url.as_deref(),
        Some("/api/consultas?itensPorPagina=15&paginaAtual=2")
    );

    let instants: Vec<_> = response.data.iter().map(|c| c.created_instant()).collect();
    assert!(instants.windows(2).all(|w| w[0] >= w[1]), "not sorted newest first");
    assert_page_invariants(&response);
}

#[tokio::test]
async fn test_fixed_records_come_first_by_default() {
    // The fixed records are from 2024; generated ones stop at 2023.
    let response = list(&[("itensPorPagina", "4")]).await;
    assert_eq!(page_ids(&response), vec![4, 3, 1, 2]);
}

// ============================================================================
// Filters
// ============================================================================

#[tokio::test]
async fn test_non_existent_doctor() {
    let response = list(&[("nomeMedico", "Non-existent Doctor")]).await;
    let meta = &response.paginacao;

    assert!(response.data.is_empty());
    assert_eq!(meta.total_items, 0);
    assert_eq!(meta.total_pages, 0);
    assert!(meta.next_page_url.is_none());
    assert!(meta.prev_page_url.is_none());
}

#[tokio::test]
async fn test_insurer_scenario() {
    let response = list(&[("nomeConvenio", "Unimed,Bradesco"), ("itensPorPagina", "100")]).await;

    assert!(response.paginacao.total_items >= 3);
    for consulta in &response.data {
        let insurer = normalize(&consulta.insurer.name);
        assert!(
            insurer.contains("unimed") || insurer.contains("bradesco"),
            "unexpected insurer {}",
            consulta.insurer.name
        );
    }
}

#[tokio::test]
async fn test_insurer_accent_and_case_insensitive() {
    let response = list(&[("nomeConvenio", "SULAMERICA"), ("itensPorPagina", "100")]).await;
    assert!(response.data.iter().any(|c| c.id == 4));
    assert!(response.data.iter().all(|c| c.insurer.name == "SulAmérica"));
}

#[tokio::test]
async fn test_doctor_partial_match() {
    let response = list(&[("nomeMedico", "silva")]).await;
    let mut ids = page_ids(&response);
    ids.sort();
    assert_eq!(ids, vec![1, 4]);
}

#[tokio::test]
async fn test_patient_filter() {
    let response = list(&[("nomePaciente", "ana paula")]).await;
    assert_eq!(page_ids(&response), vec![3]);
}

#[tokio::test]
async fn test_created_date_prefix() {
    let response = list(&[("dataCriacao", "2024-09-20")]).await;
    let mut ids = page_ids(&response);
    ids.sort();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_filters_are_conjunctive() {
    let base = list(&[("itensPorPagina", "100")]).await;
    let one = list(&[("itensPorPagina", "100"), ("nomeConvenio", "Unimed")]).await;
    let two = list(&[
        ("itensPorPagina", "100"),
        ("nomeConvenio", "Unimed"),
        ("nomeMedico", "Silva"),
    ])
    .await;
    let three = list(&[
        ("itensPorPagina", "100"),
        ("nomeConvenio", "Unimed"),
        ("nomeMedico", "Silva"),
        ("dataCriacao", "2024-09-20"),
    ])
    .await;

    assert!(one.paginacao.total_items <= base.paginacao.total_items);
    assert!(two.paginacao.total_items <= one.paginacao.total_items);
    assert!(three.paginacao.total_items <= two.paginacao.total_items);
    assert_eq!(page_ids(&three), vec![1]);
}

// ============================================================================
// Sorting
// ============================================================================

#[tokio::test]
async fn test_ascending_is_reverse_of_descending() {
    let records = daily_records(30);
    let service = service_with(records);

    let asc = service
        .list(&ListQuery::new().with_page_size(30).with_sort("dataCriacao", "asc"))
        .await
        .unwrap();
    let desc = service
        .list(&ListQuery::new().with_page_size(30).with_sort("dataCriacao", "desc"))
        .await
        .unwrap();

    let mut reversed = page_ids(&desc);
    reversed.reverse();
    assert_eq!(page_ids(&asc), reversed);
    assert_eq!(page_ids(&asc), (1..=30).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_sort_params_carried_in_links() {
    let response = list(&[("ordenarPor", "dataCriacao"), ("ordem", "asc")]).await;
    let next = response.paginacao.next_page_url.unwrap();
    assert!(next.contains("ordenarPor=dataCriacao"));
    assert!(next.contains("ordem=asc"));
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_links_preserve_filters() {
    let response = list(&[
        ("nomeConvenio", "Unimed,Bradesco"),
        ("nomeMedico", "Medico"),
        ("itensPorPagina", "5"),
    ])
    .await;

    if let Some(next) = &response.paginacao.next_page_url {
        let raw = RawQuery::from_query_string(next.split_once('?').unwrap().1);
        let query = parse_list_query(&raw);

        assert_eq!(query.page, Some(2));
        assert_eq!(query.page_size, Some(5));
        assert_eq!(query.doctor_name.as_deref(), Some("Medico"));
        assert_eq!(
            query.insurer_names,
            Some(vec!["Unimed".to_string(), "Bradesco".to_string()])
        );
    }
}

#[tokio::test]
async fn test_invalid_numbers_fall_back_to_defaults() {
    let response = list(&[("paginaAtual", "abc"), ("itensPorPagina", "-2")]).await;
    assert_eq!(response.paginacao.current_page, 1);
    assert_eq!(response.paginacao.page_size, 15);
}

#[tokio::test]
async fn test_page_past_end_is_empty() {
    let response = list(&[("paginaAtual", "99")]).await;
    assert!(response.data.is_empty());
    assert_eq!(response.paginacao.current_page, 99);
    assert!(response.paginacao.next_page_url.is_none());
    assert!(response.paginacao.prev_page_url.is_none());
}

#[tokio::test]
async fn test_invariants_hold_for_every_page() {
    for page_size in [1u64, 4, 7, 15, 54, 100] {
        let size = page_size.to_string();
        let first = list(&[("itensPorPagina", size.as_str())]).await;
        for page in 1..=first.paginacao.total_pages {
            let page = page.to_string();
            let response = list(&[("itensPorPagina", size.as_str()), ("paginaAtual", page.as_str())]).await;
            assert_page_invariants(&response);
        }
    }
}
