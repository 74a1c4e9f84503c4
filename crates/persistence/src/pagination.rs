//! Page metadata, navigation links and slicing.
//!
//! All functions here are pure. [`ConsultaService`](crate::core::ConsultaService)
//! calls them in order: [`calculate_pagination`], [`build_navigation_urls`],
//! then [`slice_for_page`].

use url::form_urlencoded;

use crate::search::keys;
use crate::types::{NavigationUrls, PageCounts};

/// Computes page counts for `total_items` split into pages of `page_size`.
///
/// `total_pages` is `ceil(total_items / page_size)`, and zero when there are no
/// items. `current_page` is reported as given.
///
/// ```
/// use consultas_persistence::pagination::calculate_pagination;
///
/// let counts = calculate_pagination(2, 15, 45);
/// assert_eq!(counts.total_pages, 3);
/// ```
pub fn calculate_pagination(current_page: u64, page_size: u64, total_items: u64) -> PageCounts {
    let total_pages = if page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    };

    PageCounts {
        current_page,
        page_size,
        total_pages,
        total_items,
    }
}

/// Builds the link for `page`, or `None` if it is outside `[1, total_pages]`.
///
/// Parameters without a value, or with an empty one, are left out. The page
/// number is always the last parameter.
pub fn build_page_url(
    base_path: &str,
    page: u64,
    total_pages: u64,
    params: &[(&str, Option<String>)],
) -> Option<String> {
    if page < 1 || page > total_pages {
        return None;
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            serializer.append_pair(key, value);
        }
    }
    serializer.append_pair(keys::PAGE, &page.to_string());

    Some(format!("{}?{}", base_path, serializer.finish()))
}

/// Builds the previous/next links around `current_page`.
pub fn build_navigation_urls(
    base_path: &str,
    current_page: u64,
    total_pages: u64,
    params: &[(&str, Option<String>)],
) -> NavigationUrls {
    let next_page_url = current_page
        .checked_add(1)
        .and_then(|next| build_page_url(base_path, next, total_pages, params));
    let prev_page_url = current_page
        .checked_sub(1)
        .and_then(|prev| build_page_url(base_path, prev, total_pages, params));

    NavigationUrls {
        next_page_url,
        prev_page_url,
    }
}

/// Returns the items on `page` (1-based).
///
/// Pages past the end, page zero, or a zero page size give an empty page.
pub fn slice_for_page<T: Clone>(items: &[T], page: u64, page_size: u64) -> Vec<T> {
    if page == 0 || page_size == 0 {
        return Vec::new();
    }

    let Ok(start) = usize::try_from((page - 1).saturating_mul(page_size)) else {
        return Vec::new();
    };
    let len = usize::try_from(page_size).unwrap_or(usize::MAX);

    items.iter().skip(start).take(len).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "/api/consultas";

    fn params() -> Vec<(&'static str, Option<String>)> {
        vec![
            ("itensPorPagina", Some("15".to_string())),
            ("dataCriacao", None),
            ("nomeConvenio", Some("Unimed,Bradesco".to_string())),
            ("nomeMedico", Some(String::new())),
        ]
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(calculate_pagination(1, 15, 45).total_pages, 3);
        assert_eq!(calculate_pagination(1, 15, 46).total_pages, 4);
        assert_eq!(calculate_pagination(1, 15, 1).total_pages, 1);
        assert_eq!(calculate_pagination(1, 15, 0).total_pages, 0);
    }

    #[test]
    fn test_current_page_not_clamped() {
        let counts = calculate_pagination(9, 10, 12);
        assert_eq!(counts.current_page, 9);
        assert_eq!(counts.total_pages, 2);
    }

    #[test]
    fn test_page_url_format() {
        let url = build_page_url(BASE, 2, 3, &params()).unwrap();
        assert_eq!(
            url,
            "/api/consultas?itensPorPagina=15&nomeConvenio=Unimed%2CBradesco&paginaAtual=2"
        );
    }

    #[test]
    fn test_page_url_out_of_range() {
        assert!(build_page_url(BASE, 0, 3, &params()).is_none());
        assert!(build_page_url(BASE, 4, 3, &params()).is_none());
        assert!(build_page_url(BASE, 1, 0, &params()).is_none());
    }

    #[test]
    fn test_page_url_encodes_values() {
        let params = vec![("nomeMedico", Some("João Silva".to_string()))];
        let url = build_page_url(BASE, 1, 1, &params).unwrap();
        assert_eq!(url, "/api/consultas?nomeMedico=Jo%C3%A3o+Silva&paginaAtual=1");
    }

    #[test]
    fn test_navigation_across_three_pages() {
        let first = build_navigation_urls(BASE, 1, 3, &params());
        assert!(first.next_page_url.is_some());
        assert!(first.prev_page_url.is_none());

        let middle = build_navigation_urls(BASE, 2, 3, &params());
        assert!(middle.next_page_url.unwrap().ends_with("paginaAtual=3"));
        assert!(middle.prev_page_url.unwrap().ends_with("paginaAtual=1"));

        let last = build_navigation_urls(BASE, 3, 3, &params());
        assert!(last.next_page_url.is_none());
        assert!(last.prev_page_url.is_some());
    }

    #[test]
    fn test_navigation_single_and_empty() {
        assert_eq!(build_navigation_urls(BASE, 1, 1, &[]), NavigationUrls::default());
        assert_eq!(build_navigation_urls(BASE, 1, 0, &[]), NavigationUrls::default());
    }

    #[test]
    fn test_navigation_page_past_end() {
        let urls = build_navigation_urls(BASE, 5, 3, &[]);
        assert!(urls.next_page_url.is_none());
        assert!(urls.prev_page_url.is_none());

        let urls = build_navigation_urls(BASE, 4, 3, &[]);
        assert!(urls.next_page_url.is_none());
        assert_eq!(urls.prev_page_url.as_deref(), Some("/api/consultas?paginaAtual=3"));
    }

    #[test]
    fn test_slice_pages() {
        let items: Vec<u32> = (1..=45).collect();
        assert_eq!(slice_for_page(&items, 1, 15), (1..=15).collect::<Vec<_>>());
        assert_eq!(slice_for_page(&items, 3, 15), (31..=45).collect::<Vec<_>>());
        assert!(slice_for_page(&items, 4, 15).is_empty());
    }

    #[test]
    fn test_slice_partial_last_page() {
        let items: Vec<u32> = (1..=7).collect();
        assert_eq!(slice_for_page(&items, 2, 5), vec![6, 7]);
    }

    #[test]
    fn test_slice_degenerate_inputs() {
        let items: Vec<u32> = (1..=7).collect();
        assert!(slice_for_page(&items, 0, 5).is_empty());
        assert!(slice_for_page(&items, 1, 0).is_empty());
        assert!(slice_for_page(&items, u64::MAX, u64::MAX).is_empty());
        assert!(slice_for_page::<u32>(&[], 1, 15).is_empty());
    }
}
