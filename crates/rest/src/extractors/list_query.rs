//! Listing query extractor.
//!
//! Collects the query string into a [`RawQuery`] and parses it into a
//! [`ListQuery`]. Unknown keys are ignored and unreadable values are treated
//! as absent, so only a malformed query string is rejected.

use axum::{
    extract::{FromRequestParts, Query, rejection::QueryRejection},
    http::request::Parts,
};
use consultas_persistence::search::{RawQuery, parse_list_query};
use consultas_persistence::types::ListQuery;
use tracing::debug;

use crate::error::RestError;

/// Axum extractor for listing parameters.
///
/// # Example
///
/// ```rust,ignore
/// use consultas_rest::extractors::ListQueryExtractor;
///
/// async fn list_handler(query: ListQueryExtractor) {
///     let page = query.query().page;
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListQueryExtractor {
    query: ListQuery,
}

impl ListQueryExtractor {
    /// Parses raw query parameters.
    pub fn from_raw(raw: &RawQuery) -> Self {
        Self {
            query: parse_list_query(raw),
        }
    }

    /// Returns the parsed query.
    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Consumes the extractor, returning the parsed query.
    pub fn into_inner(self) -> ListQuery {
        self.query
    }
}

impl<S> FromRequestParts<S> for ListQueryExtractor
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(reject_query)?;

        Ok(Self::from_raw(&RawQuery::from_pairs(pairs)))
    }
}

fn reject_query(rejection: QueryRejection) -> RestError {
    debug!(error = %rejection, "Rejected query string");
    RestError::invalid_query()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::to_bytes,
        http::{Request, StatusCode},
        response::IntoResponse,
    };

    async fn extract(uri: &str) -> ListQuery {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        ListQueryExtractor::from_request_parts(&mut parts, &())
            .await
            .unwrap()
            .into_inner()
    }

    #[tokio::test]
    async fn test_no_query_string() {
        assert_eq!(extract("/api/consultas").await, ListQuery::default());
    }

    #[tokio::test]
    async fn test_decodes_values() {
        let query = extract("/api/consultas?nomeMedico=Jo%C3%A3o&paginaAtual=3").await;
        assert_eq!(query.doctor_name.as_deref(), Some("João"));
        assert_eq!(query.page, Some(3));
    }

    #[tokio::test]
    async fn test_repeated_insurer_keys() {
        let query = extract("/api/consultas?nomeConvenio=Unimed&nomeConvenio=Amil").await;
        assert_eq!(
            query.insurer_names,
            Some(vec!["Unimed".to_string(), "Amil".to_string()])
        );
    }

    #[tokio::test]
    async fn test_unknown_and_invalid_values() {
        let query = extract("/api/consultas?foo=bar&itensPorPagina=muitos").await;
        assert_eq!(query.page_size, None);
    }

    #[tokio::test]
    async fn test_rejection_uses_json_error_body() {
        let uri = "/api/consultas?paginaAtual=1".parse().unwrap();
        let rejection = Query::<u32>::try_from_uri(&uri).unwrap_err();

        let response = reject_query(rejection).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["statusMessage"], "Parâmetros de consulta inválidos");
    }
}
