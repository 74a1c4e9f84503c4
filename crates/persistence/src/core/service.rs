//! The listing service.

use tracing::debug;

use crate::core::ConsultaRepository;
use crate::error::{StorageError, StorageResult};
use crate::pagination::{build_navigation_urls, calculate_pagination, slice_for_page};
use crate::search::{FilterChain, keys, sort_records};
use crate::types::{
    Consulta, EffectiveRequest, Insurer, ListQuery, ListResponse, PageMetadata, PageSettings,
};

/// Path navigation links are built against.
pub const DEFAULT_BASE_PATH: &str = "/api/consultas";

/// Runs the listing pipeline over a repository.
///
/// The service keeps no per-request state; every call to [`list`](Self::list)
/// reads the repository afresh and derives the response from the request alone.
#[derive(Debug)]
pub struct ConsultaService<R> {
    repository: R,
    settings: PageSettings,
    base_path: String,
}

impl<R: ConsultaRepository> ConsultaService<R> {
    /// Creates a service with default page settings.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            settings: PageSettings::default(),
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }

    /// Sets the page size limits.
    pub fn with_settings(mut self, settings: PageSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the path used in navigation links.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Returns the page size limits.
    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    /// Lists one page of records matching `query`.
    ///
    /// Pipeline: resolve → filter → sort → counts → navigation links → slice.
    /// Only a repository failure makes this return an error; malformed or
    /// out-of-range input degrades to defaults or an empty page.
    pub async fn list(&self, query: &ListQuery) -> StorageResult<ListResponse> {
        let request = query.resolve(&self.settings);
        let records = self.repository.all().await?;

        let chain = FilterChain::from_request(&request);
        let filtered = chain.apply(&records);
        let sorted = sort_records(filtered, request.sort_key, request.sort_direction);

        let total_items = sorted.len() as u64;
        let counts = calculate_pagination(request.page, request.page_size, total_items);
        let params = navigation_params(query, &request);
        let urls = build_navigation_urls(&self.base_path, request.page, counts.total_pages, &params);

        let data = slice_for_page(&sorted, request.page, request.page_size);

        debug!(
            backend = self.repository.backend_name(),
            filters = chain.len(),
            page = request.page,
            page_size = request.page_size,
            total_items,
            returned = data.len(),
            "Listed consultas"
        );

        Ok(ListResponse {
            data,
            paginacao: PageMetadata::from_parts(counts, urls),
        })
    }

    /// Reads one record by id.
    ///
    /// # Errors
    ///
    /// * `StorageError::NotFound` - If no record has that id
    pub async fn get(&self, id: i64) -> StorageResult<Consulta> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| StorageError::not_found(id))
    }

    /// Returns the insurer catalogue used to fill the insurer filter.
    pub async fn insurers(&self) -> StorageResult<Vec<Insurer>> {
        self.repository.insurers().await
    }
}

/// Query parameters carried by navigation links, in link order.
///
/// Filters are re-serialized so links keep the active filter set. The sort
/// parameters are only carried when the caller supplied them.
fn navigation_params(
    query: &ListQuery,
    request: &EffectiveRequest,
) -> Vec<(&'static str, Option<String>)> {
    let insurer_names = (!request.insurer_names.is_empty()).then(|| request.insurer_names.join(","));

    vec![
        (keys::PAGE_SIZE, Some(request.page_size.to_string())),
        (keys::CREATED_DATE, request.created_date.clone()),
        (keys::INSURER_NAMES, insurer_names),
        (keys::DOCTOR_NAME, request.doctor_name.clone()),
        (keys::PATIENT_NAME, request.patient_name.clone()),
        (keys::SORT_BY, query.sort_by.clone()),
        (keys::SORT_DIRECTION, query.sort_direction.clone()),
    ]
}
