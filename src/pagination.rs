//! Pagination parameters and the paginated response envelope.
//!
//! List endpoints accept `page`, `pageSize` and `name` query parameters.
//! Values that are missing, non-numeric, zero or negative fall back to the
//! defaults instead of producing an error.

use axum::extract::{Query, rejection::QueryRejection};
use serde::{Deserialize, Serialize};

/// Page used when `page` is absent or invalid.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when `pageSize` is absent or invalid.
pub const DEFAULT_PAGE_SIZE: i64 = 3;

/// Raw list query string, exactly as the client sent it.
///
/// Fields are kept as strings so that `?page=abc` falls back to the default
/// rather than being rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,

    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,

    pub name: Option<String>,
}

/// Normalized list request handed to the query engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-indexed page number, always >= 1
    pub page: i64,

    /// Rows per page, always >= 1
    pub page_size: i64,

    /// Substring filter; `None` when absent or empty
    pub name: Option<String>,
}

impl PageRequest {
    /// Rows to skip before this page starts.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Normalize an extracted query string. A query string that cannot be
    /// decoded at all (e.g. `?page=1&page=2`) falls back to the defaults.
    pub fn from_query(query: Result<Query<ListParams>, QueryRejection>) -> Self {
        match query {
            Ok(Query(params)) => params.into(),
            Err(rejection) => {
                tracing::debug!(%rejection, "undecodable list query, using defaults");
                ListParams::default().into()
            }
        }
    }
}

impl From<ListParams> for PageRequest {
    fn from(params: ListParams) -> Self {
        Self {
            page: positive_or(params.page.as_deref(), DEFAULT_PAGE),
            page_size: positive_or(params.page_size.as_deref(), DEFAULT_PAGE_SIZE),
            // Postgres text cannot hold NUL, so it can never match anyway
            name: params
                .name
                .map(|name| name.replace('\0', ""))
                .filter(|name| !name.is_empty()),
        }
    }
}

fn positive_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

/// Paginated list response.
///
/// # JSON Example
///
/// ```json
/// {
///   "data": [{ "id": 1, "name": "Front Door" }],
///   "total": 1,
///   "page": 1,
///   "pageSize": 3,
///   "totalPages": 1
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: i64, request: &PageRequest) -> Self {
        Self {
            data,
            total,
            page: request.page,
            page_size: request.page_size,
            total_pages: total_pages(total, request.page_size),
        }
    }
}

/// `ceil(total / page_size)`; zero rows means zero pages.
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    if total <= 0 {
        0
    } else {
        (total - 1) / page_size + 1
    }
}
