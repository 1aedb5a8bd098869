use crate::db::pagination::PaginationOpts;
use crate::models::{Post, TermKind, TermWithCount};
use crate::services::filters::PostFilters;
use crate::services::posts::{self, ListPosts};
use crate::services::terms::{self, ListTerms};
use crate::web::error::{ApiError, ApiResult};
use crate::web::state::AppState;
use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct PostListParams {
    pub per_page: Option<usize>,
    pub search: Option<String>,
    pub include: Option<String>,
    pub exclude: Option<String>,
    pub order: Option<String>,
    pub slug: Option<String>,
    pub categories: Option<String>,
    pub categories_exclude: Option<String>,
    pub tags: Option<String>,
    pub tags_exclude: Option<String>,
    pub status: Option<String>,
}

/// GET /posts. Serves the first page only; the body is the bare JSON array.
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PostListParams>,
) -> ApiResult<Json<Vec<Post>>> {
    let args = ListPosts {
        pagination: PaginationOpts::first_page(per_page(&state, params.per_page)),
        search: params.search.filter(|s| !s.is_empty()),
        filters: PostFilters {
            include: csv_ids(params.include.as_deref()),
            exclude: csv_ids(params.exclude.as_deref()),
            slug: csv_strings(params.slug.as_deref()),
            categories: csv_ids(params.categories.as_deref()),
            categories_exclude: csv_ids(params.categories_exclude.as_deref()),
            tags: csv_ids(params.tags.as_deref()),
            tags_exclude: csv_ids(params.tags_exclude.as_deref()),
            month_year: None,
        },
        order: parse_param(params.order.as_deref(), "order")?,
        status: parse_param(params.status.as_deref(), "status")?,
    };

    let result = posts::list_posts(&state.db, args)?;
    Ok(Json(result.page))
}

#[derive(Deserialize)]
pub struct TermListParams {
    pub per_page: Option<usize>,
    pub include: Option<String>,
    pub exclude: Option<String>,
    pub order: Option<String>,
    pub orderby: Option<String>,
    pub hide_empty: Option<bool>,
}

/// GET /categories
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TermListParams>,
) -> ApiResult<Json<Vec<TermWithCount>>> {
    list_terms(state, TermKind::Category, params).await
}

/// GET /tags
pub async fn list_tags(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TermListParams>,
) -> ApiResult<Json<Vec<TermWithCount>>> {
    list_terms(state, TermKind::Tag, params).await
}

async fn list_terms(
    state: Arc<AppState>,
    kind: TermKind,
    params: TermListParams,
) -> ApiResult<Json<Vec<TermWithCount>>> {
    let args = ListTerms {
        pagination: PaginationOpts::first_page(per_page(&state, params.per_page)),
        include: csv_ids(params.include.as_deref()),
        exclude: csv_ids(params.exclude.as_deref()),
        order: parse_param(params.order.as_deref(), "order")?,
        orderby: parse_param(params.orderby.as_deref(), "orderby")?,
        hide_empty: params.hide_empty.unwrap_or(false),
    };

    let result = terms::list_terms(&state.db, kind, args)?;
    Ok(Json(result.page))
}

fn per_page(state: &AppState, requested: Option<usize>) -> usize {
    let api = &state.config.api;
    requested
        .unwrap_or(api.default_page_size)
        .min(api.max_page_size)
        .max(1)
}

fn parse_param<T: FromStr>(value: Option<&str>, name: &str) -> Result<Option<T>, ApiError> {
    match value {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| {
            ApiError::BadParam(format!("invalid value for {name}: {raw:?}"))
        }),
    }
}

/// Comma-separated id list. A parameter that is present but empty yields an
/// empty set, which the inclusion filters treat as matching nothing.
fn csv_ids(raw: Option<&str>) -> Option<Vec<i64>> {
    raw.map(|s| {
        s.split(',')
            .filter(|part| !part.is_empty())
            .filter_map(|part| part.parse().ok())
            .collect()
    })
}

fn csv_strings(raw: Option<&str>) -> Option<Vec<String>> {
    raw.map(|s| {
        s.split(',')
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    })
}
