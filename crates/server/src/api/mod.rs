//! JSON API over the navigation controller.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use dashboard_core::{Element, Transition};
use shared::{
    domain::{Affordance, PageId},
    error::{ApiError, DashboardError, ErrorCode},
    protocol::{NavigateRequest, NavigateResponse, PageSummary, StateResponse},
};

use crate::app_state::AppState;

pub(crate) type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

pub(crate) fn status_for(error: &DashboardError) -> StatusCode {
    match error {
        DashboardError::InvalidTransitionEvent { .. } => StatusCode::BAD_REQUEST,
        DashboardError::UnknownPage(_) => StatusCode::NOT_FOUND,
        DashboardError::RenderFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn reject(error: DashboardError) -> (StatusCode, Json<ApiError>) {
    (status_for(&error), Json(ApiError::from(&error)))
}

fn internal(error: serde_json::Error) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::new(ErrorCode::Internal, error.to_string())),
    )
}

pub(crate) fn navigate_response(step: &Transition) -> Result<NavigateResponse, serde_json::Error> {
    let nav_styles = step
        .nav_styles()
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(NavigateResponse {
        page: step.page(),
        highlight: step.highlight,
        nav_styles,
        content: serde_json::to_value(&step.content)?,
    })
}

pub(crate) async fn navigate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NavigateRequest>,
) -> ApiResult<NavigateResponse> {
    let step = state
        .controller
        .lock()
        .await
        .handle(&req.event)
        .map_err(reject)?;
    Ok(Json(navigate_response(&step).map_err(internal)?))
}

pub(crate) async fn current_state(State(state): State<Arc<AppState>>) -> Json<StateResponse> {
    let nav = state.controller.lock().await.state();
    Json(StateResponse {
        page: nav.selected,
        highlight: nav.highlight(),
    })
}

pub(crate) async fn list_pages() -> Json<Vec<PageSummary>> {
    Json(Affordance::ALL.into_iter().map(PageSummary::from).collect())
}

/// Renders a page without touching the selected page.
pub(crate) async fn render_page(
    State(state): State<Arc<AppState>>,
    Path(page): Path<String>,
) -> ApiResult<Element> {
    let page = page.parse::<PageId>().map_err(reject)?;
    let registry = *state.controller.lock().await.registry();
    let element = registry.render(page).map_err(reject)?;
    Ok(Json(element))
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
