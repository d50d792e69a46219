use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use dashboard_core::{NavigationController, ViewRegistry};
use shared::domain::NavEvent;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;
mod html;

use app_state::AppState;
use config::load_settings;

const MAX_REQUEST_BYTES: usize = 16 * 1024;
const PAGE_TITLE: &str = "Plotly Dashboard";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .init();

    let mut controller = NavigationController::new(ViewRegistry::new(settings.sample_seed));
    let initial = controller.startup().map_err(|error| {
        error!(%error, "initial render failed");
        error
    })?;
    info!(page = %initial.page(), seed = settings.sample_seed, "dashboard initialised");

    let app = build_router(Arc::new(AppState::new(controller)));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, debug = settings.debug, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/nav/:trigger", post(nav_click))
        .route("/healthz", get(healthz))
        .route("/api/navigate", post(api::navigate))
        .route("/api/state", get(api::current_state))
        .route("/api/pages", get(api::list_pages))
        .route("/api/pages/:page", get(api::render_page))
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BYTES))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn index(State(state): State<Arc<AppState>>) -> Response {
    let controller = state.controller.lock().await;
    match controller.current() {
        Ok(step) => Html(html::document(PAGE_TITLE, &step.layout())).into_response(),
        Err(error) => {
            error!(%error, "failed to render current page");
            (
                api::status_for(&error),
                Html(html::error_document(&error, None)),
            )
                .into_response()
        }
    }
}

/// A navbar click from the HTML page. Redirects back to `/` on success so a
/// reload does not repeat the click.
async fn nav_click(State(state): State<Arc<AppState>>, Path(trigger): Path<String>) -> Response {
    let mut controller = state.controller.lock().await;
    match controller.handle(&NavEvent::new(trigger.as_str(), 1)) {
        Ok(_) => Redirect::to("/").into_response(),
        Err(error) => {
            warn!(%trigger, %error, "rejected navigation click");
            let current = controller.current().ok().map(|step| step.layout());
            (
                api::status_for(&error),
                Html(html::error_document(&error, current)),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
