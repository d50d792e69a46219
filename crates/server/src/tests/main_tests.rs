use super::*;
use axum::{
    body::{self, Body},
    http::{header, Request},
};
use shared::{
    domain::PageId,
    error::{ApiError, ErrorCode},
    protocol::{NavigateResponse, PageSummary, StateResponse},
};
use tower::ServiceExt;

fn test_app() -> Router {
    let mut controller = NavigationController::new(ViewRegistry::default());
    controller.startup().expect("startup");
    build_router(Arc::new(AppState::new(controller)))
}

async fn body_bytes(response: Response) -> Vec<u8> {
    body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body")
        .to_vec()
}

async fn navigate(app: &Router, trigger: &str) -> Response {
    let request = Request::post("/api/navigate")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({ "trigger": trigger, "n_clicks": 1 }).to_string(),
        ))
        .expect("request");
    app.clone().oneshot(request).await.expect("response")
}

async fn state(app: &Router) -> StateResponse {
    let request = Request::get("/api/state")
        .body(Body::empty())
        .expect("request");
    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    serde_json::from_slice(&body_bytes(response).await).expect("json")
}

#[tokio::test]
async fn healthz_reports_ok() {
    let app = test_app();
    let request = Request::get("/healthz")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"ok");
}

#[tokio::test]
async fn index_starts_on_home() {
    let app = test_app();
    let request = Request::get("/").body(Body::empty()).expect("request");
    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let html = String::from_utf8(body_bytes(response).await).expect("utf8");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Welcome to the Plotly Demo"));
    assert!(html.contains("id=\"page-content\""));

    let current = state(&app).await;
    assert_eq!(current.page, PageId::Home);
    assert_eq!(current.highlight.as_array(), [true, false, false, false]);
}

#[tokio::test]
async fn nav_click_redirects_and_switches_page() {
    let app = test_app();
    let request = Request::post("/nav/nav-charts")
        .body(Body::empty())
        .expect("request");
    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).expect("location"),
        "/"
    );

    let request = Request::get("/").body(Body::empty()).expect("request");
    let response = app.clone().oneshot(request).await.expect("response");
    let html = String::from_utf8(body_bytes(response).await).expect("utf8");
    assert!(html.contains("class=\"graph\""));
    assert_eq!(state(&app).await.page, PageId::Charts);
}

#[tokio::test]
async fn nav_click_with_unknown_trigger_shows_error_and_keeps_state() {
    let app = test_app();
    navigate(&app, "nav-about").await;

    let request = Request::post("/nav/nav-settings")
        .body(Body::empty())
        .expect("request");
    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = String::from_utf8(body_bytes(response).await).expect("utf8");
    assert!(html.contains("id=\"error\""));
    assert!(html.contains("nav-settings"));
    assert!(html.contains("About This Project"));

    assert_eq!(state(&app).await.page, PageId::About);
}

#[tokio::test]
async fn api_navigate_returns_content_styles_and_page() {
    let app = test_app();
    let response = navigate(&app, "nav-data").await;
    assert_eq!(response.status(), StatusCode::OK);

    let dto: NavigateResponse =
        serde_json::from_slice(&body_bytes(response).await).expect("json");
    assert_eq!(dto.page, PageId::Data);
    assert_eq!(dto.highlight.as_array(), [false, false, true, false]);
    assert_eq!(dto.nav_styles.len(), 4);
    for (position, style) in dto.nav_styles.iter().enumerate() {
        let active = style.get("backgroundColor").is_some();
        assert_eq!(active, position == 2);
    }
    assert_eq!(dto.content["type"], "Div");
    assert!(dto.content.to_string().contains("Total sales: 99,000 CNY"));
}

#[tokio::test]
async fn api_event_stream_ends_on_about() {
    let app = test_app();
    for trigger in ["nav-charts", "nav-data", "nav-home", "nav-about"] {
        let response = navigate(&app, trigger).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
    let current = state(&app).await;
    assert_eq!(current.page, PageId::About);
    assert_eq!(current.highlight.as_array(), [false, false, false, true]);
}

#[tokio::test]
async fn api_navigate_rejects_unknown_trigger() {
    let app = test_app();
    let response = navigate(&app, "nav-charts").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = navigate(&app, "page-content").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let err: ApiError = serde_json::from_slice(&body_bytes(response).await).expect("json");
    assert_eq!(err.code, ErrorCode::InvalidTransitionEvent);

    assert_eq!(state(&app).await.page, PageId::Charts);
}

#[tokio::test]
async fn api_lists_pages_in_navbar_order() {
    let app = test_app();
    let request = Request::get("/api/pages")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    let pages: Vec<PageSummary> =
        serde_json::from_slice(&body_bytes(response).await).expect("json");
    let ids: Vec<_> = pages.iter().map(|page| page.element_id.as_str()).collect();
    assert_eq!(ids, ["nav-home", "nav-charts", "nav-data", "nav-about"]);
}

#[tokio::test]
async fn api_render_page_does_not_navigate() {
    let app = test_app();
    let request = Request::get("/api/pages/charts")
        .body(Body::empty())
        .expect("request");
    let response = app.clone().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let tree: serde_json::Value =
        serde_json::from_slice(&body_bytes(response).await).expect("json");
    assert!(tree.to_string().contains("\"type\":\"Graph\""));
    assert_eq!(state(&app).await.page, PageId::Home);
}

#[tokio::test]
async fn api_render_unknown_page_is_not_found() {
    let app = test_app();
    let request = Request::get("/api/pages/settings")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let err: ApiError = serde_json::from_slice(&body_bytes(response).await).expect("json");
    assert_eq!(err.code, ErrorCode::NotFound);
}
