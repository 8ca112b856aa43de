use axum::response::Html;
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::services::ServeDir;

use crate::middlewares::{SessionState, auth};

/// Page routes. Dashboard and wardrobe require a session; unauthenticated
/// access yields 401 rather than a redirect.
pub fn page_router(session_state: SessionState) -> Router {
    let gated = Router::new()
        .route("/dashboard", get(dashboard_page))
        .route("/wardrobe", get(wardrobe_page))
        .route_layer(middleware::from_fn_with_state(session_state, auth));

    Router::new()
        .route("/", get(home_page))
        .merge(gated)
        .nest_service("/static", ServeDir::new("static"))
}

pub async fn home_page() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

pub async fn login_page() -> Html<&'static str> {
    Html(include_str!("../../static/login.html"))
}

pub async fn signup_page() -> Html<&'static str> {
    Html(include_str!("../../static/signup.html"))
}

pub async fn dashboard_page() -> Html<&'static str> {
    Html(include_str!("../../static/dashboard.html"))
}

pub async fn wardrobe_page() -> Html<&'static str> {
    Html(include_str!("../../static/wardrobe.html"))
}
