use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum_extra::extract::cookie::CookieJar;

use crate::errors::{ApiError, AuthError};
use crate::services::{SESSION_COOKIE, SessionService};

#[derive(Clone)]
pub struct SessionState {
    pub session_service: Arc<SessionService>,
}

/// Resolves the session cookie to a user and stores it as a request
/// extension. Missing, unknown and expired tokens all map to 401.
pub async fn auth(
    State(state): State<SessionState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let jar = CookieJar::from_headers(req.headers());

    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or(AuthError::InvalidSession)?;

    let user = state
        .session_service
        .resolve(&token)
        .await?
        .ok_or(AuthError::InvalidSession)?;

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
