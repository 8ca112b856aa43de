use std::sync::Arc;

use anyhow::anyhow;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::errors::{ApiError, AuthError};
use crate::handles::{MessageResponse, login_page, signup_page};
use crate::models::User;
use crate::repositories::{UserRepository, is_unique_violation};
use crate::services::{AuthService, SESSION_COOKIE, SessionService};

#[derive(Clone)]
pub struct AuthState {
    pub auth_service: Arc<AuthService>,
    pub session_service: Arc<SessionService>,
    pub user_repository: Arc<UserRepository>,
}

#[derive(Deserialize, ToSchema)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub location: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

pub fn auth_router(auth_state: AuthState) -> Router {
    Router::new()
        .route("/signup", get(signup_page).post(signup))
        .route("/login", get(login_page).post(login))
        .route("/logout", post(logout))
        .with_state(auth_state)
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .path("/")
        .build()
}

#[utoipa::path(
    post,
    path = "/signup",
    tag = "auth",
    request_body = SignupForm,
    responses(
        (status = 200, description = "Account created, session cookie set", body = MessageResponse),
        (status = 400, description = "Username or email already taken"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn signup(
    State(state): State<AuthState>,
    jar: CookieJar,
    Form(body): Form<SignupForm>,
) -> Result<(CookieJar, Json<MessageResponse>), ApiError> {
    let password_hash = state
        .auth_service
        .hash(&body.password)
        .map_err(|e| anyhow!("Failed to hash password: {}", e))?;

    let user = User {
        id: 0,
        username: body.username.clone(),
        email: body.email.clone(),
        password_hash,
        location: body.location.clone(),
    };

    let id = match state.user_repository.create(&user).await {
        Ok(id) => id,
        Err(e) if is_unique_violation(&e) => return Err(AuthError::AccountExists.into()),
        Err(e) => return Err(e.into()),
    };

    let token = state.session_service.create(id).await?;

    Ok((
        jar.add(session_cookie(token)),
        Json(MessageResponse::new("Signup successful")),
    ))
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginForm,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = MessageResponse),
        (status = 401, description = "Invalid email or password"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn login(
    State(state): State<AuthState>,
    jar: CookieJar,
    Form(body): Form<LoginForm>,
) -> Result<(CookieJar, Json<MessageResponse>), ApiError> {
    let user = state
        .user_repository
        .find_by_email(&body.email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    let result = state
        .auth_service
        .verify(&body.password, &user.password_hash)
        .map_err(|e| anyhow!("Failed to verify password: {}", e))?;

    if !result {
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = state.session_service.create(user.id).await?;

    Ok((
        jar.add(session_cookie(token)),
        Json(MessageResponse::new("Login successful")),
    ))
}

#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Session ended, cookie cleared", body = MessageResponse)
    )
)]
pub async fn logout(
    State(state): State<AuthState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<MessageResponse>), ApiError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.session_service.end(cookie.value()).await?;
    }

    // The cookie is cleared whether or not a session row existed.
    let removal = Cookie::build(SESSION_COOKIE).path("/").build();

    Ok((
        jar.remove(removal),
        Json(MessageResponse::new("Logout successful")),
    ))
}
