use std::sync::Arc;

use uuid::Uuid;

use crate::configs::settings::Auth;
use crate::models::{User, timestamp};
use crate::repositories::SessionRepository;

/// Name of the HTTP-only cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session_token";

#[derive(Clone)]
pub struct SessionService {
    session_repository: Arc<SessionRepository>,
    ttl_hours: i64,
}

impl SessionService {
    pub fn new(session_repository: Arc<SessionRepository>, auth: Auth) -> Self {
        Self {
            session_repository,
            ttl_hours: auth.session_ttl_hours,
        }
    }

    /// Issues an opaque token for the user. Tokens are independent; a user
    /// may hold several at once.
    pub async fn create(&self, user_id: i64) -> Result<String, sqlx::Error> {
        let token = Uuid::new_v4().to_string();
        let expires_at = timestamp::now_plus_hours(self.ttl_hours);

        self.session_repository
            .create(user_id, &token, &expires_at)
            .await?;

        Ok(token)
    }

    /// `None` covers absent, deleted and expired tokens alike; callers
    /// treat it as unauthenticated rather than as a failure.
    pub async fn resolve(&self, token: &str) -> Result<Option<User>, sqlx::Error> {
        self.session_repository
            .find_user_by_token(token, &timestamp::now())
            .await
    }

    pub async fn end(&self, token: &str) -> Result<(), sqlx::Error> {
        self.session_repository.delete_by_token(token).await
    }
}
