use std::sync::Arc;

use sqlx::Error;

use crate::configs::Storage;
use crate::models::{Session, User};

pub struct SessionRepository {
    storage: Arc<Storage>,
}

impl SessionRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub async fn create(
        &self,
        user_id: i64,
        session_token: &str,
        expires_at: &str,
    ) -> Result<i64, Error> {
        let id = sqlx::query(
            r#"
            INSERT INTO sessions (user_id, session_token, expires_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(user_id)
        .bind(session_token)
        .bind(expires_at)
        .execute(self.storage.get_pool())
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    /// Resolves the owning user, expiry checked inside the query so an
    /// expired row is indistinguishable from an absent one.
    pub async fn find_user_by_token(
        &self,
        session_token: &str,
        now: &str,
    ) -> Result<Option<User>, Error> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT users.* FROM users
            JOIN sessions ON users.id = sessions.user_id
            WHERE sessions.session_token = $1 AND sessions.expires_at > $2
            "#,
        )
        .bind(session_token)
        .bind(now)
        .fetch_optional(self.storage.get_pool())
        .await?;

        Ok(user)
    }

    pub async fn find_by_token(&self, session_token: &str) -> Result<Option<Session>, Error> {
        let session: Option<Session> =
            sqlx::query_as("SELECT * FROM sessions WHERE session_token = $1")
                .bind(session_token)
                .fetch_optional(self.storage.get_pool())
                .await?;

        Ok(session)
    }

    pub async fn delete_by_token(&self, session_token: &str) -> Result<(), Error> {
        sqlx::query("DELETE FROM sessions WHERE session_token = $1")
            .bind(session_token)
            .execute(self.storage.get_pool())
            .await?;

        Ok(())
    }
}
