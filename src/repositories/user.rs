use std::sync::Arc;

use sqlx::Error;

use crate::configs::Storage;
use crate::models::User;

pub struct UserRepository {
    storage: Arc<Storage>,
}

impl UserRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub async fn create(&self, item: &User) -> Result<i64, Error> {
        let id = sqlx::query(
            r#"
            INSERT INTO users (username, email, password_hash, location)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&item.username)
        .bind(&item.email)
        .bind(&item.password_hash)
        .bind(&item.location)
        .execute(self.storage.get_pool())
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, Error> {
        let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.storage.get_pool())
            .await?;

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(self.storage.get_pool())
            .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use crate::configs::{Database, SchemaManager};
    use crate::repositories::is_unique_violation;

    use super::*;

    async fn setup_test_db() -> Arc<Storage> {
        Arc::new(
            Storage::new(
                Database {
                    url: String::from("sqlite::memory:"),
                    clean_start: true,
                },
                SchemaManager::default(),
            )
            .await
            .unwrap(),
        )
    }

    fn sample_user(username: &str, email: &str) -> User {
        User {
            id: 0,
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "hashed_password".to_string(),
            location: "Helsinki".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_by_email() {
        let storage = setup_test_db().await;
        let repo = UserRepository::new(storage.clone());

        let id = repo
            .create(&sample_user("alice", "alice@example.com"))
            .await
            .unwrap();

        let found = repo.find_by_email("alice@example.com").await.unwrap();
        assert!(found.is_some());
        let found_user = found.unwrap();
        assert_eq!(found_user.id, id);
        assert_eq!(found_user.username, "alice");

        let found = repo.find_by_id(id).await.unwrap();
        assert_eq!(found.unwrap().email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_unique_violation() {
        let storage = setup_test_db().await;
        let repo = UserRepository::new(storage.clone());

        repo.create(&sample_user("bob", "bob@example.com"))
            .await
            .unwrap();

        let error = repo
            .create(&sample_user("robert", "bob@example.com"))
            .await
            .unwrap_err();

        assert!(is_unique_violation(&error));
    }

    #[tokio::test]
    async fn test_duplicate_username_is_unique_violation() {
        let storage = setup_test_db().await;
        let repo = UserRepository::new(storage.clone());

        repo.create(&sample_user("carol", "carol@example.com"))
            .await
            .unwrap();

        let error = repo
            .create(&sample_user("carol", "other@example.com"))
            .await
            .unwrap_err();

        assert!(is_unique_violation(&error));
    }
}
