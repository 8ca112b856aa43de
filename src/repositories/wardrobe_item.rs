use std::sync::Arc;

use sqlx::Error;

use crate::configs::Storage;
use crate::models::WardrobeItem;

/// Partial update; `None` fields keep their stored value.
#[derive(Default)]
pub struct WardrobeItemChanges {
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub color: Option<String>,
}

impl WardrobeItemChanges {
    pub fn is_empty(&self) -> bool {
        self.item_name.is_none() && self.category.is_none() && self.color.is_none()
    }
}

pub struct WardrobeItemRepository {
    storage: Arc<Storage>,
}

impl WardrobeItemRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub async fn create(
        &self,
        user_id: i64,
        item_name: &str,
        category: Option<&str>,
        color: Option<&str>,
    ) -> Result<i64, Error> {
        let id = sqlx::query(
            r#"
            INSERT INTO wardrobe (user_id, item_name, category, color)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user_id)
        .bind(item_name)
        .bind(category)
        .bind(color)
        .execute(self.storage.get_pool())
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    pub async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<WardrobeItem>, Error> {
        let items: Vec<WardrobeItem> = sqlx::query_as("SELECT * FROM wardrobe WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(self.storage.get_pool())
            .await?;

        Ok(items)
    }

    /// Updates only rows owned by the given user; returns false when the
    /// id is absent or owned by someone else.
    pub async fn update_owned(
        &self,
        id: i64,
        user_id: i64,
        changes: &WardrobeItemChanges,
    ) -> Result<bool, Error> {
        debug_assert!(!changes.is_empty(), "caller must reject empty updates");

        let mut assignments = Vec::new();

        if changes.item_name.is_some() {
            assignments.push("item_name = ?");
        }
        if changes.category.is_some() {
            assignments.push("category = ?");
        }
        if changes.color.is_some() {
            assignments.push("color = ?");
        }

        let sql = format!(
            "UPDATE wardrobe SET {} WHERE id = ? AND user_id = ?",
            assignments.join(", ")
        );

        let mut query = sqlx::query(&sql);
        if let Some(item_name) = &changes.item_name {
            query = query.bind(item_name);
        }
        if let Some(category) = &changes.category {
            query = query.bind(category);
        }
        if let Some(color) = &changes.color {
            query = query.bind(color);
        }

        let result = query
            .bind(id)
            .bind(user_id)
            .execute(self.storage.get_pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_owned(&self, id: i64, user_id: i64) -> Result<bool, Error> {
        let result = sqlx::query("DELETE FROM wardrobe WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(self.storage.get_pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::configs::{Database, SchemaManager};
    use crate::models::User;
    use crate::repositories::UserRepository;

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

    async fn seed_user(storage: &Arc<Storage>, username: &str, email: &str) -> i64 {
        UserRepository::new(storage.clone())
            .create(&User {
                id: 0,
                username: username.to_string(),
                email: email.to_string(),
                password_hash: "hashed_password".to_string(),
                location: "Helsinki".to_string(),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_items_are_scoped_to_user() {
        let storage = setup_test_db().await;
        let alice = seed_user(&storage, "alice", "alice@example.com").await;
        let bob = seed_user(&storage, "bob", "bob@example.com").await;
        let repo = WardrobeItemRepository::new(storage.clone());

        let item_id = repo
            .create(alice, "Raincoat", Some("outerwear"), Some("yellow"))
            .await
            .unwrap();

        assert_eq!(repo.find_by_user_id(alice).await.unwrap().len(), 1);
        assert!(repo.find_by_user_id(bob).await.unwrap().is_empty());

        // Another user can neither update nor delete the row.
        let changes = WardrobeItemChanges {
            color: Some("black".to_string()),
            ..Default::default()
        };
        assert!(!repo.update_owned(item_id, bob, &changes).await.unwrap());
        assert!(!repo.delete_owned(item_id, bob).await.unwrap());

        assert!(repo.update_owned(item_id, alice, &changes).await.unwrap());
        let items = repo.find_by_user_id(alice).await.unwrap();
        assert_eq!(items[0].color.as_deref(), Some("black"));

        assert!(repo.delete_owned(item_id, alice).await.unwrap());
    }
}
