use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Table;

#[derive(Serialize, Clone, sqlx::FromRow, ToSchema)]
pub struct WardrobeItem {
    pub id: i64,
    pub user_id: i64,
    pub item_name: String,
    pub category: Option<String>,
    pub color: Option<String>,
}

pub struct WardrobeTable;

impl Table for WardrobeTable {
    fn name(&self) -> &'static str {
        "wardrobe"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS wardrobe (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                item_name TEXT NOT NULL,
                category TEXT,
                color TEXT,
                FOREIGN KEY (user_id) REFERENCES users (id)
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS wardrobe;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["users"]
    }
}
