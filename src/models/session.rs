use serde::Serialize;

use crate::models::Table;

#[derive(Serialize, Clone, sqlx::FromRow)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    pub session_token: String,
    pub expires_at: String,
}

pub struct SessionTable;

impl Table for SessionTable {
    fn name(&self) -> &'static str {
        "sessions"
    }

    fn create(&self) -> String {
        String::from(
            r#"
            CREATE TABLE IF NOT EXISTS sessions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                session_token TEXT NOT NULL UNIQUE,
                expires_at DATETIME NOT NULL,
                FOREIGN KEY (user_id) REFERENCES users (id)
            );
            "#,
        )
    }

    fn dispose(&self) -> String {
        String::from("DROP TABLE IF EXISTS sessions;")
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec!["users"]
    }
}
