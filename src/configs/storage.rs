use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Error, SqlitePool};

use crate::configs::schema::SchemaManager;
use crate::configs::settings::Database;

const MAX_CONNECT_ATTEMPTS: u32 = 30;
const CONNECT_RETRY_DELAY: Duration = Duration::from_secs(1);

#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    pub async fn new(database: Database, schema_manager: SchemaManager) -> Result<Self, Error> {
        let pool = Self::connect_with_retry(&database.url).await?;

        Self::create_schema(&pool, &schema_manager, &database).await?;

        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn connect_with_retry(url: &str) -> Result<SqlitePool, Error> {
        let mut attempt = 1u32;

        loop {
            let result = SqlitePoolOptions::new()
                .min_connections(1) // in memory db might drop connection when 0
                .max_connections(10)
                .connect(url)
                .await;

            match result {
                Ok(pool) => return Ok(pool),
                Err(e) if attempt < MAX_CONNECT_ATTEMPTS => {
                    tracing::warn!(
                        "database connection attempt {attempt}/{MAX_CONNECT_ATTEMPTS} failed: {e}"
                    );
                    attempt += 1;
                    tokio::time::sleep(CONNECT_RETRY_DELAY).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn create_schema(
        pool: &SqlitePool,
        schema: &SchemaManager,
        database: &Database,
    ) -> Result<(), Error> {
        if database.clean_start {
            for statement in schema.dispose_schema() {
                sqlx::query(&statement).execute(pool).await?;
            }

            tracing::warn!("perform a clean boot: drop and recreate schema");
        }

        for statement in schema.create_schema() {
            sqlx::query(&statement).execute(pool).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_applies_twice_without_error() {
        let database = Database {
            url: String::from("sqlite::memory:"),
            clean_start: false,
        };

        let storage = Storage::new(database.clone(), SchemaManager::default())
            .await
            .unwrap();

        // A second pass over the same pool must be a no-op.
        Storage::create_schema(storage.get_pool(), &SchemaManager::default(), &database)
            .await
            .unwrap();
    }
}
