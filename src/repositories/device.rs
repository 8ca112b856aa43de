use std::sync::Arc;

use sqlx::Error;

use crate::configs::Storage;
use crate::models::Device;

pub struct DeviceRepository {
    storage: Arc<Storage>,
}

impl DeviceRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub async fn create(&self, user_id: i64, device_id: &str, name: &str) -> Result<i64, Error> {
        let id = sqlx::query(
            r#"
            INSERT INTO devices (device_id, user_id, name)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(device_id)
        .bind(user_id)
        .bind(name)
        .execute(self.storage.get_pool())
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    pub async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Device>, Error> {
        let devices: Vec<Device> = sqlx::query_as("SELECT * FROM devices WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(self.storage.get_pool())
            .await?;

        Ok(devices)
    }

    /// Deletes only when the device belongs to the given user; returns
    /// false otherwise, including when the device_id exists under another
    /// user.
    pub async fn delete_owned(&self, device_id: &str, user_id: i64) -> Result<bool, Error> {
        let result = sqlx::query("DELETE FROM devices WHERE device_id = $1 AND user_id = $2")
            .bind(device_id)
            .bind(user_id)
            .execute(self.storage.get_pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
