use std::sync::Arc;

use sqlx::Error;

use crate::configs::Storage;
use crate::models::{OrderKey, SensorKind, SensorReading};

/// Optional list constraints. Bounds are canonical timestamp strings and
/// inclusive on both ends.
#[derive(Default)]
pub struct ReadingFilter {
    pub start: Option<String>,
    pub end: Option<String>,
    pub order: Option<OrderKey>,
}

/// Partial update; `None` fields keep their stored value.
#[derive(Default)]
pub struct ReadingChanges {
    pub value: Option<f64>,
    pub unit: Option<String>,
    pub timestamp: Option<String>,
}

impl ReadingChanges {
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.unit.is_none() && self.timestamp.is_none()
    }
}

pub struct SensorReadingRepository {
    storage: Arc<Storage>,
}

impl SensorReadingRepository {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub async fn count(&self, kind: SensorKind) -> Result<i64, Error> {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", kind.table()))
            .fetch_one(self.storage.get_pool())
            .await?;

        Ok(count)
    }

    pub async fn find_all(
        &self,
        kind: SensorKind,
        filter: &ReadingFilter,
    ) -> Result<Vec<SensorReading>, Error> {
        let mut sql = format!("SELECT * FROM {} WHERE 1=1", kind.table());

        if filter.start.is_some() {
            sql.push_str(" AND timestamp >= ?");
        }
        if filter.end.is_some() {
            sql.push_str(" AND timestamp <= ?");
        }
        if let Some(order) = filter.order {
            sql.push_str(&format!(" ORDER BY {}", order.column()));
        }

        let mut query = sqlx::query_as::<_, SensorReading>(&sql);
        if let Some(start) = &filter.start {
            query = query.bind(start);
        }
        if let Some(end) = &filter.end {
            query = query.bind(end);
        }

        let readings = query.fetch_all(self.storage.get_pool()).await?;

        Ok(readings)
    }

    pub async fn find_by_id(
        &self,
        kind: SensorKind,
        id: i64,
    ) -> Result<Option<SensorReading>, Error> {
        let reading: Option<SensorReading> =
            sqlx::query_as(&format!("SELECT * FROM {} WHERE id = $1", kind.table()))
                .bind(id)
                .fetch_optional(self.storage.get_pool())
                .await?;

        Ok(reading)
    }

    pub async fn create(
        &self,
        kind: SensorKind,
        value: f64,
        unit: &str,
        timestamp: &str,
    ) -> Result<i64, Error> {
        let id = sqlx::query(&format!(
            "INSERT INTO {} (value, unit, timestamp) VALUES ($1, $2, $3)",
            kind.table()
        ))
        .bind(value)
        .bind(unit)
        .bind(timestamp)
        .execute(self.storage.get_pool())
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    /// Returns false when no row with the given id exists.
    pub async fn update(
        &self,
        kind: SensorKind,
        id: i64,
        changes: &ReadingChanges,
    ) -> Result<bool, Error> {
        debug_assert!(!changes.is_empty(), "caller must reject empty updates");

        let mut assignments = Vec::new();

        if changes.value.is_some() {
            assignments.push("value = ?");
        }
        if changes.unit.is_some() {
            assignments.push("unit = ?");
        }
        if changes.timestamp.is_some() {
            assignments.push("timestamp = ?");
        }

        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?",
            kind.table(),
            assignments.join(", ")
        );

        let mut query = sqlx::query(&sql);
        if let Some(value) = changes.value {
            query = query.bind(value);
        }
        if let Some(unit) = &changes.unit {
            query = query.bind(unit);
        }
        if let Some(timestamp) = &changes.timestamp {
            query = query.bind(timestamp);
        }

        let result = query.bind(id).execute(self.storage.get_pool()).await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns false when no row with the given id exists.
    pub async fn delete(&self, kind: SensorKind, id: i64) -> Result<bool, Error> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", kind.table()))
            .bind(id)
            .execute(self.storage.get_pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
