use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Table;

/// Closed set of sensor kinds. Each kind maps to its own readings table;
/// the table name is only ever taken from this enum, never from request
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    Temperature,
    Humidity,
    Light,
}

impl SensorKind {
    pub fn table(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "temperature",
            SensorKind::Humidity => "humidity",
            SensorKind::Light => "light",
        }
    }
}

impl FromStr for SensorKind {
    type Err = ();

    fn from_str(input: &str) -> Result<SensorKind, Self::Err> {
        match input {
            "temperature" => Ok(SensorKind::Temperature),
            "humidity" => Ok(SensorKind::Humidity),
            "light" => Ok(SensorKind::Light),
            _ => Err(()),
        }
    }
}

/// Sort keys accepted by the list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKey {
    Value,
    Timestamp,
}

impl OrderKey {
    pub fn column(&self) -> &'static str {
        match self {
            OrderKey::Value => "value",
            OrderKey::Timestamp => "timestamp",
        }
    }
}

impl FromStr for OrderKey {
    type Err = ();

    fn from_str(input: &str) -> Result<OrderKey, Self::Err> {
        match input {
            "value" => Ok(OrderKey::Value),
            "timestamp" => Ok(OrderKey::Timestamp),
            _ => Err(()),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, sqlx::FromRow, ToSchema)]
pub struct SensorReading {
    pub id: i64,
    pub value: f64,
    pub unit: String,
    pub timestamp: String,
}

pub struct ReadingTable {
    kind: SensorKind,
}

impl ReadingTable {
    pub fn new(kind: SensorKind) -> Self {
        Self { kind }
    }
}

impl Table for ReadingTable {
    fn name(&self) -> &'static str {
        self.kind.table()
    }

    fn create(&self) -> String {
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                value REAL NOT NULL,
                unit TEXT NOT NULL,
                timestamp DATETIME NOT NULL
            );
            "#,
            self.kind.table()
        )
    }

    fn dispose(&self) -> String {
        format!("DROP TABLE IF EXISTS {};", self.kind.table())
    }

    fn dependencies(&self) -> Vec<&'static str> {
        vec![]
    }
}
