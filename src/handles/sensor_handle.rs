use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::errors::{ApiError, SensorError};
use crate::handles::{CreatedResponse, MessageResponse};
use crate::models::{OrderKey, SensorKind, SensorReading, timestamp};
use crate::repositories::{ReadingChanges, ReadingFilter, SensorReadingRepository};

#[derive(Clone)]
pub struct SensorState {
    pub sensor_reading_repository: Arc<SensorReadingRepository>,
}

#[derive(Deserialize)]
pub struct ListQuery {
    #[serde(rename = "order-by")]
    pub order_by: Option<String>,
    #[serde(rename = "start-date")]
    pub start_date: Option<String>,
    #[serde(rename = "end-date")]
    pub end_date: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateReadingRequest {
    pub value: f64,
    pub unit: String,
    pub timestamp: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateReadingRequest {
    pub value: Option<f64>,
    pub unit: Option<String>,
    pub timestamp: Option<String>,
}

pub fn sensor_router(sensor_state: SensorState) -> Router {
    Router::new()
        .route("/api/:sensor_type", get(list_readings).post(create_reading))
        .route("/api/:sensor_type/count", get(count_readings))
        .route(
            "/api/:sensor_type/:id",
            get(get_reading).put(update_reading).delete(delete_reading),
        )
        .with_state(sensor_state)
}

/// Rejects anything outside the table whitelist before storage is touched.
fn parse_kind(raw: &str) -> Result<SensorKind, ApiError> {
    raw.parse::<SensorKind>()
        .map_err(|_| SensorError::UnknownKind.into())
}

fn normalize_timestamp(raw: &str) -> Result<String, ApiError> {
    timestamp::normalize(raw).map_err(|_| SensorError::InvalidTimestamp.into())
}

#[utoipa::path(
    get,
    path = "/api/{sensor_type}/count",
    tag = "sensor",
    params(("sensor_type" = String, Path, description = "One of temperature, humidity, light")),
    responses(
        (status = 200, description = "Number of stored readings", body = i64),
        (status = 404, description = "Sensor type not found")
    )
)]
pub async fn count_readings(
    Path(sensor_type): Path<String>,
    State(state): State<SensorState>,
) -> Result<Json<i64>, ApiError> {
    let kind = parse_kind(&sensor_type)?;

    let count = state.sensor_reading_repository.count(kind).await?;

    Ok(Json(count))
}

#[utoipa::path(
    get,
    path = "/api/{sensor_type}",
    tag = "sensor",
    params(
        ("sensor_type" = String, Path, description = "One of temperature, humidity, light"),
        ("order-by" = Option<String>, Query, description = "value or timestamp, ascending"),
        ("start-date" = Option<String>, Query, description = "Inclusive lower bound, YYYY-MM-DDTHH:MM:SS"),
        ("end-date" = Option<String>, Query, description = "Inclusive upper bound, YYYY-MM-DDTHH:MM:SS")
    ),
    responses(
        (status = 200, description = "Matching readings", body = Vec<SensorReading>),
        (status = 400, description = "Invalid order-by or date bound"),
        (status = 404, description = "Sensor type not found")
    )
)]
pub async fn list_readings(
    Path(sensor_type): Path<String>,
    Query(query): Query<ListQuery>,
    State(state): State<SensorState>,
) -> Result<Json<Vec<SensorReading>>, ApiError> {
    let kind = parse_kind(&sensor_type)?;

    let order = match &query.order_by {
        Some(raw) => Some(
            raw.parse::<OrderKey>()
                .map_err(|_| SensorError::InvalidOrderKey)?,
        ),
        None => None,
    };

    let filter = ReadingFilter {
        start: query
            .start_date
            .as_deref()
            .map(normalize_timestamp)
            .transpose()?,
        end: query
            .end_date
            .as_deref()
            .map(normalize_timestamp)
            .transpose()?,
        order,
    };

    let readings = state
        .sensor_reading_repository
        .find_all(kind, &filter)
        .await?;

    Ok(Json(readings))
}

#[utoipa::path(
    get,
    path = "/api/{sensor_type}/{id}",
    tag = "sensor",
    params(
        ("sensor_type" = String, Path, description = "One of temperature, humidity, light"),
        ("id" = i64, Path, description = "Reading ID")
    ),
    responses(
        (status = 200, description = "The reading", body = SensorReading),
        (status = 404, description = "Sensor type or reading not found")
    )
)]
pub async fn get_reading(
    Path((sensor_type, id)): Path<(String, i64)>,
    State(state): State<SensorState>,
) -> Result<Json<SensorReading>, ApiError> {
    let kind = parse_kind(&sensor_type)?;

    let reading = state
        .sensor_reading_repository
        .find_by_id(kind, id)
        .await?
        .ok_or(SensorError::ReadingNotFound)?;

    Ok(Json(reading))
}

#[utoipa::path(
    post,
    path = "/api/{sensor_type}",
    tag = "sensor",
    params(("sensor_type" = String, Path, description = "One of temperature, humidity, light")),
    request_body = CreateReadingRequest,
    responses(
        (status = 200, description = "Reading stored", body = CreatedResponse),
        (status = 400, description = "Malformed timestamp"),
        (status = 404, description = "Sensor type not found")
    )
)]
pub async fn create_reading(
    Path(sensor_type): Path<String>,
    State(state): State<SensorState>,
    Json(body): Json<CreateReadingRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let kind = parse_kind(&sensor_type)?;

    let timestamp = match &body.timestamp {
        Some(raw) => normalize_timestamp(raw)?,
        None => timestamp::now(),
    };

    let id = state
        .sensor_reading_repository
        .create(kind, body.value, &body.unit, &timestamp)
        .await?;

    Ok(Json(CreatedResponse { id }))
}

#[utoipa::path(
    put,
    path = "/api/{sensor_type}/{id}",
    tag = "sensor",
    params(
        ("sensor_type" = String, Path, description = "One of temperature, humidity, light"),
        ("id" = i64, Path, description = "Reading ID")
    ),
    request_body = UpdateReadingRequest,
    responses(
        (status = 200, description = "Reading updated", body = MessageResponse),
        (status = 400, description = "No fields to update or malformed timestamp"),
        (status = 404, description = "Sensor type or reading not found")
    )
)]
pub async fn update_reading(
    Path((sensor_type, id)): Path<(String, i64)>,
    State(state): State<SensorState>,
    Json(body): Json<UpdateReadingRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let kind = parse_kind(&sensor_type)?;

    let changes = ReadingChanges {
        value: body.value,
        unit: body.unit,
        timestamp: body
            .timestamp
            .as_deref()
            .map(normalize_timestamp)
            .transpose()?,
    };

    if changes.is_empty() {
        return Err(SensorError::NoFieldsToUpdate.into());
    }

    let found = state
        .sensor_reading_repository
        .update(kind, id, &changes)
        .await?;

    if !found {
        return Err(SensorError::ReadingNotFound.into());
    }

    Ok(Json(MessageResponse::new("Updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/{sensor_type}/{id}",
    tag = "sensor",
    params(
        ("sensor_type" = String, Path, description = "One of temperature, humidity, light"),
        ("id" = i64, Path, description = "Reading ID")
    ),
    responses(
        (status = 200, description = "Reading deleted", body = MessageResponse),
        (status = 404, description = "Sensor type or reading not found")
    )
)]
pub async fn delete_reading(
    Path((sensor_type, id)): Path<(String, i64)>,
    State(state): State<SensorState>,
) -> Result<Json<MessageResponse>, ApiError> {
    let kind = parse_kind(&sensor_type)?;

    let found = state.sensor_reading_repository.delete(kind, id).await?;

    if !found {
        return Err(SensorError::ReadingNotFound.into());
    }

    Ok(Json(MessageResponse::new("Deleted successfully")))
}
