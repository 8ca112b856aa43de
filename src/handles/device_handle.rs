use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{delete, get};
use axum::{Extension, Json, Router, middleware};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::errors::{ApiError, DeviceError};
use crate::handles::MessageResponse;
use crate::middlewares::{SessionState, auth};
use crate::models::{Device, User};
use crate::repositories::{DeviceRepository, is_unique_violation};

#[derive(Clone)]
pub struct DeviceState {
    pub device_repository: Arc<DeviceRepository>,
}

#[derive(Deserialize, ToSchema)]
pub struct RegisterDeviceRequest {
    pub device_id: String,
    pub name: String,
}

pub fn device_router(device_state: DeviceState, session_state: SessionState) -> Router {
    Router::new()
        .route("/devices", get(list_devices).post(register_device))
        .route("/devices/:device_id", delete(delete_device))
        .route_layer(middleware::from_fn_with_state(session_state, auth))
        .with_state(device_state)
}

#[utoipa::path(
    post,
    path = "/devices",
    tag = "device",
    request_body = RegisterDeviceRequest,
    responses(
        (status = 200, description = "Device registered", body = MessageResponse),
        (status = 400, description = "Device ID already registered"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn register_device(
    Extension(user): Extension<User>,
    State(state): State<DeviceState>,
    Json(body): Json<RegisterDeviceRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    match state
        .device_repository
        .create(user.id, &body.device_id, &body.name)
        .await
    {
        Ok(_) => Ok(Json(MessageResponse::new("Device registered successfully"))),
        Err(e) if is_unique_violation(&e) => Err(DeviceError::DeviceIdExists.into()),
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    get,
    path = "/devices",
    tag = "device",
    responses(
        (status = 200, description = "Devices owned by the caller", body = Vec<Device>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_devices(
    Extension(user): Extension<User>,
    State(state): State<DeviceState>,
) -> Result<Json<Vec<Device>>, ApiError> {
    let devices = state.device_repository.find_by_user_id(user.id).await?;

    Ok(Json(devices))
}

#[utoipa::path(
    delete,
    path = "/devices/{device_id}",
    tag = "device",
    params(("device_id" = String, Path, description = "Device ID")),
    responses(
        (status = 200, description = "Device deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Device not found or owned by another user")
    )
)]
pub async fn delete_device(
    Extension(user): Extension<User>,
    State(state): State<DeviceState>,
    Path(device_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = state
        .device_repository
        .delete_owned(&device_id, user.id)
        .await?;

    if !deleted {
        return Err(DeviceError::DeviceNotFound.into());
    }

    Ok(Json(MessageResponse::new("Device deleted successfully")))
}
