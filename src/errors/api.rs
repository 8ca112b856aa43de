use super::{AuthError, DeviceError, SensorError, WardrobeError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication error: {0}")]
    AuthError(#[from] AuthError),

    #[error("Sensor error: {0}")]
    SensorError(#[from] SensorError),

    #[error("Device error: {0}")]
    DeviceError(#[from] DeviceError),

    #[error("Wardrobe error: {0}")]
    WardrobeError(#[from] WardrobeError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
