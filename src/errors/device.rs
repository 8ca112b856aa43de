use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("Device already registered")]
    DeviceIdExists,

    #[error("Device not found")]
    DeviceNotFound,
}

impl DeviceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DeviceError::DeviceIdExists => StatusCode::BAD_REQUEST,
            DeviceError::DeviceNotFound => StatusCode::NOT_FOUND,
        }
    }
}
