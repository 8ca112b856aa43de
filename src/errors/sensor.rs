use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum SensorError {
    #[error("Sensor type not found")]
    UnknownKind,

    #[error("Data not found")]
    ReadingNotFound,

    #[error("Invalid order-by parameter")]
    InvalidOrderKey,

    #[error("Invalid timestamp, expected YYYY-MM-DDTHH:MM:SS")]
    InvalidTimestamp,

    #[error("No update data provided")]
    NoFieldsToUpdate,
}

impl SensorError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SensorError::UnknownKind => StatusCode::NOT_FOUND,
            SensorError::ReadingNotFound => StatusCode::NOT_FOUND,
            SensorError::InvalidOrderKey => StatusCode::BAD_REQUEST,
            SensorError::InvalidTimestamp => StatusCode::BAD_REQUEST,
            SensorError::NoFieldsToUpdate => StatusCode::BAD_REQUEST,
        }
    }
}
