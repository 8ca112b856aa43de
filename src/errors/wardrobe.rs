use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum WardrobeError {
    #[error("Wardrobe item not found")]
    ItemNotFound,

    #[error("No update data provided")]
    NoFieldsToUpdate,
}

impl WardrobeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WardrobeError::ItemNotFound => StatusCode::NOT_FOUND,
            WardrobeError::NoFieldsToUpdate => StatusCode::BAD_REQUEST,
        }
    }
}
