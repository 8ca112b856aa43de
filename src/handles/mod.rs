mod auth_handle;
mod device_handle;
mod page_handle;
mod sensor_handle;
mod wardrobe_handle;

pub use auth_handle::*;
pub use device_handle::*;
pub use page_handle::*;
pub use sensor_handle::*;
pub use wardrobe_handle::*;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub id: i64,
}
