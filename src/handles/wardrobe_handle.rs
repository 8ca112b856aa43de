use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Extension, Json, Router, middleware};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::errors::{ApiError, WardrobeError};
use crate::handles::{CreatedResponse, MessageResponse};
use crate::middlewares::{SessionState, auth};
use crate::models::{User, WardrobeItem};
use crate::repositories::{WardrobeItemChanges, WardrobeItemRepository};

#[derive(Clone)]
pub struct WardrobeState {
    pub wardrobe_item_repository: Arc<WardrobeItemRepository>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateItemRequest {
    pub item_name: String,
    pub category: Option<String>,
    pub color: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    pub item_name: Option<String>,
    pub category: Option<String>,
    pub color: Option<String>,
}

pub fn wardrobe_router(wardrobe_state: WardrobeState, session_state: SessionState) -> Router {
    Router::new()
        .route("/api/wardrobe", get(list_items).post(create_item))
        .route("/api/wardrobe/:id", put(update_item).delete(delete_item))
        .route_layer(middleware::from_fn_with_state(session_state, auth))
        .with_state(wardrobe_state)
}

#[utoipa::path(
    post,
    path = "/api/wardrobe",
    tag = "wardrobe",
    request_body = CreateItemRequest,
    responses(
        (status = 200, description = "Item stored", body = CreatedResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_item(
    Extension(user): Extension<User>,
    State(state): State<WardrobeState>,
    Json(body): Json<CreateItemRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let id = state
        .wardrobe_item_repository
        .create(
            user.id,
            &body.item_name,
            body.category.as_deref(),
            body.color.as_deref(),
        )
        .await?;

    Ok(Json(CreatedResponse { id }))
}

#[utoipa::path(
    get,
    path = "/api/wardrobe",
    tag = "wardrobe",
    responses(
        (status = 200, description = "Items owned by the caller", body = Vec<WardrobeItem>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_items(
    Extension(user): Extension<User>,
    State(state): State<WardrobeState>,
) -> Result<Json<Vec<WardrobeItem>>, ApiError> {
    let items = state
        .wardrobe_item_repository
        .find_by_user_id(user.id)
        .await?;

    Ok(Json(items))
}

#[utoipa::path(
    put,
    path = "/api/wardrobe/{id}",
    tag = "wardrobe",
    params(("id" = i64, Path, description = "Item ID")),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item updated", body = MessageResponse),
        (status = 400, description = "No fields to update"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Item not found or owned by another user")
    )
)]
pub async fn update_item(
    Extension(user): Extension<User>,
    State(state): State<WardrobeState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateItemRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let changes = WardrobeItemChanges {
        item_name: body.item_name,
        category: body.category,
        color: body.color,
    };

    if changes.is_empty() {
        return Err(WardrobeError::NoFieldsToUpdate.into());
    }

    let found = state
        .wardrobe_item_repository
        .update_owned(id, user.id, &changes)
        .await?;

    if !found {
        return Err(WardrobeError::ItemNotFound.into());
    }

    Ok(Json(MessageResponse::new("Updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/wardrobe/{id}",
    tag = "wardrobe",
    params(("id" = i64, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Item not found or owned by another user")
    )
)]
pub async fn delete_item(
    Extension(user): Extension<User>,
    State(state): State<WardrobeState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = state
        .wardrobe_item_repository
        .delete_owned(id, user.id)
        .await?;

    if !deleted {
        return Err(WardrobeError::ItemNotFound.into());
    }

    Ok(Json(MessageResponse::new("Deleted successfully")))
}
