use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::settings::Auth;
use crate::configs::{SchemaManager, Settings, Storage};
use crate::handles::*;
use crate::middlewares::SessionState;
use crate::repositories::{
    DeviceRepository, SensorReadingRepository, SessionRepository, UserRepository,
    WardrobeItemRepository,
};
use crate::services::{AuthService, SessionService};

pub async fn create_app(settings: &Arc<Settings>) -> Router {
    let storage = Arc::new(
        Storage::new(settings.database.clone(), SchemaManager::default())
            .await
            .expect("Failed to reach the database."),
    );

    build_router(storage, settings.auth.clone())
}

pub fn build_router(storage: Arc<Storage>, auth: Auth) -> Router {
    let user_repository = Arc::new(UserRepository::new(storage.clone()));
    let session_repository = Arc::new(SessionRepository::new(storage.clone()));
    let device_repository = Arc::new(DeviceRepository::new(storage.clone()));
    let wardrobe_item_repository = Arc::new(WardrobeItemRepository::new(storage.clone()));
    let sensor_reading_repository = Arc::new(SensorReadingRepository::new(storage.clone()));

    let auth_service = Arc::new(AuthService::new());
    let session_service = Arc::new(SessionService::new(session_repository, auth));

    let session_state = SessionState {
        session_service: session_service.clone(),
    };

    Router::new()
        .merge(auth_router(AuthState {
            auth_service,
            session_service,
            user_repository,
        }))
        .merge(sensor_router(SensorState {
            sensor_reading_repository,
        }))
        .merge(device_router(
            DeviceState { device_repository },
            session_state.clone(),
        ))
        .merge(wardrobe_router(
            WardrobeState {
                wardrobe_item_repository,
            },
            session_state.clone(),
        ))
        .merge(page_router(session_state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
