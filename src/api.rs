use std::sync::Arc;

use anyhow::{Error, Result, anyhow};
use axum::{
    Router,
    extract::{Path, State},
    response::Json,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    config::Config,
    error::ServiceError,
    models::{
        health::HealthResponse,
        request::{CreateNotificationRequest, ProcessEventRequest},
        response::{EventResponse, NotificationListResponse, NotificationResponse},
    },
    service::NotificationService,
    storage::Storage,
};

pub struct AppState {
    service: NotificationService,
    storage: Arc<Storage>,
    mongo_provided: bool,
}

impl AppState {
    pub fn new(storage: Arc<Storage>, mongo_provided: bool) -> Self {
        Self {
            service: NotificationService::new(storage.clone()),
            storage,
            mongo_provided,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/notifications", post(create_notification))
        .route("/notifications/{user_id}", get(list_notifications))
        .route("/events", post(process_event))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_api_server(config: Config, storage: Arc<Storage>) -> Result<(), Error> {
    let state = Arc::new(AppState::new(storage, config.provided_mongo_uri().is_some()));

    let app = router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow!("Failed to bind {}: {}", addr, e))?;

    info!(address = %addr, "Notification server started");

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow!("Server error: {}", e))?;

    Ok(())
}

async fn root() -> &'static str {
    "Notification Service (POC)"
}

async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        mode: state.storage.mode(),
        mongo_provided: state.mongo_provided,
    })
}

async fn create_notification(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateNotificationRequest>,
) -> Result<Json<NotificationResponse>, ServiceError> {
    let notification = state.service.create_notification(request).await?;

    Ok(Json(NotificationResponse { notification }))
}

async fn process_event(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ProcessEventRequest>,
) -> Result<Json<EventResponse>, ServiceError> {
    let (event, notification) = state.service.process_event(request).await?;

    Ok(Json(EventResponse {
        event,
        notification,
    }))
}

async fn list_notifications(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<NotificationListResponse>, ServiceError> {
    let notifications = state.service.notifications_for_user(&user_id).await?;

    Ok(Json(NotificationListResponse { notifications }))
}
