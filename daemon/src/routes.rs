use std::any::Any;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use bytes::Bytes;
use termfocus_core::{
    error::IngestError,
    events::IngestEvent,
    messages::{ErrorResponse, EventResponse, EventStatus, SessionsResponse},
    refresh::RefreshNotifier,
    store::SessionStore,
};
use thiserror::Error;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::prelude::*;

/// Shared by every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: SessionStore,
    pub refresh: RefreshNotifier,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("{0}")]
    Internal(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Ingest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Producers may post to any path, only `GET /sessions` is reserved.
pub fn router(state: AppState) -> Router {
    with_layers(
        Router::new()
            .route("/", post(ingest_event))
            .route("/{*path}", post(ingest_event))
            .route("/sessions", get(list_sessions)),
    )
    .with_state(state)
}

fn with_layers(routes: Router<AppState>) -> Router<AppState> {
    routes
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}

/// Sole write path into the store. The refresh signal is raised once, after
/// the store has been updated.
#[instrument(skip_all)]
async fn ingest_event(State(state): State<AppState>, body: Bytes) -> ApiResult<Json<EventResponse>> {
    let event = IngestEvent::from_slice(&body).inspect_err(|e| debug!("Rejected event: {e}"))?;

    let response = match event {
        IngestEvent::Register {
            window_id,
            title,
            message,
        } => {
            info!(%window_id, %title, "Registering session");
            state.store.upsert(window_id.clone(), title, message);
            EventResponse {
                status: EventStatus::Registered,
                window_id,
            }
        }
        IngestEvent::Terminate { window_id } => {
            let existed = state.store.remove(&window_id);
            info!(%window_id, existed, "Removing session");
            EventResponse {
                status: EventStatus::Removed,
                window_id,
            }
        }
    };
    state.refresh.notify();

    Ok(Json(response))
}

async fn list_sessions(State(state): State<AppState>) -> Json<SessionsResponse> {
    let sessions = state.store.get_all();
    Json(SessionsResponse {
        count: sessions.len(),
        has_unseen: state.store.has_unseen(),
        sessions,
    })
}

// a handler fault only fails its own request
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown internal error".to_string()
    };
    error!("Request handler panicked: {detail}");
    ApiError::Internal(detail).into_response()
}
