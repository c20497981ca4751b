//! API handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::api::AppState;
use crate::types::Album;
use crate::{Error, Result};

/// Health check with catalogue size
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        albums: state.store.len().await,
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub albums: usize,
}

/// List every album in insertion order
pub async fn list_albums(State(state): State<AppState>) -> Json<Vec<Album>> {
    let albums = state.store.list().await;
    tracing::debug!(count = albums.len(), "Listing albums");
    Json(albums)
}

/// Fetch a single album by id
pub async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> std::result::Result<Json<Album>, ApiError> {
    match state.store.get(&id).await {
        Ok(album) => Ok(Json(album)),
        Err(err) => {
            tracing::warn!(%id, "Album lookup missed");
            Err(err.into())
        }
    }
}

/// Append a new album
///
/// The body is decoded as an [`Album`] whatever the `Content-Type` header
/// says. Missing fields take their defaults; a syntax or type error is
/// rejected with 400 and leaves the store untouched. Ids are not checked for
/// uniqueness.
pub async fn create_album(
    State(state): State<AppState>,
    body: Bytes,
) -> std::result::Result<impl IntoResponse, ApiError> {
    let album = decode_album(&body).map_err(|err| {
        tracing::warn!(error = %err, "Rejected album body");
        ApiError::from(err)
    })?;

    let album = state.store.create(album).await;
    tracing::info!(id = %album.id, title = %album.title, "Created album");

    Ok((StatusCode::CREATED, Json(album)))
}

// A 400 carries the decoder message in the same `{"message": ...}` envelope
// as the 404, not a bare framework body.
fn decode_album(body: &[u8]) -> Result<Album> {
    serde_json::from_slice(body).map_err(|err| Error::invalid_request(err.to_string()))
}

/// Error returned from handlers, rendered as `{"message": ...}`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::AlbumNotFound(_) => ApiError::not_found("album not found"),
            Error::InvalidRequest(msg) => ApiError::bad_request(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(serde_json::json!({
            "message": self.message,
        }));
        (self.status, body).into_response()
    }
}
