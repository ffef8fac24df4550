//! REST surface for the catalog source
//!
//! This module defines the HTTP handlers a host application mounts to
//! expose browsing, resolution and the logo asset:
//!
//! - `GET /logo` - the embedded logo image (unauthenticated)
//! - `GET /browse?id=<identifier>` - catalog listing as JSON
//! - `GET /resolve?id=<identifier>` - playable stream URL + MIME type

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::catalog::{CatalogNode, ResolvedStream};
use crate::error::SourceError;
use crate::source::SoundsMediaSource;

/// Embedded logo served at `/logo` (see [`crate::catalog::LOGO_PATH`])
pub const SOUNDS_LOGO: &[u8] = include_bytes!("../assets/sounds-logo.png");

/// Shared state for the handlers
#[derive(Clone)]
pub struct SoundsState {
    pub source: Arc<SoundsMediaSource>,
}

impl SoundsState {
    pub fn new(source: Arc<SoundsMediaSource>) -> Self {
        Self { source }
    }
}

/// Identifier query parameter for browse and resolve
#[derive(Debug, Deserialize)]
pub struct IdentifierParams {
    /// Media identifier; browse treats absence as the root
    #[serde(default)]
    pub id: String,
}

/// Create the axum router with all catalog endpoints
pub fn create_router(state: SoundsState) -> Router {
    Router::new()
        .route("/logo", axum::routing::get(get_logo))
        .route("/browse", axum::routing::get(browse))
        .route("/resolve", axum::routing::get(resolve))
        .with_state(state)
}

// ============ Handlers ============

async fn get_logo() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/png")], SOUNDS_LOGO)
}

async fn browse(
    State(state): State<SoundsState>,
    Query(params): Query<IdentifierParams>,
) -> Json<CatalogNode> {
    // browse is total; there is no error branch here
    Json(state.source.browse(&params.id).await)
}

async fn resolve(
    State(state): State<SoundsState>,
    Query(params): Query<IdentifierParams>,
) -> Result<Json<ResolvedStream>, AppError> {
    let stream = state.source.resolve(&params.id).await?;
    Ok(Json(stream))
}

// ============ Error mapping ============

struct AppError(SourceError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            SourceError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            SourceError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            SourceError::Unresolvable(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(serde_json::json!({
            "error": self.0.to_string()
        }));

        (status, body).into_response()
    }
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        Self(err)
    }
}
