//! HTTP request handlers.
//!
//! Only this boundary translates the service's `None`/`false` outcomes
//! into 404s; the service itself never errors on "not found".

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use paylink_types::{AppError, PaymentLinkDraft, PaymentLinkPatch, PaymentLinkRepository};

use crate::PaymentLinkService;

/// Application state shared across handlers.
pub struct AppState<R: PaymentLinkRepository> {
    pub service: PaymentLinkService<R>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<paylink_types::RepoError> for ApiError {
    fn from(err: paylink_types::RepoError) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Create a payment link from a partial record.
#[tracing::instrument(skip(state, draft))]
pub async fn create_payment_link<R: PaymentLinkRepository>(
    State(state): State<Arc<AppState<R>>>,
    Json(draft): Json<PaymentLinkDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let link = state.service.create_payment_link(draft).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// Get a payment link by ID.
#[tracing::instrument(skip(state), fields(link_id = %id))]
pub async fn get_payment_link<R: PaymentLinkRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let link = state
        .service
        .get_payment_link_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Payment link {}", id)))?;

    Ok(Json(link))
}

/// Apply a partial update and return the re-fetched record.
#[tracing::instrument(skip(state, patch), fields(link_id = %id))]
pub async fn update_payment_link<R: PaymentLinkRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
    Json(patch): Json<PaymentLinkPatch>,
) -> Result<impl IntoResponse, ApiError> {
    let link = state
        .service
        .update_payment_link(&id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Payment link {}", id)))?;

    Ok(Json(link))
}

/// Delete a payment link by ID.
#[tracing::instrument(skip(state), fields(link_id = %id))]
pub async fn delete_payment_link<R: PaymentLinkRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state.service.delete_payment_link(&id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Payment link {}", id)).into())
    }
}
