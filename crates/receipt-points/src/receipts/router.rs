use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::domain::{PointsView, ReceiptId, ReceiptIdView, ReceiptSubmission};
use super::repository::{PointsRepository, RepositoryError};
use super::service::{ReceiptService, ReceiptServiceError};

pub(crate) const INVALID_RECEIPT: &str = "The receipt is invalid.";
pub(crate) const RECEIPT_NOT_FOUND: &str = "No receipt found for that ID.";

/// Router builder exposing receipt intake and points lookup.
pub fn receipt_router<R>(service: Arc<ReceiptService<R>>) -> Router
where
    R: PointsRepository + 'static,
{
    Router::new()
        .route("/receipts/process", post(submit_handler::<R>))
        .route("/receipts/:id/points", get(points_handler::<R>))
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    payload: Result<Json<ReceiptSubmission>, JsonRejection>,
) -> Response
where
    R: PointsRepository + 'static,
{
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "receipt payload could not be parsed");
            let payload = json!({
                "description": INVALID_RECEIPT,
                "error": rejection.body_text(),
            });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match service.process(submission) {
        Ok(processed) => {
            let view = ReceiptIdView { id: processed.id };
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(ReceiptServiceError::Validation(error)) => {
            let payload = json!({
                "description": INVALID_RECEIPT,
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn points_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    Path(id): Path<String>,
) -> Response
where
    R: PointsRepository + 'static,
{
    let id = ReceiptId(id);
    match service.points(&id) {
        Ok(points) => (StatusCode::OK, Json(PointsView { points })).into_response(),
        Err(ReceiptServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "description": RECEIPT_NOT_FOUND,
                "error": format!("receipt '{}' not found", id),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (other.status_code(), Json(payload)).into_response()
        }
    }
}
