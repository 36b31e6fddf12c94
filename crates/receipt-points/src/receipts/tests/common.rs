use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::receipts::domain::{ItemSubmission, ReceiptId, ReceiptSubmission};
use crate::receipts::repository::{InMemoryPointsRepository, PointsRepository, RepositoryError};
use crate::receipts::{receipt_router, Item, Receipt, ReceiptService};

pub(super) fn item(description: &str, price: &str) -> Option<ItemSubmission> {
    Some(ItemSubmission {
        short_description: Some(description.to_string()),
        price: Some(price.to_string()),
    })
}

/// The Target receipt worth 28 points.
pub(super) fn target_submission() -> ReceiptSubmission {
    ReceiptSubmission {
        retailer: Some("Target".to_string()),
        purchase_date: Some("2022-01-01".to_string()),
        purchase_time: Some("13:01".to_string()),
        items: Some(vec![
            item("Mountain Dew 12PK", "6.49"),
            item("Emils Cheese Pizza", "12.25"),
            item("Knorr Creamy Chicken", "1.26"),
            item("Doritos Nacho Cheese", "3.35"),
            item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ]),
        total: Some("35.35".to_string()),
    }
}

/// Corner market receipt worth 109 points.
pub(super) fn corner_market_submission() -> ReceiptSubmission {
    ReceiptSubmission {
        retailer: Some("M&M Corner Market".to_string()),
        purchase_date: Some("2022-03-20".to_string()),
        purchase_time: Some("14:33".to_string()),
        items: Some(vec![
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
        ]),
        total: Some("9.00".to_string()),
    }
}

pub(super) fn receipt(submission: ReceiptSubmission) -> Receipt {
    crate::receipts::ReceiptValidator::new()
        .validate(submission)
        .expect("fixture receipt is valid")
}

pub(super) fn items(entries: &[(&str, &str)]) -> Vec<Item> {
    entries
        .iter()
        .map(|(description, price)| Item {
            short_description: description.to_string(),
            price: price.to_string(),
        })
        .collect()
}

pub(super) fn build_service() -> (
    ReceiptService<InMemoryPointsRepository>,
    Arc<InMemoryPointsRepository>,
) {
    let repository = Arc::new(InMemoryPointsRepository::default());
    let service = ReceiptService::new(repository.clone());
    (service, repository)
}

pub(super) fn router_with_service(
    service: ReceiptService<InMemoryPointsRepository>,
) -> axum::Router {
    receipt_router(Arc::new(service))
}

pub(super) struct UnavailableRepository;

impl PointsRepository for UnavailableRepository {
    fn insert(&self, _id: ReceiptId, _points: u64) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn fetch(&self, _id: &ReceiptId) -> Result<Option<u64>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_bad_request(response: &Response) {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
