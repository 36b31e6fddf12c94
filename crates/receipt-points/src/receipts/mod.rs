//! Receipt intake: validation, points scoring, storage, and the HTTP surface.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Item, ItemSubmission, PointsView, ProcessedReceipt, Receipt, ReceiptId, ReceiptIdView,
    ReceiptSubmission,
};
pub use repository::{InMemoryPointsRepository, PointsRepository, RepositoryError};
pub use router::receipt_router;
pub use scoring::{
    score_date, score_items, score_receipt, score_retailer, score_time, score_total,
    ScoreCard, ScoreComponent, ScoringRule,
};
pub use service::{ReceiptService, ReceiptServiceError};
pub use validation::{ReceiptValidator, ValidationError};
