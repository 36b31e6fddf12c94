use std::sync::Arc;

use axum::http::StatusCode;
use tracing::{debug, info, warn};

use super::domain::{ProcessedReceipt, ReceiptId, ReceiptSubmission};
use super::repository::{PointsRepository, RepositoryError};
use super::scoring::score_receipt;
use super::validation::{ReceiptValidator, ValidationError};

/// Service composing the validator, scorer, token issuer, and points store.
pub struct ReceiptService<R> {
    validator: ReceiptValidator,
    repository: Arc<R>,
}

impl<R> ReceiptService<R>
where
    R: PointsRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            validator: ReceiptValidator::new(),
            repository,
        }
    }

    /// Validate and score a submission, storing the points under a fresh id.
    pub fn process(
        &self,
        submission: ReceiptSubmission,
    ) -> Result<ProcessedReceipt, ReceiptServiceError> {
        let receipt = self.validator.validate(submission).map_err(|error| {
            warn!(%error, "receipt rejected");
            error
        })?;

        let card = score_receipt(&receipt);
        let id = ReceiptId::generate();
        self.repository.insert(id.clone(), card.total)?;

        info!(receipt_id = %id, points = card.total, retailer = %receipt.retailer, "receipt processed");

        Ok(ProcessedReceipt {
            id,
            points: card.total,
        })
    }

    /// Look up the points previously awarded to a receipt.
    pub fn points(&self, id: &ReceiptId) -> Result<u64, ReceiptServiceError> {
        let points = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        debug!(receipt_id = %id, points, "points retrieved");
        Ok(points)
    }
}

/// Error raised by the receipt service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ReceiptServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReceiptServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ReceiptServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            ReceiptServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
