use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque token issued for every scored receipt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(pub String);

impl ReceiptId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Receipt payload as submitted by a client. Fields stay optional so that a
/// missing value surfaces as a validation failure naming the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSubmission {
    #[serde(default)]
    pub retailer: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub purchase_time: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<Option<ItemSubmission>>>,
    #[serde(default)]
    pub total: Option<String>,
}

/// Line item as submitted by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSubmission {
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
}

/// A receipt that passed every format rule. Only the validator builds these
/// from client input; field text is kept verbatim for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedReceipt {
    pub id: ReceiptId,
    pub points: u64,
}

/// `{"id": ...}` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptIdView {
    pub id: ReceiptId,
}

/// `{"points": ...}` response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsView {
    pub points: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_and_whitespace_free() {
        let first = ReceiptId::generate();
        let second = ReceiptId::generate();
        assert_ne!(first, second);
        assert!(!first.as_str().is_empty());
        assert!(!first.as_str().chars().any(char::is_whitespace));
    }

    #[test]
    fn submission_reads_camel_case_and_tolerates_missing_fields() {
        let submission: ReceiptSubmission = serde_json::from_str(
            r#"{"retailer":"Target","purchaseDate":"2022-01-01","items":[{"price":"1.00"}]}"#,
        )
        .expect("submission parses");

        assert_eq!(submission.retailer.as_deref(), Some("Target"));
        assert_eq!(submission.purchase_date.as_deref(), Some("2022-01-01"));
        assert!(submission.purchase_time.is_none());
        assert!(submission.total.is_none());
        let items = submission.items.expect("items present");
        let item = items[0].as_ref().expect("item present");
        assert!(item.short_description.is_none());
        assert_eq!(item.price.as_deref(), Some("1.00"));
    }

    #[test]
    fn submission_rejects_mistyped_fields() {
        let parsed = serde_json::from_str::<ReceiptSubmission>(r#"{"retailer": 42}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn id_view_serializes_as_plain_string() {
        let view = ReceiptIdView {
            id: ReceiptId("abc-123".to_string()),
        };
        assert_eq!(
            serde_json::to_value(view).expect("serializes"),
            serde_json::json!({ "id": "abc-123" })
        );
    }
}
