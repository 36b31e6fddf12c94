mod rules;

pub use rules::{score_date, score_items, score_retailer, score_time, score_total};

use super::domain::Receipt;
use serde::{Deserialize, Serialize};

/// Rule families contributing to a receipt's points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    Retailer,
    Total,
    Items,
    PurchaseDate,
    PurchaseTime,
}

impl ScoringRule {
    pub fn label(&self) -> &'static str {
        match self {
            ScoringRule::Retailer => "Retailer name",
            ScoringRule::Total => "Receipt total",
            ScoringRule::Items => "Line items",
            ScoringRule::PurchaseDate => "Purchase date",
            ScoringRule::PurchaseTime => "Purchase time",
        }
    }
}

/// Discrete contribution to a score, kept for audits and the CLI breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub rule: ScoringRule,
    pub points: u64,
    pub notes: String,
}

/// Points awarded to a receipt with the per-rule trail that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub total: u64,
    pub components: Vec<ScoreComponent>,
}

impl ScoreCard {
    pub fn component(&self, rule: ScoringRule) -> Option<&ScoreComponent> {
        self.components
            .iter()
            .find(|component| component.rule == rule)
    }
}

/// Apply every rule to a validated receipt. The total is the sum of the
/// component points.
pub fn score_receipt(receipt: &Receipt) -> ScoreCard {
    let components = vec![
        rules::retailer_component(&receipt.retailer),
        rules::total_component(&receipt.total),
        rules::items_component(&receipt.items),
        rules::date_component(&receipt.purchase_date),
        rules::time_component(&receipt.purchase_time),
    ];

    let total = components
        .iter()
        .fold(0u64, |sum, component| sum.saturating_add(component.points));

    ScoreCard { total, components }
}
