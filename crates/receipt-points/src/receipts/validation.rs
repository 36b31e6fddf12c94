use chrono::{NaiveDate, NaiveTime};

use super::domain::{Item, ItemSubmission, Receipt, ReceiptSubmission};

/// Format rule failures raised while validating a submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("retailer '{0}' may only contain letters, digits, underscores, spaces, '-' and '&'")]
    InvalidRetailer(String),
    #[error("purchaseDate '{0}' is not a valid YYYY-MM-DD date")]
    InvalidPurchaseDate(String),
    #[error("purchaseTime '{0}' is not a valid 24-hour HH:MM time")]
    InvalidPurchaseTime(String),
    #[error("items must contain at least one entry")]
    EmptyItems,
    #[error("items[{index}] is required")]
    MissingItem { index: usize },
    #[error("items[{index}].{field} is required")]
    MissingItemField { index: usize, field: &'static str },
    #[error("items[{index}].shortDescription '{value}' may only contain letters, digits, underscores, spaces and '-'")]
    InvalidItemDescription { index: usize, value: String },
    #[error("items[{index}].price '{value}' must look like 12.34")]
    InvalidItemPrice { index: usize, value: String },
    #[error("total '{0}' must look like 12.34")]
    InvalidTotal(String),
}

/// Stateless gatekeeper turning raw submissions into scorable receipts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptValidator;

impl ReceiptValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, submission: ReceiptSubmission) -> Result<Receipt, ValidationError> {
        let retailer = required(submission.retailer, "retailer")?;
        if !is_retailer_name(&retailer) {
            return Err(ValidationError::InvalidRetailer(retailer));
        }

        let purchase_date = required(submission.purchase_date, "purchaseDate")?;
        if !is_calendar_date(&purchase_date) {
            return Err(ValidationError::InvalidPurchaseDate(purchase_date));
        }

        let purchase_time = required(submission.purchase_time, "purchaseTime")?;
        if !is_clock_time(&purchase_time) {
            return Err(ValidationError::InvalidPurchaseTime(purchase_time));
        }

        let submitted_items = submission
            .items
            .ok_or(ValidationError::MissingField("items"))?;
        if submitted_items.is_empty() {
            return Err(ValidationError::EmptyItems);
        }
        let items = submitted_items
            .into_iter()
            .enumerate()
            .map(|(index, item)| validate_item(index, item))
            .collect::<Result<Vec<_>, _>>()?;

        let total = required(submission.total, "total")?;
        if !is_price(&total) {
            return Err(ValidationError::InvalidTotal(total));
        }

        Ok(Receipt {
            retailer,
            purchase_date,
            purchase_time,
            items,
            total,
        })
    }
}

fn validate_item(index: usize, item: Option<ItemSubmission>) -> Result<Item, ValidationError> {
    let item = item.ok_or(ValidationError::MissingItem { index })?;

    let short_description = item
        .short_description
        .filter(|value| !value.is_empty())
        .ok_or(ValidationError::MissingItemField {
            index,
            field: "shortDescription",
        })?;
    if !is_item_description(&short_description) {
        return Err(ValidationError::InvalidItemDescription {
            index,
            value: short_description,
        });
    }

    let price = item
        .price
        .filter(|value| !value.is_empty())
        .ok_or(ValidationError::MissingItemField {
            index,
            field: "price",
        })?;
    if !is_price(&price) {
        return Err(ValidationError::InvalidItemPrice { index, value: price });
    }

    Ok(Item {
        short_description,
        price,
    })
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(ValidationError::MissingField(field))
}

/// `\w`: ASCII letters, digits and underscore.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `\s`: tab, newline, form feed, carriage return and space.
fn is_space_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\u{c}' | '\r' | ' ')
}

/// `^[\w\s\-&]+$`
pub(crate) fn is_retailer_name(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| is_word_char(c) || is_space_char(c) || c == '-' || c == '&')
}

/// `^[\w\s\-]+$`
pub(crate) fn is_item_description(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| is_word_char(c) || is_space_char(c) || c == '-')
}

/// `^\d+\.\d{2}$`
pub(crate) fn is_price(value: &str) -> bool {
    match value.split_once('.') {
        Some((dollars, cents)) => {
            !dollars.is_empty()
                && dollars.bytes().all(|b| b.is_ascii_digit())
                && cents.len() == 2
                && cents.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// Exactly `YYYY-MM-DD` naming a real calendar day.
pub(crate) fn is_calendar_date(value: &str) -> bool {
    has_shape(value, "dddd-dd-dd") && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Exactly `HH:MM` on a 24-hour clock. A single-digit hour such as `9:30`
/// is rejected even though Go-style `15:04` layouts would accept it.
pub(crate) fn is_clock_time(value: &str) -> bool {
    has_shape(value, "dd:dd") && NaiveTime::parse_from_str(value, "%H:%M").is_ok()
}

/// `d` in the template stands for an ASCII digit; everything else must match literally.
fn has_shape(value: &str, template: &str) -> bool {
    value.len() == template.len()
        && value
            .bytes()
            .zip(template.bytes())
            .all(|(actual, expected)| match expected {
                b'd' => actual.is_ascii_digit(),
                literal => actual == literal,
            })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retailer_pattern_allows_ampersand_and_hyphen() {
        assert!(is_retailer_name("M&M Corner Market"));
        assert!(is_retailer_name("Walgreens-East_2"));
        assert!(!is_retailer_name("+"));
        assert!(!is_retailer_name("Target!"));
        assert!(!is_retailer_name(""));
        assert!(!is_retailer_name("Café"));
    }

    #[test]
    fn description_pattern_rejects_ampersand() {
        assert!(is_item_description("   Klarbrunn 12-PK 12 FL OZ  "));
        assert!(!is_item_description("Salt & Pepper"));
        assert!(!is_item_description("Chips."));
    }

    #[test]
    fn price_pattern_needs_exactly_two_fraction_digits() {
        assert!(is_price("0.00"));
        assert!(is_price("0012.25"));
        assert!(!is_price("0000000000"));
        assert!(!is_price("-123.45"));
        assert!(!is_price("12.5"));
        assert!(!is_price("12.345"));
        assert!(!is_price(".99"));
        assert!(!is_price("1.2.34"));
        assert!(!is_price("+1.00"));
    }

    #[test]
    fn dates_must_be_padded_and_real() {
        assert!(is_calendar_date("2022-01-01"));
        assert!(is_calendar_date("2024-02-29"));
        assert!(!is_calendar_date("2023-02-29"));
        assert!(!is_calendar_date("2022-1-01"));
        assert!(!is_calendar_date("123"));
        assert!(!is_calendar_date("2022/01/01"));
        assert!(!is_calendar_date("2022-13-01"));
    }

    #[test]
    fn times_use_the_twenty_four_hour_clock() {
        assert!(is_clock_time("00:00"));
        assert!(is_clock_time("23:59"));
        assert!(is_clock_time("14:01"));
        assert!(!is_clock_time("24:00"));
        assert!(!is_clock_time("12:60"));
        assert!(!is_clock_time("9:30"));
        assert!(!is_clock_time("123"));
        assert!(!is_clock_time("2:30pm"));
    }
}
