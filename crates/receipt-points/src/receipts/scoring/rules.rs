use super::super::domain::Item;
use super::super::validation::is_word_char;
use super::{ScoreComponent, ScoringRule};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const DESCRIPTION_LENGTH_MULTIPLE: usize = 3;
const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;
const AFTERNOON_START: u32 = 1400;
const AFTERNOON_END: u32 = 1600;

/// One point per `\w` character in the retailer name.
pub fn score_retailer(retailer: &str) -> u64 {
    retailer.chars().filter(|c| is_word_char(*c)).count() as u64
}

/// 50 points for a round-dollar total, plus 25 when the total is a multiple
/// of 0.25. Both bonuses can apply.
pub fn score_total(total: &str) -> u64 {
    let Some(cents) = cents_remainder(total) else {
        return 0;
    };

    let mut points = 0;
    if cents % 100 == 0 {
        points += ROUND_DOLLAR_POINTS;
    }
    if cents % 25 == 0 {
        points += QUARTER_MULTIPLE_POINTS;
    }
    points
}

/// 5 points per pair of items, plus `ceil(price * 0.2)` for every item whose
/// trimmed description length is a multiple of three.
pub fn score_items(items: &[Item]) -> u64 {
    let pairs = ITEM_PAIR_POINTS * (items.len() / 2) as u64;
    items
        .iter()
        .map(description_bonus)
        .fold(pairs, u64::saturating_add)
}

/// 6 points when the day of the month is odd.
pub fn score_date(purchase_date: &str) -> u64 {
    let day = purchase_date
        .split('-')
        .nth(2)
        .and_then(|day| day.parse::<u32>().ok());

    match day {
        Some(day) if day % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

/// 10 points for purchases strictly after 14:00 and strictly before 16:00.
pub fn score_time(purchase_time: &str) -> u64 {
    match clock_value(purchase_time) {
        Some(value) if value > AFTERNOON_START && value < AFTERNOON_END => AFTERNOON_POINTS,
        _ => 0,
    }
}

/// Drop the decimal point and keep the last two digits of the resulting cent
/// count, which is all the divisibility checks need. Text manipulation only,
/// so no float rounding and no overflow on long amounts.
fn cents_remainder(amount: &str) -> Option<u64> {
    let cents = amount.replacen('.', "", 1);
    if cents.is_empty() || !cents.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let tail = &cents[cents.len().saturating_sub(2)..];
    tail.parse().ok()
}

/// `HH:MM` read as the integer `HHMM`.
fn clock_value(purchase_time: &str) -> Option<u32> {
    purchase_time.replacen(':', "", 1).parse().ok()
}

fn description_bonus(item: &Item) -> u64 {
    let trimmed = item.short_description.trim();
    if trimmed.len() % DESCRIPTION_LENGTH_MULTIPLE != 0 {
        return 0;
    }

    match item.price.parse::<f64>() {
        Ok(price) => {
            let bonus = (price * DESCRIPTION_PRICE_MULTIPLIER).ceil();
            if bonus.is_finite() && bonus > 0.0 {
                bonus as u64
            } else {
                0
            }
        }
        Err(_) => 0,
    }
}

pub(crate) fn retailer_component(retailer: &str) -> ScoreComponent {
    let points = score_retailer(retailer);
    ScoreComponent {
        rule: ScoringRule::Retailer,
        points,
        notes: format!("{points} alphanumeric character(s) in '{retailer}'"),
    }
}

pub(crate) fn total_component(total: &str) -> ScoreComponent {
    let points = score_total(total);
    let notes = match points {
        75 => format!("{total} is a round dollar amount and a multiple of 0.25"),
        25 => format!("{total} is a multiple of 0.25"),
        _ => format!("{total} is neither round nor a multiple of 0.25"),
    };
    ScoreComponent {
        rule: ScoringRule::Total,
        points,
        notes,
    }
}

pub(crate) fn items_component(items: &[Item]) -> ScoreComponent {
    let points = score_items(items);
    let pairs = items.len() / 2;
    let matching = items
        .iter()
        .filter(|item| item.short_description.trim().len() % DESCRIPTION_LENGTH_MULTIPLE == 0)
        .count();
    ScoreComponent {
        rule: ScoringRule::Items,
        points,
        notes: format!(
            "{pairs} pair(s) of items; {matching} description(s) with a length divisible by 3"
        ),
    }
}

pub(crate) fn date_component(purchase_date: &str) -> ScoreComponent {
    let points = score_date(purchase_date);
    let notes = if points > 0 {
        format!("{purchase_date} falls on an odd day")
    } else {
        format!("{purchase_date} falls on an even day")
    };
    ScoreComponent {
        rule: ScoringRule::PurchaseDate,
        points,
        notes,
    }
}

pub(crate) fn time_component(purchase_time: &str) -> ScoreComponent {
    let points = score_time(purchase_time);
    let notes = if points > 0 {
        format!("{purchase_time} is between 14:00 and 16:00")
    } else {
        format!("{purchase_time} is outside 14:00-16:00")
    };
    ScoreComponent {
        rule: ScoringRule::PurchaseTime,
        points,
        notes,
    }
}
