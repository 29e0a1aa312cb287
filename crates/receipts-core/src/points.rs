//! Point rules for receipts.
//!
//! A receipt's score is the sum of six independent rules. Every rule is total:
//! text that fails to parse contributes zero instead of failing the receipt.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

use crate::receipt::{Item, Receipt};

pub const ROUND_HALF_DOLLAR_POINTS: u64 = 50;
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
pub const POINTS_PER_ITEM_PAIR: u64 = 5;
pub const ODD_DAY_POINTS: u64 = 6;
pub const AFTERNOON_POINTS: u64 = 10;

const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;

/// Per-rule contributions for one receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub purchase_total: u64,
    pub item_count: u64,
    pub descriptions: u64,
    pub purchase_date: u64,
    pub purchase_time: u64,
}

impl PointsBreakdown {
    /// Sum of all rule contributions, saturating at `u64::MAX`.
    #[must_use]
    pub fn total(&self) -> u64 {
        [
            self.purchase_total,
            self.item_count,
            self.descriptions,
            self.purchase_date,
            self.purchase_time,
        ]
        .into_iter()
        .fold(self.retailer, u64::saturating_add)
    }
}

/// Score every rule for `receipt` separately.
#[must_use]
pub fn score_breakdown(receipt: &Receipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        purchase_total: total_points(&receipt.total),
        item_count: item_count_points(&receipt.items),
        descriptions: receipt
            .items
            .iter()
            .map(description_points)
            .fold(0, u64::saturating_add),
        purchase_date: purchase_date_points(receipt.purchase_date),
        purchase_time: purchase_time_points(&receipt.purchase_time),
    }
}

/// Total points awarded for `receipt`.
#[must_use]
pub fn calculate_points(receipt: &Receipt) -> u64 {
    score_breakdown(receipt).total()
}

/// One point for every ASCII letter or digit in the retailer name.
///
/// Non-ASCII letters and digits score nothing.
#[must_use]
pub fn retailer_points(retailer: &str) -> u64 {
    let count = retailer.chars().filter(char::is_ascii_alphanumeric).count();
    u64::try_from(count).unwrap_or(u64::MAX)
}

/// 50 points if the total is a multiple of `0.50`, plus 25 more if it is a
/// multiple of `0.25`. A whole-dollar total earns both.
#[must_use]
#[allow(clippy::float_cmp)] // the rules compare the remainder to exactly zero
pub fn total_points(total: &str) -> u64 {
    let Ok(value) = total.parse::<f64>() else {
        return 0;
    };

    let mut points = 0;
    if value % 0.50 == 0.0 {
        points += ROUND_HALF_DOLLAR_POINTS;
    }
    if value % 0.25 == 0.0 {
        points += QUARTER_MULTIPLE_POINTS;
    }
    points
}

/// 5 points for every two items; an odd item out earns nothing.
#[must_use]
pub fn item_count_points(items: &[Item]) -> u64 {
    let pairs = u64::try_from(items.len() / 2).unwrap_or(u64::MAX);
    pairs.saturating_mul(POINTS_PER_ITEM_PAIR)
}

/// If the space-trimmed description length is a multiple of 3, the price
/// times `0.2` rounded up. An empty description counts as a multiple of 3.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn description_points(item: &Item) -> u64 {
    let trimmed_len = item.short_description.trim_matches(' ').len();
    if !trimmed_len.is_multiple_of(3) {
        return 0;
    }

    let Ok(price) = item.price.parse::<f64>() else {
        return 0;
    };

    // saturating cast: negative and NaN land on 0
    (price * DESCRIPTION_PRICE_MULTIPLIER).ceil() as u64
}

/// 6 points if the day of the month is odd.
#[must_use]
pub fn purchase_date_points(date: NaiveDate) -> u64 {
    if date.day().is_multiple_of(2) {
        0
    } else {
        ODD_DAY_POINTS
    }
}

/// 10 points if the purchase happened after 14:00 and before 16:00.
///
/// 14:00 itself does not qualify; neither does anything from 16:00 on.
#[must_use]
pub fn purchase_time_points(time: &str) -> u64 {
    let Some(time) = parse_clock_time(time) else {
        return 0;
    };

    let (hour, minute) = (time.hour(), time.minute());
    if (hour == 14 && minute > 0) || hour == 15 {
        AFTERNOON_POINTS
    } else {
        0
    }
}

/// Parse `H:MM` or `HH:MM` on a 24-hour clock.
///
/// Stricter than chrono's `%H:%M`, which also takes a one-digit minute and
/// skips whitespace before each number.
fn parse_clock_time(text: &str) -> Option<NaiveTime> {
    let (hour, minute) = text.split_once(':')?;
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !(1..=2).contains(&hour.len()) || minute.len() != 2 || !digits(hour) || !digits(minute) {
        return None;
    }
    NaiveTime::from_hms_opt(hour.parse().ok()?, minute.parse().ok()?, 0)
}

#[cfg(test)]
#[path = "points_test.rs"]
mod tests;
