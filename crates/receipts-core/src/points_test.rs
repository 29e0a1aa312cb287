use chrono::{NaiveDate, NaiveTime};

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: date(2022, 1, 1),
        purchase_time: "13:01".to_string(),
        total: "35.35".to_string(),
        items: vec![
            Item::new("Mountain Dew 12PK", "6.49"),
            Item::new("Emils Cheese Pizza", "12.25"),
            Item::new("Knorr Creamy Chicken", "1.26"),
            Item::new("Doritos Nacho Cheese", "3.35"),
            Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
    }
}

fn gatorade_receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: date(2022, 3, 20),
        purchase_time: "14:33".to_string(),
        total: "9.00".to_string(),
        items: vec![Item::new("Gatorade", "2.25"); 4],
    }
}

// -------------------------------------------------------------------------
// Retailer
// -------------------------------------------------------------------------

#[test]
fn retailer_counts_alphanumerics() {
    assert_eq!(retailer_points("Target"), 6);
    assert_eq!(retailer_points("Walgreens"), 9);
}

#[test]
fn retailer_skips_punctuation_and_spaces() {
    assert_eq!(retailer_points("M&M Corner Market"), 14);
    assert_eq!(retailer_points("  -&- "), 0);
}

#[test]
fn retailer_skips_non_ascii_letters_and_digits() {
    // 'é' and the Arabic-Indic digit are alphanumeric but not ASCII
    assert_eq!(retailer_points("Café ٣"), 3);
    assert_eq!(retailer_points(""), 0);
}

// -------------------------------------------------------------------------
// Total
// -------------------------------------------------------------------------

#[test]
fn total_whole_dollar_earns_both_bonuses() {
    assert_eq!(total_points("9.00"), 75);
    assert_eq!(total_points("0.00"), 75);
}

#[test]
fn total_half_dollar_earns_both_bonuses() {
    assert_eq!(total_points("3.50"), 75);
}

#[test]
fn total_quarter_multiple_earns_quarter_bonus_only() {
    assert_eq!(total_points("1.25"), 25);
    assert_eq!(total_points("0.75"), 25);
}

#[test]
fn total_other_amounts_earn_nothing() {
    assert_eq!(total_points("35.35"), 0);
    assert_eq!(total_points("2.65"), 0);
}

#[test]
fn total_unparseable_earns_nothing() {
    assert_eq!(total_points("1.00.1"), 0);
    assert_eq!(total_points(""), 0);
    assert_eq!(total_points("$9.00"), 0);
}

#[test]
fn total_not_a_number_earns_nothing() {
    assert_eq!(total_points("NaN"), 0);
    assert_eq!(total_points("inf"), 0);
}

// -------------------------------------------------------------------------
// Item count
// -------------------------------------------------------------------------

#[test]
fn item_count_awards_per_pair() {
    let item = Item::new("Gatorade", "2.25");
    assert_eq!(item_count_points(&[]), 0);
    assert_eq!(item_count_points(&vec![item.clone(); 1]), 0);
    assert_eq!(item_count_points(&vec![item.clone(); 2]), 5);
    assert_eq!(item_count_points(&vec![item.clone(); 4]), 10);
    assert_eq!(item_count_points(&vec![item; 5]), 10);
}

// -------------------------------------------------------------------------
// Descriptions
// -------------------------------------------------------------------------

#[test]
fn description_multiple_of_three_rounds_price_up() {
    assert_eq!(
        description_points(&Item::new("Emils Cheese Pizza", "12.25")),
        3
    );
    assert_eq!(description_points(&Item::new("Dasani", "1.40")), 1);
}

#[test]
fn description_is_trimmed_of_spaces_before_measuring() {
    assert_eq!(
        description_points(&Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")),
        3
    );
}

#[test]
fn description_trim_ignores_other_whitespace() {
    // "\tDasani" is 7 bytes: tabs are not trimmed
    assert_eq!(description_points(&Item::new("\tDasani", "1.40")), 0);
}

#[test]
fn description_other_lengths_earn_nothing() {
    assert_eq!(description_points(&Item::new("Mountain Dew 12PK", "6.49")), 0);
    assert_eq!(
        description_points(&Item::new("Knorr Creamy Chicken", "1.26")),
        0
    );
    assert_eq!(description_points(&Item::new("Gatorade", "2.25")), 0);
    assert_eq!(description_points(&Item::new("Pepsi - 12-oz", "1.25")), 0);
}

#[test]
fn description_empty_after_trim_still_qualifies() {
    assert_eq!(description_points(&Item::new("", "12.25")), 3);
    assert_eq!(description_points(&Item::new("    ", "12.25")), 3);
}

#[test]
fn description_bad_price_earns_nothing() {
    assert_eq!(description_points(&Item::new("Dasani", "1.40.1")), 0);
    assert_eq!(description_points(&Item::new("Dasani", "")), 0);
}

#[test]
fn description_zero_and_negative_prices_earn_nothing() {
    assert_eq!(description_points(&Item::new("Dasani", "0.00")), 0);
    assert_eq!(description_points(&Item::new("Dasani", "-5.00")), 0);
}

// -------------------------------------------------------------------------
// Date and time
// -------------------------------------------------------------------------

#[test]
fn odd_day_earns_bonus() {
    assert_eq!(purchase_date_points(date(2022, 1, 1)), 6);
    assert_eq!(purchase_date_points(date(2022, 1, 31)), 6);
}

#[test]
fn even_day_earns_nothing() {
    assert_eq!(purchase_date_points(date(2022, 1, 2)), 0);
    assert_eq!(purchase_date_points(date(2022, 3, 20)), 0);
}

#[test]
fn afternoon_window_earns_bonus() {
    assert_eq!(purchase_time_points("14:01"), 10);
    assert_eq!(purchase_time_points("14:33"), 10);
    assert_eq!(purchase_time_points("15:59"), 10);
}

#[test]
fn afternoon_window_is_exclusive() {
    assert_eq!(purchase_time_points("14:00"), 0);
    assert_eq!(purchase_time_points("16:00"), 0);
    assert_eq!(purchase_time_points("16:30"), 0);
}

#[test]
fn outside_afternoon_earns_nothing() {
    assert_eq!(purchase_time_points("13:01"), 0);
    assert_eq!(purchase_time_points("13:59"), 0);
    assert_eq!(purchase_time_points("08:13"), 0);
}

#[test]
fn malformed_time_earns_nothing() {
    assert_eq!(purchase_time_points("99:99"), 0);
    assert_eq!(purchase_time_points("2pm"), 0);
    assert_eq!(purchase_time_points(""), 0);
}

#[test]
fn loosely_formatted_time_earns_nothing() {
    assert_eq!(purchase_time_points("14:1"), 0);
    assert_eq!(purchase_time_points(" 14:01"), 0);
    assert_eq!(purchase_time_points("14: 01"), 0);
    assert_eq!(purchase_time_points("14:01 "), 0);
    assert_eq!(purchase_time_points("+14:01"), 0);
    assert_eq!(purchase_time_points("014:01"), 0);
    assert_eq!(purchase_time_points("24:00"), 0);
}

#[test]
fn single_digit_hour_is_accepted() {
    assert_eq!(purchase_time_points("9:05"), 0);
    assert_eq!(purchase_time_points("0:00"), 0);
    assert_eq!(parse_clock_time("9:05"), NaiveTime::from_hms_opt(9, 5, 0));
    assert_eq!(parse_clock_time("14:01"), NaiveTime::from_hms_opt(14, 1, 0));
}

// -------------------------------------------------------------------------
// Whole receipts
// -------------------------------------------------------------------------

#[test]
fn target_receipt_scores_28() {
    assert_eq!(calculate_points(&target_receipt()), 28);
}

#[test]
fn gatorade_receipt_scores_109() {
    assert_eq!(calculate_points(&gatorade_receipt()), 109);
}

#[test]
fn breakdown_reports_each_rule() {
    let breakdown = score_breakdown(&gatorade_receipt());
    assert_eq!(
        breakdown,
        PointsBreakdown {
            retailer: 14,
            purchase_total: 75,
            item_count: 10,
            descriptions: 0,
            purchase_date: 0,
            purchase_time: 10,
        }
    );
}

#[test]
fn total_is_sum_of_independent_rules() {
    for receipt in [target_receipt(), gatorade_receipt()] {
        let expected = retailer_points(&receipt.retailer)
            + total_points(&receipt.total)
            + item_count_points(&receipt.items)
            + receipt.items.iter().map(description_points).sum::<u64>()
            + purchase_date_points(receipt.purchase_date)
            + purchase_time_points(&receipt.purchase_time);
        assert_eq!(calculate_points(&receipt), expected);
        assert_eq!(score_breakdown(&receipt).total(), expected);
    }
}

#[test]
fn malformed_fields_only_zero_their_own_rule() {
    let mut receipt = target_receipt();
    receipt.total = "thirty-five".to_string();
    receipt.purchase_time = "99:99".to_string();
    receipt.items[1].price = "twelve".to_string();

    // retailer 6 + pairs 10 + Klarbrunn 3 + odd day 6
    assert_eq!(calculate_points(&receipt), 25);
}

#[test]
fn huge_prices_saturate_instead_of_overflowing() {
    let mut receipt = target_receipt();
    receipt.items = vec![Item::new("Dasani", "1e300"); 3];
    assert_eq!(calculate_points(&receipt), u64::MAX);
}

#[test]
fn scoring_is_deterministic() {
    let receipt = target_receipt();
    assert_eq!(calculate_points(&receipt), calculate_points(&receipt));
}
