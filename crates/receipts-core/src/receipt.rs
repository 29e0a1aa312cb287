use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A purchase receipt as submitted by a client.
///
/// Amounts and the purchase time stay as the raw text the client sent; each
/// point rule parses what it needs and scores zero when the text is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    /// Calendar date, exactly `YYYY-MM-DD` on the wire.
    #[serde(with = "calendar_date")]
    pub purchase_date: NaiveDate,
    /// Wall-clock time, `HH:MM` on a 24-hour clock, e.g. `"14:33"`.
    pub purchase_time: String,
    /// Decimal amount as text, e.g. `"35.35"`.
    pub total: String,
    pub items: Vec<Item>,
}

/// One line item on a [`Receipt`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    /// Decimal amount as text, same format as [`Receipt::total`].
    pub price: String,
}

impl Item {
    #[must_use]
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// Serde for `YYYY-MM-DD` dates with zero-padded, fixed-width fields.
///
/// chrono's own `FromStr` also takes `2022-1-1` and padded whitespace.
mod calendar_date {
    use chrono::NaiveDate;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub(super) fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&date.format(FORMAT))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw).ok_or_else(|| {
            D::Error::custom(format!("invalid date {raw:?}, expected YYYY-MM-DD"))
        })
    }

    pub(super) fn parse(raw: &str) -> Option<NaiveDate> {
        let fixed_width = raw.len() == 10
            && raw.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !fixed_width {
            return None;
        }
        NaiveDate::parse_from_str(raw, FORMAT).ok()
    }
}
