//! Raw and denormalized price records.

use core::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::PricegridError;

/// Canonical textual date format for every date in the workspace.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a zero-padded `YYYY-MM-DD` calendar date.
///
/// Only the fixed-width form is accepted so that textual and chronological
/// ordering of inputs agree.
///
/// # Errors
/// Returns `Err(PricegridError::Parse)` carrying the offending value when the
/// string is not shaped `DDDD-DD-DD` or is not a valid calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, PricegridError> {
    if !is_padded_iso(value.as_bytes()) {
        return Err(PricegridError::parse(value, "expected YYYY-MM-DD"));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| PricegridError::parse(value, e.to_string()))
}

// chrono alone accepts a signed year and skips leading spaces in numeric fields.
fn is_padded_iso(bytes: &[u8]) -> bool {
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Identifier of the commercial position a price is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PositionId(pub u64);

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PositionId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A point-in-time price rule.
///
/// Starting on `order_date_from`, orders for delivery starting on
/// `delivery_date_from` are priced at `price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPrice {
    /// Position the rule applies to.
    pub position_id: PositionId,
    /// First order date the rule applies to.
    pub order_date_from: NaiveDate,
    /// First delivery date the rule applies to.
    pub delivery_date_from: NaiveDate,
    /// Price amount.
    pub price: Decimal,
}

impl RawPrice {
    /// Build a raw price from already-typed dates.
    #[must_use]
    pub const fn new(
        position_id: PositionId,
        order_date_from: NaiveDate,
        delivery_date_from: NaiveDate,
        price: Decimal,
    ) -> Self {
        Self {
            position_id,
            order_date_from,
            delivery_date_from,
            price,
        }
    }

    /// Build a raw price from `YYYY-MM-DD` date strings.
    ///
    /// # Errors
    /// Returns `Err(PricegridError::Parse)` if either date is malformed.
    pub fn parse(
        position_id: impl Into<PositionId>,
        order_date_from: &str,
        delivery_date_from: &str,
        price: Decimal,
    ) -> Result<Self, PricegridError> {
        Ok(Self {
            position_id: position_id.into(),
            order_date_from: parse_date(order_date_from)?,
            delivery_date_from: parse_date(delivery_date_from)?,
            price,
        })
    }
}

/// Wire form of a raw price with dates kept as text.
///
/// Used for JSON input where dates must be validated before they reach the
/// algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPriceRecord {
    /// Position identifier.
    pub position_id: u64,
    /// Order date as `YYYY-MM-DD`.
    pub order_date_from: String,
    /// Delivery date as `YYYY-MM-DD`.
    pub delivery_date_from: String,
    /// Price amount.
    pub price: Decimal,
}

impl TryFrom<RawPriceRecord> for RawPrice {
    type Error = PricegridError;

    fn try_from(r: RawPriceRecord) -> Result<Self, Self::Error> {
        Self::parse(r.position_id, &r.order_date_from, &r.delivery_date_from, r.price)
    }
}

/// A price valid over an order window and a delivery window.
///
/// Both windows are inclusive; a `None` end means the window is open-ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenormalizedPrice {
    /// Position the record belongs to.
    pub position_id: PositionId,
    /// First order date of the window.
    pub order_date_from: NaiveDate,
    /// Last order date of the window, inclusive.
    pub order_date_to: Option<NaiveDate>,
    /// First delivery date of the window.
    pub delivery_date_from: NaiveDate,
    /// Last delivery date of the window, inclusive.
    pub delivery_date_to: Option<NaiveDate>,
    /// Price amount.
    pub price: Decimal,
}

impl DenormalizedPrice {
    /// True if the order window contains `date`.
    #[must_use]
    pub fn covers_order(&self, date: NaiveDate) -> bool {
        self.order_date_from <= date && self.order_date_to.is_none_or(|to| date <= to)
    }

    /// True if the delivery window contains `date`.
    #[must_use]
    pub fn covers_delivery(&self, date: NaiveDate) -> bool {
        self.delivery_date_from <= date && self.delivery_date_to.is_none_or(|to| date <= to)
    }

    /// True if the record covers the `(order, delivery)` point.
    #[must_use]
    pub fn covers(&self, order: NaiveDate, delivery: NaiveDate) -> bool {
        self.covers_order(order) && self.covers_delivery(delivery)
    }

    /// True if either window ends before it starts and therefore covers no date.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order_date_to.is_some_and(|to| to < self.order_date_from)
            || self
                .delivery_date_to
                .is_some_and(|to| to < self.delivery_date_from)
    }

    /// The raw rule this record starts from, used to re-denormalize output.
    #[must_use]
    pub const fn to_raw(&self) -> RawPrice {
        RawPrice::new(
            self.position_id,
            self.order_date_from,
            self.delivery_date_from,
            self.price,
        )
    }
}
