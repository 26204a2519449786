//! Range denormalization of point-in-time price rules.
//!
//! Per position, prices are ordered by `(delivery_date_from, order_date_from)`.
//! Each sorted entry opens a delivery window that runs until the day before
//! the next entry's delivery date (or stays open for the last one). Within a
//! window, every earlier-or-equal entry whose order date is not after the
//! window entry's order date contributes an order window, split at the next
//! contributor's order date.
//!
//! Two interchangeable strategies collect those contributors:
//! - `scan`: the direct rescan, quadratic per position.
//! - `sweep`: an ordered set of active order dates grown as windows advance.

mod scan;
mod sweep;

use chrono::NaiveDate;
use pricegrid_types::{
    DenormalizeConfig, DenormalizedPrice, EmptyWindows, PositionId, RawPrice, Strategy,
};
use rust_decimal::Decimal;

use crate::dates::day_before;

/// An order date that applies inside a delivery window, with its price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    order_date_from: NaiveDate,
    price: Decimal,
}

impl From<&RawPrice> for Candidate {
    fn from(p: &RawPrice) -> Self {
        Self {
            order_date_from: p.order_date_from,
            price: p.price,
        }
    }
}

/// Denormalize every position, concatenating results in input order.
///
/// Accepts any iterable of `(position, prices)` pairs, e.g. the output of
/// [`crate::source::group_by_position`] or a `BTreeMap`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "pricegrid_core::denormalize",
        skip(positions),
        fields(strategy = ?config.strategy, empty_windows = ?config.empty_windows),
    )
)]
pub fn denormalize<I>(positions: I, config: &DenormalizeConfig) -> Vec<DenormalizedPrice>
where
    I: IntoIterator<Item = (PositionId, Vec<RawPrice>)>,
{
    let mut out = Vec::new();
    for (_position, prices) in positions {
        let rows = denormalize_position(prices, config);
        #[cfg(feature = "tracing")]
        tracing::debug!(position = %_position, rows = rows.len(), "denormalized position");
        out.extend(rows);
    }
    out
}

/// Denormalize the prices of a single position.
///
/// Sorting is stable, so exact duplicates keep their input order. An empty
/// list yields no rows.
#[must_use]
pub fn denormalize_position(
    mut prices: Vec<RawPrice>,
    config: &DenormalizeConfig,
) -> Vec<DenormalizedPrice> {
    prices.sort_by(|a, b| {
        a.delivery_date_from
            .cmp(&b.delivery_date_from)
            .then(a.order_date_from.cmp(&b.order_date_from))
    });

    let mut out = Vec::with_capacity(prices.len());
    let mut emit = |i: usize, candidates: &[Candidate]| {
        let entry = &prices[i];
        let delivery_date_to = prices.get(i + 1).map(|next| day_before(next.delivery_date_from));
        push_window(&mut out, entry, delivery_date_to, candidates, config.empty_windows);
    };
    match config.strategy {
        Strategy::NestedScan => scan::for_each_window(&prices, &mut emit),
        Strategy::Sweep => sweep::for_each_window(&prices, &mut emit),
    }
    out
}

/// Emit one row per candidate of the delivery window opened by `entry`.
///
/// `candidates` must already be ordered by order date.
fn push_window(
    out: &mut Vec<DenormalizedPrice>,
    entry: &RawPrice,
    delivery_date_to: Option<NaiveDate>,
    candidates: &[Candidate],
    policy: EmptyWindows,
) {
    for (k, c) in candidates.iter().enumerate() {
        let order_date_to = candidates
            .get(k + 1)
            .map(|next| day_before(next.order_date_from));
        let row = DenormalizedPrice {
            position_id: entry.position_id,
            order_date_from: c.order_date_from,
            order_date_to,
            delivery_date_from: entry.delivery_date_from,
            delivery_date_to,
            price: c.price,
        };
        if policy == EmptyWindows::Drop && row.is_empty() {
            continue;
        }
        out.push(row);
    }
}
