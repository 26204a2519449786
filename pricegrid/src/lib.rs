//! Pricegrid turns point-in-time position prices into date-range price records.
//!
//! Overview
//! - A price rule says: from `order_date_from`, orders for delivery from
//!   `delivery_date_from` cost `price`.
//! - Per position, rules are expanded into a non-overlapping partition of the
//!   order/delivery date plane: disjoint delivery windows, each split into
//!   disjoint order windows, the last of each open-ended.
//! - Prices come from any `PriceSource`; `InMemorySource` groups a flat list.
//!
//! Key behaviors and trade-offs
//! - Strategy:
//!   - `NestedScan`: rescans earlier rules for each delivery window; simplest,
//!     quadratic per position.
//!   - `Sweep`: keeps an ordered set of active order dates; same rows, less
//!     rescanning on long price lists.
//! - Empty windows: rules sharing a delivery date (or candidates sharing an
//!   order date) produce windows ending before they start. `Keep` (the
//!   default) emits one row per window and candidate pair; `Drop` omits the
//!   empty ones so the output is a clean partition.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use pricegrid::{Denormalizer, InMemorySource, RawPrice};
//! use rust_decimal::Decimal;
//!
//! let source = InMemorySource::new(vec![
//!     RawPrice::parse(1, "2019-02-01", "2019-03-01", Decimal::new(100, 0))?,
//!     RawPrice::parse(1, "2019-02-10", "2019-03-10", Decimal::new(200, 0))?,
//! ]);
//! let grid = Denormalizer::builder().with_source(Arc::new(source)).build()?;
//! print!("{}", grid.render(&grid.run()?));
//! ```
#![warn(missing_docs)]

pub(crate) mod core;

pub use core::{Denormalizer, DenormalizerBuilder, tag_err};

// Re-export core types for convenience
pub use pricegrid_core::{
    DenormalizeConfig, DenormalizedPrice, EmptyWindows, InMemorySource, PositionId, PriceSource,
    PricegridConfig, PricegridError, RawPrice, RawPriceRecord, RenderConfig, Strategy,
    denormalize, denormalize_position, group_by_position, render_table,
};
