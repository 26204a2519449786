//! pricegrid-core
//!
//! Turns point-in-time price rules into non-overlapping order/delivery
//! date-range records.
//!
//! - `denormalize`: the range denormalization algorithm.
//! - `source`: the `PriceSource` trait and an in-memory, pre-grouped source.
//! - `dates`: calendar helpers for window boundaries.
//! - `render`: fixed-width table output.
//!
//! Everything here is synchronous and free of I/O; the algorithm itself is a
//! pure function of its input.
#![warn(missing_docs)]

/// Calendar helpers: strict parsing and the day before a date.
pub mod dates;
/// The range denormalization algorithm.
pub mod denormalize;
pub mod render;
/// Price source trait and in-memory grouping.
pub mod source;

pub use denormalize::{denormalize, denormalize_position};
pub use render::render_table;
pub use source::{InMemorySource, PriceSource, group_by_position};

pub use pricegrid_types::{
    DenormalizeConfig, DenormalizedPrice, EmptyWindows, PositionId, PricegridConfig,
    PricegridError, RawPrice, RawPriceRecord, RenderConfig, Strategy,
};
