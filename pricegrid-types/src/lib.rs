//! Pricegrid value types, configuration primitives and the unified error type.
#![warn(missing_docs)]

mod config;
mod error;
mod price;

pub use config::{DenormalizeConfig, EmptyWindows, PricegridConfig, RenderConfig, Strategy};
pub use error::PricegridError;
pub use price::{
    DATE_FORMAT, DenormalizedPrice, PositionId, RawPrice, RawPriceRecord, parse_date,
};
