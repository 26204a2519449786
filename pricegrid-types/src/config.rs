//! Configuration types shared by the denormalizer, the renderer and the CLI.

use serde::{Deserialize, Serialize};

/// How candidate order dates are collected for each delivery window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Strategy {
    /// Rescan every earlier entry for each delivery window. Quadratic in the
    /// number of prices per position.
    #[default]
    NestedScan,
    /// Keep an ordered set of active order dates and take a prefix of it for
    /// each delivery window. Produces the same rows as `NestedScan`.
    Sweep,
}

/// What to do with windows that end the day before they start.
///
/// These arise when two prices share a `delivery_date_from`, or when two
/// candidates in one delivery window share an `order_date_from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmptyWindows {
    /// Emit one row per window and candidate pair, empty or not.
    #[default]
    Keep,
    /// Omit rows whose order or delivery window covers no date.
    Drop,
}

/// Options for the denormalization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DenormalizeConfig {
    /// Candidate collection strategy.
    pub strategy: Strategy,
    /// Empty-window policy.
    pub empty_windows: EmptyWindows,
}

/// Layout of the fixed-width text table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Width every cell is left-padded to.
    pub width: usize,
    /// Text printed for an open-ended date.
    pub null_marker: String,
    /// Separator between data cells.
    pub separator: String,
    /// Separator between header cells.
    pub header_separator: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 22,
            null_marker: "NULL".to_string(),
            separator: "\t".to_string(),
            header_separator: String::new(),
        }
    }
}

/// Global configuration for the `Denormalizer` facade.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PricegridConfig {
    /// Algorithm options.
    pub denormalize: DenormalizeConfig,
    /// Table layout.
    pub render: RenderConfig,
}
