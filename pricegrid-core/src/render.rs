//! Fixed-width text table for denormalized prices.

use core::fmt::Write as _;

use chrono::NaiveDate;
use pricegrid_types::{DenormalizedPrice, RenderConfig};

use crate::dates::format_date;

/// Column names, in output order.
pub const COLUMNS: [&str; 6] = [
    "position_id",
    "order_date_from",
    "order_date_to",
    "delivery_date_from",
    "delivery_date_to",
    "price",
];

/// Render a header row followed by one row per record.
///
/// Every cell is left-padded to `cfg.width`; cells already wider are left
/// untouched. Open-ended dates print as `cfg.null_marker`. Each line ends with
/// a newline, so an empty input renders as the header line alone.
#[must_use]
pub fn render_table(rows: &[DenormalizedPrice], cfg: &RenderConfig) -> String {
    let mut out = String::new();
    push_line(&mut out, COLUMNS.iter().copied(), &cfg.header_separator, cfg.width);
    for r in rows {
        let cells = row_cells(r, &cfg.null_marker);
        push_line(&mut out, cells.iter().map(String::as_str), &cfg.separator, cfg.width);
    }
    out
}

/// Text of each cell of `row`, in [`COLUMNS`] order.
#[must_use]
pub fn row_cells(row: &DenormalizedPrice, null_marker: &str) -> [String; 6] {
    let opt = |d: Option<NaiveDate>| d.map_or_else(|| null_marker.to_string(), format_date);
    [
        row.position_id.to_string(),
        format_date(row.order_date_from),
        opt(row.order_date_to),
        format_date(row.delivery_date_from),
        opt(row.delivery_date_to),
        row.price.to_string(),
    ]
}

fn push_line<'a, I>(out: &mut String, cells: I, separator: &str, width: usize)
where
    I: IntoIterator<Item = &'a str>,
{
    for (k, cell) in cells.into_iter().enumerate() {
        if k > 0 {
            out.push_str(separator);
        }
        let _ = write!(out, "{cell:>width$}");
    }
    out.push('\n');
}
