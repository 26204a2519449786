use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pricegrid::{DenormalizeConfig, EmptyWindows, PricegridConfig, RenderConfig, Strategy};

#[derive(Parser, Debug)]
#[command(name = "pricegrid")]
#[command(author, version, about, long_about = "Denormalize position prices into non-overlapping order/delivery date ranges")]
pub struct Args {
    /// JSON array of {position_id, order_date_from, delivery_date_from, price} records.
    /// Without it the bundled reference prices are used.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Use every bundled fixture position instead of the reference prices only
    #[arg(long, conflicts_with = "input")]
    pub all_fixtures: bool,

    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    #[arg(long, value_enum, default_value_t = StrategyArg::Nested)]
    pub strategy: StrategyArg,

    /// Omit windows that end the day before they start
    #[arg(long)]
    pub drop_empty_windows: bool,

    /// Table cell width
    #[arg(long, default_value_t = 22)]
    pub width: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Nested,
    Sweep,
}

impl Args {
    pub fn config(&self) -> PricegridConfig {
        PricegridConfig {
            denormalize: DenormalizeConfig {
                strategy: match self.strategy {
                    StrategyArg::Nested => Strategy::NestedScan,
                    StrategyArg::Sweep => Strategy::Sweep,
                },
                empty_windows: if self.drop_empty_windows {
                    EmptyWindows::Drop
                } else {
                    EmptyWindows::Keep
                },
            },
            render: RenderConfig {
                width: self.width,
                ..RenderConfig::default()
            },
        }
    }
}
