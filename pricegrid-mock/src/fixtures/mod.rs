use chrono::NaiveDate;
use pricegrid_core::{PositionId, RawPrice};
use rust_decimal::Decimal;

/// Position carrying the reference data set.
pub const REFERENCE_POSITION: PositionId = PositionId(1);

pub fn by_position(id: PositionId) -> Option<Vec<RawPrice>> {
    match id.0 {
        1 => Some(build(
            1,
            vec![
                ("2019-02-01", "2019-03-01", "100"),
                ("2019-02-10", "2019-03-10", "200"),
                ("2019-02-20", "2019-02-25", "130"),
            ],
        )),
        // single rule, fully open
        2 => Some(build(2, vec![("2019-02-01", "2019-03-01", "75.50")])),
        // shared delivery date and an exact duplicate point
        3 => Some(build(
            3,
            vec![
                ("2019-01-01", "2019-03-01", "10"),
                ("2019-01-05", "2019-03-01", "20"),
                ("2019-01-05", "2019-03-01", "21"),
                ("2019-01-03", "2019-04-01", "15"),
            ],
        )),
        // windows ending on a leap day and across a year end
        4 => Some(build(
            4,
            vec![
                ("2019-12-01", "2020-01-15", "300"),
                ("2020-01-20", "2020-03-01", "310"),
                ("2020-02-01", "2021-01-01", "320"),
            ],
        )),
        _ => None,
    }
}

/// Every fixture position, in id order.
pub fn all_positions() -> Vec<PositionId> {
    (1..=4).map(PositionId).collect()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn price(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn build(position: u64, rows: Vec<(&str, &str, &str)>) -> Vec<RawPrice> {
    rows.into_iter()
        .map(|(order, delivery, p)| {
            RawPrice::new(PositionId(position), date(order), date(delivery), price(p))
        })
        .collect()
}
