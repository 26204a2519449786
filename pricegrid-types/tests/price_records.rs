use chrono::NaiveDate;
use pricegrid_types::{
    DenormalizedPrice, PositionId, PricegridError, RawPrice, RawPriceRecord, parse_date,
};
use rust_decimal::Decimal;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn parse_date_accepts_padded_iso() {
    assert_eq!(parse_date("2019-02-28").unwrap(), d("2019-02-28"));
    assert_eq!(parse_date("2020-02-29").unwrap(), d("2020-02-29"));
}

#[test]
fn parse_date_rejects_malformed_input_with_the_value() {
    for bad in [
        "2019-2-1",
        "2019-02-30",
        "01/02/2019",
        "",
        "2019-02-01T00:00",
        "+2019-2-01",
        " 2019-2-01",
        "2019- 2-01",
        "2019-02-0a",
    ] {
        match parse_date(bad) {
            Err(PricegridError::Parse { value, .. }) => assert_eq!(value, bad),
            other => panic!("expected parse error for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn raw_price_from_record_validates_dates() {
    let ok = RawPriceRecord {
        position_id: 7,
        order_date_from: "2019-02-01".into(),
        delivery_date_from: "2019-03-01".into(),
        price: Decimal::new(100, 0),
    };
    let raw = RawPrice::try_from(ok).unwrap();
    assert_eq!(raw.position_id, PositionId(7));
    assert_eq!(raw.order_date_from, d("2019-02-01"));
    assert_eq!(raw.delivery_date_from, d("2019-03-01"));

    let bad = RawPriceRecord {
        position_id: 7,
        order_date_from: "2019-02-01".into(),
        delivery_date_from: "2019-13-01".into(),
        price: Decimal::new(100, 0),
    };
    let err = RawPrice::try_from(bad).unwrap_err();
    assert!(err.is_input_error());
    assert!(err.to_string().contains("2019-13-01"));
}

#[test]
fn record_accepts_integer_and_string_prices() {
    let a: RawPriceRecord = serde_json::from_str(
        r#"{"position_id":1,"order_date_from":"2019-02-01","delivery_date_from":"2019-03-01","price":100}"#,
    )
    .unwrap();
    let b: RawPriceRecord = serde_json::from_str(
        r#"{"position_id":1,"order_date_from":"2019-02-01","delivery_date_from":"2019-03-01","price":"100.50"}"#,
    )
    .unwrap();
    assert_eq!(a.price, Decimal::new(100, 0));
    assert_eq!(b.price, Decimal::new(10050, 2));
}

#[test]
fn coverage_predicates_respect_open_ends() {
    let row = DenormalizedPrice {
        position_id: PositionId(1),
        order_date_from: d("2019-02-01"),
        order_date_to: Some(d("2019-02-09")),
        delivery_date_from: d("2019-03-10"),
        delivery_date_to: None,
        price: Decimal::new(100, 0),
    };
    assert!(row.covers(d("2019-02-01"), d("2019-03-10")));
    assert!(row.covers(d("2019-02-09"), d("2030-01-01")));
    assert!(!row.covers(d("2019-02-10"), d("2019-03-10")));
    assert!(!row.covers(d("2019-02-05"), d("2019-03-09")));
    assert!(!row.is_empty());
}

#[test]
fn inverted_window_is_empty() {
    let row = DenormalizedPrice {
        position_id: PositionId(1),
        order_date_from: d("2019-02-01"),
        order_date_to: None,
        delivery_date_from: d("2019-03-10"),
        delivery_date_to: Some(d("2019-03-09")),
        price: Decimal::new(100, 0),
    };
    assert!(row.is_empty());
    assert!(!row.covers_delivery(d("2019-03-10")));
}

#[test]
fn denormalized_price_serializes_open_ends_as_null() {
    let row = DenormalizedPrice {
        position_id: PositionId(1),
        order_date_from: d("2019-02-01"),
        order_date_to: None,
        delivery_date_from: d("2019-03-01"),
        delivery_date_to: None,
        price: Decimal::new(100, 0),
    };
    let v: serde_json::Value = serde_json::to_value(&row).unwrap();
    assert_eq!(v["position_id"], 1);
    assert_eq!(v["order_date_from"], "2019-02-01");
    assert!(v["order_date_to"].is_null());
    assert!(v["delivery_date_to"].is_null());
}
