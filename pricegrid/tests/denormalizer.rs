use std::sync::Arc;

use chrono::NaiveDate;
use pricegrid::{
    Denormalizer, EmptyWindows, InMemorySource, PositionId, PriceSource, PricegridConfig,
    PricegridError, RawPrice, RenderConfig, Strategy, tag_err,
};
use pricegrid_mock::MockSource;
use rust_decimal::Decimal;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Source that fails with a non-source error, to check tagging.
struct BrokenSource;

impl PriceSource for BrokenSource {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn prices_by_position(&self) -> Result<Vec<(PositionId, Vec<RawPrice>)>, PricegridError> {
        Err(PricegridError::Io("disk on fire".into()))
    }
}

#[test]
fn build_requires_a_source() {
    let err = Denormalizer::builder().build().err().unwrap();
    assert!(matches!(err, PricegridError::InvalidConfig(_)));
}

#[test]
fn build_rejects_zero_width() {
    let err = Denormalizer::builder()
        .with_source(Arc::new(MockSource::reference()))
        .render(RenderConfig {
            width: 0,
            ..RenderConfig::default()
        })
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, PricegridError::InvalidConfig(_)));
}

#[test]
fn run_over_reference_fixture() {
    let grid = Denormalizer::builder()
        .with_source(Arc::new(MockSource::reference()))
        .build()
        .unwrap();
    assert_eq!(grid.source_name(), "pricegrid-mock");
    let rows = grid.run().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].price, Decimal::new(130, 0));
    assert_eq!(rows[0].delivery_date_to, Some(d("2019-02-28")));
    assert_eq!(rows[3].order_date_from, d("2019-02-10"));
    assert_eq!(rows[3].order_date_to, None);
    assert_eq!(rows[3].delivery_date_to, None);
}

#[test]
fn builder_options_reach_the_algorithm() {
    let grid = Denormalizer::builder()
        .with_source(Arc::new(MockSource::new()))
        .strategy(Strategy::Sweep)
        .empty_windows(EmptyWindows::Drop)
        .build()
        .unwrap();
    assert_eq!(grid.denormalize_config().strategy, Strategy::Sweep);
    assert_eq!(grid.denormalize_config().empty_windows, EmptyWindows::Drop);
    assert!(grid.run().unwrap().iter().all(|r| !r.is_empty()));
}

#[test]
fn default_builder_keeps_every_window() {
    let grid = Denormalizer::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()
        .unwrap();
    assert_eq!(grid.denormalize_config().empty_windows, EmptyWindows::Keep);
    assert!(grid.run().unwrap().iter().any(|r| r.is_empty()));
}

#[test]
fn strategies_agree_on_all_fixtures() {
    let run = |strategy, empty_windows| {
        Denormalizer::builder()
            .with_source(Arc::new(MockSource::new()))
            .strategy(strategy)
            .empty_windows(empty_windows)
            .build()
            .unwrap()
            .run()
            .unwrap()
    };
    for policy in [EmptyWindows::Drop, EmptyWindows::Keep] {
        assert_eq!(run(Strategy::NestedScan, policy), run(Strategy::Sweep, policy));
    }
}

#[test]
fn source_errors_propagate() {
    let grid = Denormalizer::builder()
        .with_source(Arc::new(MockSource::failing()))
        .build()
        .unwrap();
    let err = grid.run().unwrap_err();
    assert!(matches!(err, PricegridError::Source { .. }));
}

#[test]
fn foreign_errors_are_tagged_with_the_source_name() {
    let grid = Denormalizer::builder()
        .with_source(Arc::new(BrokenSource))
        .build()
        .unwrap();
    match grid.run().unwrap_err() {
        PricegridError::Source { source_name, msg } => {
            assert_eq!(source_name, "broken");
            assert!(msg.contains("disk on fire"));
        }
        other => panic!("expected tagged source error, got {other:?}"),
    }
}

#[test]
fn tag_err_keeps_parse_errors() {
    let e = PricegridError::parse("2019-02-31", "no such day");
    assert_eq!(tag_err("x", e.clone()), e);
}

#[test]
fn render_uses_configured_layout() {
    let source = InMemorySource::new(vec![
        RawPrice::parse(1, "2019-02-01", "2019-03-01", Decimal::new(100, 0)).unwrap(),
    ]);
    let cfg = PricegridConfig {
        render: RenderConfig {
            width: 3,
            null_marker: "~".into(),
            separator: ",".into(),
            header_separator: ",".into(),
        },
        ..PricegridConfig::default()
    };
    let grid = Denormalizer::builder()
        .with_source(Arc::new(source))
        .config(cfg)
        .build()
        .unwrap();
    let table = grid.render(&grid.run().unwrap());
    assert_eq!(table.lines().nth(1), Some("  1,2019-02-01,  ~,2019-03-01,  ~,100"));
    assert_eq!(grid.config().render.width, 3);
}
