mod common;

use common::{make_trade, now, setup};
use tradejournal::domain::values::timeframe::Timeframe;
use tradejournal::domain::values::trade_type::TradeType;

const HEADER: &str = "Date,Account,Pair,Type,Entry,Exit,Lot Size,P/L,Duration,Hashtags";

#[test]
fn test_export_empty_journal_is_header_only() {
    let journal = setup();
    let csv = journal.export_csv(Timeframe::All, now()).unwrap();
    assert_eq!(csv.lines().collect::<Vec<_>>(), vec![HEADER]);
}

#[test]
fn test_export_single_trade() {
    let journal = setup();
    let mut input = make_trade("2024-01-01", "EURUSD", TradeType::Buy, 50.0);
    input.entry = 1.1;
    input.exit = 1.105;
    input.lot_size = 1.0;
    input.hashtags = vec!["breakout".into()];
    journal.trade_add(input).unwrap();

    let csv = journal.export_csv(Timeframe::All, now()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], HEADER);
    assert_eq!(lines[1], "2024-01-01,Demo,EURUSD,Buy,1.1,1.105,1,50,30,breakout");
}

#[test]
fn test_export_respects_timeframe() {
    let journal = setup();
    journal
        .trade_add(make_trade("2024-03-14", "EURUSD", TradeType::Buy, 5.0))
        .unwrap();
    journal
        .trade_add(make_trade("2023-12-01", "GBPUSD", TradeType::Sell, -5.0))
        .unwrap();

    let csv = journal.export_csv(Timeframe::Month, now()).unwrap();
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains("EURUSD"));
    assert!(!csv.contains("GBPUSD"));
}

#[test]
fn test_export_quotes_fields_with_commas() {
    let journal = setup();
    let mut input = make_trade("2024-03-01", "EURUSD", TradeType::Buy, 1.0);
    input.account = "Prop, Phase 1".into();
    journal.trade_add(input).unwrap();

    let csv = journal.export_csv(Timeframe::All, now()).unwrap();
    let mut rdr = csv::Reader::from_reader(csv.as_bytes());
    let record = rdr.records().next().unwrap().unwrap();
    assert_eq!(record.len(), 10);
    assert_eq!(&record[1], "Prop, Phase 1");
}

#[test]
fn test_export_writes_dated_file() {
    let journal = setup();
    journal
        .trade_add(make_trade("2024-03-14", "EURUSD", TradeType::Buy, 5.0))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = journal
        .export_to_dir(dir.path(), Timeframe::All, now())
        .unwrap();

    assert_eq!(path.file_name().unwrap(), "trade_report_2024-03-15.csv");
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, journal.export_csv(Timeframe::All, now()).unwrap());
}

#[test]
fn test_export_to_missing_dir_fails() {
    let journal = setup();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    assert!(journal
        .export_to_dir(&missing, Timeframe::All, now())
        .is_err());
}
