mod common;

use common::{make_trade, now, setup};
use tradejournal::application::analytics::SeriesKind;
use tradejournal::domain::values::breakdown_dimension::BreakdownDimension;
use tradejournal::domain::values::profit_factor::ProfitFactor;
use tradejournal::domain::values::timeframe::Timeframe;
use tradejournal::domain::values::trade_type::TradeType;
use tradejournal::TradeJournal;

/// Four trades in March plus one from last year.
fn seeded() -> TradeJournal {
    let journal = setup();
    let trades = [
        ("2024-03-11", "EURUSD", TradeType::Buy, 100.0),
        ("2024-03-12", "GBPUSD", TradeType::Sell, -50.0),
        ("2024-03-13", "EURUSD", TradeType::Sell, -30.0),
        ("2024-03-14", "XAUUSD", TradeType::Buy, 20.0),
        ("2023-01-05", "EURUSD", TradeType::Buy, 500.0),
    ];
    for (date, pair, trade_type, pl) in trades {
        journal
            .trade_add(make_trade(date, pair, trade_type, pl))
            .unwrap();
    }
    journal
}

#[test]
fn test_metrics_for_empty_journal() {
    let journal = setup();
    let m = journal.metrics(Timeframe::All, now()).unwrap();
    assert_eq!(m.trade_count, 0);
    assert_eq!(m.balance, 0.0);
    assert_eq!(m.win_rate_percent, 0.0);
    assert_eq!(m.profit_factor, ProfitFactor::Finite(0.0));
}

#[test]
fn test_metrics_respect_timeframe() {
    let journal = seeded();

    let month = journal.metrics(Timeframe::Month, now()).unwrap();
    assert_eq!(month.trade_count, 4);
    assert_eq!(month.max_drawdown, 80.0);
    assert_eq!(month.win_rate_percent, 50.0);
    assert_eq!(month.profit_factor, ProfitFactor::Finite(1.5));
    assert!(
        (month.balance - (month.gross_profit + month.gross_loss - month.estimated_commissions))
            .abs()
            < 1e-9
    );

    let all = journal.metrics(Timeframe::All, now()).unwrap();
    assert_eq!(all.trade_count, 5);
    assert_eq!(all.max_win_trade, 500.0);
}

#[test]
fn test_week_window_on_fixed_clock() {
    let journal = seeded();
    // Cutoff is 2024-03-08 18:00, every March trade is inside.
    let week = journal.metrics(Timeframe::Week, now()).unwrap();
    assert_eq!(week.trade_count, 4);
    let year = journal.metrics(Timeframe::Year, now()).unwrap();
    assert_eq!(year.trade_count, 4);
}

#[test]
fn test_breakdowns() {
    let journal = seeded();

    let pairs = journal
        .breakdown(BreakdownDimension::Pair, Timeframe::All, now())
        .unwrap();
    let keys: Vec<&str> = pairs.iter().map(|e| e.key.as_str()).collect();
    // Repository order is chronological, so last year's EURUSD is seen first.
    assert_eq!(keys, vec!["EURUSD", "GBPUSD", "XAUUSD"]);
    assert_eq!(pairs[0].count, 3);
    assert_eq!(pairs[0].aggregate_profit, 570.0);

    let types = journal
        .breakdown(BreakdownDimension::Type, Timeframe::Month, now())
        .unwrap();
    assert_eq!(types.len(), 2);
    assert_eq!(types[0].count, 2);
    assert_eq!(types[1].count, 2);

    let days = journal
        .breakdown(BreakdownDimension::DayOfWeek, Timeframe::Month, now())
        .unwrap();
    assert_eq!(days.len(), 7);
    // 2024-03-11 .. 2024-03-14 is Monday .. Thursday
    assert_eq!(days[1].count, 1);
    assert_eq!(days[4].count, 1);
    assert_eq!(days[5].count, 0);

    let results = journal
        .breakdown(BreakdownDimension::Result, Timeframe::Month, now())
        .unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[2].count, 0);
}

#[test]
fn test_fixed_breakdowns_on_empty_journal() {
    let journal = setup();
    for (dim, len) in [
        (BreakdownDimension::Type, 2),
        (BreakdownDimension::DayOfWeek, 7),
        (BreakdownDimension::Result, 3),
        (BreakdownDimension::Pair, 0),
    ] {
        assert_eq!(journal.breakdown(dim, Timeframe::All, now()).unwrap().len(), len);
    }
}

#[test]
fn test_series() {
    let journal = seeded();

    let monthly = journal
        .series(SeriesKind::Monthly, Timeframe::All, now())
        .unwrap();
    assert_eq!(monthly.len(), 6);
    assert_eq!(monthly[5].label, "Mar 2024");
    assert_eq!(monthly[5].trade_count, 4);
    assert_eq!(monthly[5].profit, 40.0);

    let daily = journal
        .series(SeriesKind::Daily, Timeframe::All, now())
        .unwrap();
    assert_eq!(daily.len(), 7);
    assert_eq!(daily[6].trade_count, 0); // nothing on the 15th
    assert_eq!(daily[5].profit, 20.0); // 14th
}

#[test]
fn test_series_on_empty_journal() {
    let journal = setup();
    assert_eq!(
        journal
            .series(SeriesKind::Monthly, Timeframe::All, now())
            .unwrap()
            .len(),
        6
    );
    assert_eq!(
        journal
            .series(SeriesKind::Daily, Timeframe::All, now())
            .unwrap()
            .len(),
        7
    );
}

#[test]
fn test_dashboard() {
    let journal = seeded();
    let dashboard = journal.dashboard(Timeframe::Month, now()).unwrap();

    assert_eq!(dashboard.timeframe, Timeframe::Month);
    assert_eq!(dashboard.metrics.trade_count, 4);
    assert_eq!(dashboard.by_pair.len(), 3);
    assert_eq!(dashboard.most_traded_pair.as_ref().unwrap().key, "EURUSD");
    assert_eq!(dashboard.most_profitable_pair.as_ref().unwrap().key, "EURUSD");
    assert_eq!(dashboard.monthly.len(), 6);
    assert_eq!(dashboard.daily.len(), 7);

    let json = serde_json::to_value(&dashboard).unwrap();
    assert_eq!(json["timeframe"], "month");
    assert_eq!(json["metrics"]["profit_factor"]["finite"], 1.5);
}

#[test]
fn test_dashboard_is_repeatable() {
    let journal = seeded();
    let a = journal.dashboard(Timeframe::All, now()).unwrap();
    let b = journal.dashboard(Timeframe::All, now()).unwrap();
    assert_eq!(a.metrics, b.metrics);
    assert_eq!(a.by_pair, b.by_pair);
    assert_eq!(a.monthly, b.monthly);
}
