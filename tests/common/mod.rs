//! Shared test helpers.

#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tradejournal::domain::entities::trade::NewTrade;
use tradejournal::domain::values::trade_type::TradeType;
use tradejournal::TradeJournal;

pub fn setup() -> TradeJournal {
    TradeJournal::in_memory("tester").unwrap()
}

/// Fixed clock: Friday 2024-03-15 18:00 UTC.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 18, 0, 0).unwrap()
}

pub fn make_trade(date: &str, pair: &str, trade_type: TradeType, profit_loss: f64) -> NewTrade {
    NewTrade {
        account: "Demo".into(),
        pair: pair.into(),
        trade_type,
        entry: 1.0,
        exit: 1.0,
        lot_size: 0.01,
        stop_loss: None,
        take_profit: None,
        commission: 0.0,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        duration_minutes: 30,
        profit_loss,
        total: None,
        hashtags: vec![],
        notes: String::new(),
        rating: 3,
    }
}
