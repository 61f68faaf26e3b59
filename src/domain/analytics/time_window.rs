//! Timeframe filter shared by listing and every analytics view.

use crate::domain::entities::trade::Trade;
use crate::domain::values::timeframe::Timeframe;
use chrono::{DateTime, Utc};

/// Trades dated inside `timeframe` relative to `now`, in input order.
///
/// A trade's calendar date counts as midnight UTC, so a trade dated on the
/// cutoff day itself is only included when the cutoff falls at midnight.
pub fn filter_by_timeframe(trades: &[Trade], timeframe: Timeframe, now: DateTime<Utc>) -> Vec<Trade> {
    let Some(cutoff) = timeframe.cutoff(now) else {
        return trades.to_vec();
    };

    trades
        .iter()
        .filter(|t| t.date.and_time(chrono::NaiveTime::MIN).and_utc() >= cutoff)
        .cloned()
        .collect()
}
