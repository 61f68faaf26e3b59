//! Fixed-length profit series for charts.

use crate::domain::entities::trade::Trade;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const MONTHS: usize = 6;
pub const DAYS: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub label: String,
    /// First calendar day covered by this point.
    pub start: NaiveDate,
    pub profit: f64,
    pub trade_count: usize,
}

impl TimeSeriesPoint {
    fn empty(label: String, start: NaiveDate) -> Self {
        Self {
            label,
            start,
            profit: 0.0,
            trade_count: 0,
        }
    }

    fn record(&mut self, trade: &Trade) {
        self.profit += trade.profit_loss;
        self.trade_count += 1;
    }
}

/// The six calendar months ending with the month of `now`, oldest first.
pub fn monthly(trades: &[Trade], now: DateTime<Utc>) -> Vec<TimeSeriesPoint> {
    let mut starts = Vec::with_capacity(MONTHS);
    let mut first = first_of_month(now.date_naive());
    starts.push(first);
    for _ in 1..MONTHS {
        first = first_of_month(first - Duration::days(1));
        starts.push(first);
    }
    starts.reverse();

    let mut points: Vec<TimeSeriesPoint> = starts
        .into_iter()
        .map(|start| TimeSeriesPoint::empty(start.format("%b %Y").to_string(), start))
        .collect();

    for trade in trades {
        if let Some(point) = points
            .iter_mut()
            .find(|p| p.start.year() == trade.date.year() && p.start.month() == trade.date.month())
        {
            point.record(trade);
        }
    }
    points
}

/// The seven calendar days ending with the date of `now`, oldest first.
pub fn daily_last_7(trades: &[Trade], now: DateTime<Utc>) -> Vec<TimeSeriesPoint> {
    let today = now.date_naive();
    let mut points: Vec<TimeSeriesPoint> = (0..DAYS as i64)
        .rev()
        .map(|back| {
            let day = today - Duration::days(back);
            TimeSeriesPoint::empty(day.format("%a").to_string(), day)
        })
        .collect();

    for trade in trades {
        if let Some(point) = points.iter_mut().find(|p| p.start == trade.date) {
            point.record(trade);
        }
    }
    points
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}
