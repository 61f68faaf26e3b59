//! Categorical breakdowns of trade counts and profit.

use crate::domain::entities::trade::Trade;
use crate::domain::values::breakdown_dimension::BreakdownDimension;
use crate::domain::values::trade_type::TradeType;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Day names indexed by days from Sunday.
pub const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const RESULTS: [&str; 3] = ["Win", "Loss", "Break Even"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub key: String,
    pub count: usize,
    pub aggregate_profit: f64,
}

impl BreakdownEntry {
    fn empty(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            count: 0,
            aggregate_profit: 0.0,
        }
    }

    fn record(&mut self, trade: &Trade) {
        self.count += 1;
        self.aggregate_profit += trade.profit_loss;
    }
}

/// Groups `trades` by `dimension`.
///
/// Pair and account produce one entry per observed value in first-seen
/// order. Type, day of week and result always produce their full fixed set
/// of entries, zero-filled.
pub fn compute(trades: &[Trade], dimension: BreakdownDimension) -> Vec<BreakdownEntry> {
    match dimension {
        BreakdownDimension::Pair => by_observed_key(trades, |t| t.pair.as_str()),
        BreakdownDimension::Account => by_observed_key(trades, |t| t.account.as_str()),
        BreakdownDimension::Type => by_fixed_keys(
            trades,
            TradeType::ALL.iter().map(|t| t.to_string()),
            |t| match t.trade_type {
                TradeType::Buy => 0,
                TradeType::Sell => 1,
            },
        ),
        BreakdownDimension::DayOfWeek => by_fixed_keys(trades, WEEKDAYS, |t| {
            t.date.weekday().num_days_from_sunday() as usize
        }),
        BreakdownDimension::Result => by_fixed_keys(trades, RESULTS, |t| {
            if t.is_break_even() {
                2
            } else if t.is_win() {
                0
            } else {
                1
            }
        }),
    }
}

fn by_observed_key<F>(trades: &[Trade], key: F) -> Vec<BreakdownEntry>
where
    F: Fn(&Trade) -> &str,
{
    let mut entries: Vec<BreakdownEntry> = Vec::new();
    for trade in trades {
        let k = key(trade);
        match entries.iter_mut().find(|e| e.key == k) {
            Some(entry) => entry.record(trade),
            None => {
                let mut entry = BreakdownEntry::empty(k);
                entry.record(trade);
                entries.push(entry);
            }
        }
    }
    entries
}

fn by_fixed_keys<K, F>(trades: &[Trade], keys: K, slot: F) -> Vec<BreakdownEntry>
where
    K: IntoIterator,
    K::Item: Into<String>,
    F: Fn(&Trade) -> usize,
{
    let mut entries: Vec<BreakdownEntry> =
        keys.into_iter().map(|k| BreakdownEntry::empty(k)).collect();
    for trade in trades {
        entries[slot(trade)].record(trade);
    }
    entries
}

/// Entry with the highest count; the earliest one wins a tie.
pub fn most_traded(entries: &[BreakdownEntry]) -> Option<&BreakdownEntry> {
    first_max_by(entries, |a, b| a.count > b.count)
}

/// Entry with the highest aggregate profit; the earliest one wins a tie.
pub fn most_profitable(entries: &[BreakdownEntry]) -> Option<&BreakdownEntry> {
    first_max_by(entries, |a, b| a.aggregate_profit > b.aggregate_profit)
}

fn first_max_by<F>(entries: &[BreakdownEntry], better: F) -> Option<&BreakdownEntry>
where
    F: Fn(&BreakdownEntry, &BreakdownEntry) -> bool,
{
    let mut best: Option<&BreakdownEntry> = None;
    for entry in entries {
        if best.map_or(true, |b| better(entry, b)) {
            best = Some(entry);
        }
    }
    best
}
