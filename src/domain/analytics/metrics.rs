//! Aggregate performance metrics for a set of trades.

use crate::domain::entities::trade::Trade;
use crate::domain::values::profit_factor::ProfitFactor;
use serde::{Deserialize, Serialize};

/// Units per standard lot used by the notional commission estimate.
pub const CONTRACT_SIZE: f64 = 100_000.0;
/// Fraction of notional value charged by the commission estimate.
pub const COMMISSION_RATE: f64 = 0.001;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricsSummary {
    // Profitability
    /// `gross_profit + gross_loss - estimated_commissions`.
    pub balance: f64,
    pub gross_profit: f64,
    /// Sum of losing trades, never positive.
    pub gross_loss: f64,
    /// Notional heuristic: `entry * lot_size * CONTRACT_SIZE * COMMISSION_RATE`.
    pub estimated_commissions: f64,
    /// Sum of the commission recorded on each trade.
    pub actual_commissions: f64,
    pub profit_factor: ProfitFactor,

    // Counts
    pub trade_count: usize,
    pub winning_count: usize,
    pub losing_count: usize,
    pub break_even_count: usize,
    pub win_rate_percent: f64,

    // Trade extremes and averages
    pub max_win_trade: f64,
    pub max_loss_trade: f64,
    pub avg_win_trade: f64,
    /// Signed, so negative whenever there is a loss.
    pub avg_loss_trade: f64,

    // Risk
    /// Largest summed loss over an unbroken chronological losing streak.
    pub max_drawdown: f64,
    /// Largest peak-to-trough fall of the cumulative P/L curve.
    pub equity_max_drawdown: f64,
}

pub fn estimated_commission(trade: &Trade) -> f64 {
    trade.entry * trade.lot_size * CONTRACT_SIZE * COMMISSION_RATE
}

pub fn compute(trades: &[Trade]) -> MetricsSummary {
    let trade_count = trades.len();

    let mut gross_profit = 0.0;
    let mut gross_loss = 0.0;
    let mut winning_count = 0;
    let mut losing_count = 0;
    let mut max_win_trade: f64 = 0.0;
    let mut max_loss_trade: f64 = 0.0;

    for trade in trades {
        if trade.is_win() {
            gross_profit += trade.profit_loss;
            winning_count += 1;
            max_win_trade = max_win_trade.max(trade.profit_loss);
        } else if trade.is_loss() {
            gross_loss += trade.profit_loss;
            losing_count += 1;
            max_loss_trade = max_loss_trade.min(trade.profit_loss);
        }
    }

    let estimated_commissions: f64 = trades.iter().map(estimated_commission).sum();
    let actual_commissions: f64 = trades.iter().map(|t| t.commission).sum();

    let win_rate_percent = if trade_count > 0 {
        winning_count as f64 / trade_count as f64 * 100.0
    } else {
        0.0
    };
    let avg_win_trade = if winning_count > 0 {
        gross_profit / winning_count as f64
    } else {
        0.0
    };
    let avg_loss_trade = if losing_count > 0 {
        gross_loss / losing_count as f64
    } else {
        0.0
    };

    let chronological = sorted_by_date(trades);

    MetricsSummary {
        balance: gross_profit + gross_loss - estimated_commissions,
        gross_profit,
        gross_loss,
        estimated_commissions,
        actual_commissions,
        profit_factor: ProfitFactor::from_gross(gross_profit, gross_loss),
        trade_count,
        winning_count,
        losing_count,
        break_even_count: trade_count - winning_count - losing_count,
        win_rate_percent,
        max_win_trade,
        max_loss_trade,
        avg_win_trade,
        avg_loss_trade,
        max_drawdown: losing_streak_drawdown(&chronological),
        equity_max_drawdown: equity_drawdown(&chronological),
    }
}

/// Stable sort so same-day trades keep their input order.
fn sorted_by_date(trades: &[Trade]) -> Vec<&Trade> {
    let mut sorted: Vec<&Trade> = trades.iter().collect();
    sorted.sort_by_key(|t| t.date);
    sorted
}

fn losing_streak_drawdown(chronological: &[&Trade]) -> f64 {
    let mut current = 0.0;
    let mut max: f64 = 0.0;
    for trade in chronological {
        if trade.profit_loss < 0.0 {
            current += trade.profit_loss.abs();
            max = max.max(current);
        } else {
            current = 0.0;
        }
    }
    max
}

fn equity_drawdown(chronological: &[&Trade]) -> f64 {
    let mut equity = 0.0;
    let mut peak: f64 = 0.0;
    let mut max: f64 = 0.0;
    for trade in chronological {
        equity += trade.profit_loss;
        peak = peak.max(equity);
        max = max.max(peak - equity);
    }
    max
}
