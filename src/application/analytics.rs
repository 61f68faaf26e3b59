use crate::domain::analytics::breakdown::{self, BreakdownEntry};
use crate::domain::analytics::metrics::{self, MetricsSummary};
use crate::domain::analytics::time_series::{self, TimeSeriesPoint};
use crate::domain::analytics::time_window::filter_by_timeframe;
use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::{TradeFilter, TradeRepository};
use crate::domain::values::breakdown_dimension::BreakdownDimension;
use crate::domain::values::timeframe::Timeframe;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub struct AnalyticsUseCase {
    repo: Arc<dyn TradeRepository>,
    user_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Monthly,
    Daily,
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKind::Monthly => write!(f, "monthly"),
            SeriesKind::Daily => write!(f, "daily"),
        }
    }
}

impl FromStr for SeriesKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monthly" | "month" => Ok(SeriesKind::Monthly),
            "daily" | "day" => Ok(SeriesKind::Daily),
            _ => Err(format!("Unknown series: {s}")),
        }
    }
}

/// Everything the journal dashboard shows for one timeframe.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub generated_at: DateTime<Utc>,
    pub timeframe: Timeframe,
    pub metrics: MetricsSummary,
    pub by_pair: Vec<BreakdownEntry>,
    pub by_type: Vec<BreakdownEntry>,
    pub by_result: Vec<BreakdownEntry>,
    pub by_day_of_week: Vec<BreakdownEntry>,
    pub most_traded_pair: Option<BreakdownEntry>,
    pub most_profitable_pair: Option<BreakdownEntry>,
    pub monthly: Vec<TimeSeriesPoint>,
    pub daily: Vec<TimeSeriesPoint>,
}

impl AnalyticsUseCase {
    pub fn new(repo: Arc<dyn TradeRepository>, user_id: String) -> Self {
        Self { repo, user_id }
    }

    fn load(&self, timeframe: Timeframe, now: DateTime<Utc>) -> Result<Vec<Trade>, DomainError> {
        let trades = self.repo.list_trades(&TradeFilter {
            user_id: Some(self.user_id.clone()),
            ..Default::default()
        })?;
        let filtered = filter_by_timeframe(&trades, timeframe, now);
        tracing::debug!(
            %timeframe,
            loaded = trades.len(),
            in_window = filtered.len(),
            "trades loaded for analytics"
        );
        Ok(filtered)
    }

    pub fn metrics(&self, timeframe: Timeframe, now: DateTime<Utc>) -> Result<MetricsSummary, DomainError> {
        let trades = self.load(timeframe, now)?;
        Ok(metrics::compute(&trades))
    }

    pub fn breakdown(
        &self,
        dimension: BreakdownDimension,
        timeframe: Timeframe,
        now: DateTime<Utc>,
    ) -> Result<Vec<BreakdownEntry>, DomainError> {
        let trades = self.load(timeframe, now)?;
        Ok(breakdown::compute(&trades, dimension))
    }

    pub fn series(
        &self,
        kind: SeriesKind,
        timeframe: Timeframe,
        now: DateTime<Utc>,
    ) -> Result<Vec<TimeSeriesPoint>, DomainError> {
        let trades = self.load(timeframe, now)?;
        Ok(match kind {
            SeriesKind::Monthly => time_series::monthly(&trades, now),
            SeriesKind::Daily => time_series::daily_last_7(&trades, now),
        })
    }

    pub fn dashboard(&self, timeframe: Timeframe, now: DateTime<Utc>) -> Result<Dashboard, DomainError> {
        let trades = self.load(timeframe, now)?;

        let by_pair = breakdown::compute(&trades, BreakdownDimension::Pair);
        let most_traded_pair = breakdown::most_traded(&by_pair).cloned();
        let most_profitable_pair = breakdown::most_profitable(&by_pair).cloned();

        let dashboard = Dashboard {
            generated_at: now,
            timeframe,
            metrics: metrics::compute(&trades),
            by_type: breakdown::compute(&trades, BreakdownDimension::Type),
            by_result: breakdown::compute(&trades, BreakdownDimension::Result),
            by_day_of_week: breakdown::compute(&trades, BreakdownDimension::DayOfWeek),
            by_pair,
            most_traded_pair,
            most_profitable_pair,
            monthly: time_series::monthly(&trades, now),
            daily: time_series::daily_last_7(&trades, now),
        };
        tracing::debug!(
            trades = dashboard.metrics.trade_count,
            balance = dashboard.metrics.balance,
            "dashboard computed"
        );
        Ok(dashboard)
    }
}
