use crate::domain::analytics::time_window::filter_by_timeframe;
use crate::domain::entities::trade::{NewTrade, Trade};
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::{TradeFilter, TradeRepository};
use crate::domain::values::timeframe::Timeframe;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub struct TradeUseCase {
    repo: Arc<dyn TradeRepository>,
    user_id: String,
}

impl TradeUseCase {
    pub fn new(repo: Arc<dyn TradeRepository>, user_id: String) -> Self {
        Self { repo, user_id }
    }

    pub fn add(&self, input: NewTrade) -> Result<Trade, DomainError> {
        let trade = input.into_trade(&self.user_id)?;
        self.repo.add_trade(&trade)?;
        Ok(trade)
    }

    pub fn get(&self, id: &str) -> Result<Trade, DomainError> {
        self.repo
            .get_trade(id)?
            .filter(|t| t.user_id == self.user_id)
            .ok_or_else(|| DomainError::NotFound(format!("Trade not found: {id}")))
    }

    /// Lists the journal owner's trades. Any `user_id` on the filter is overridden.
    pub fn list(&self, filter: TradeFilter) -> Result<Vec<Trade>, DomainError> {
        self.repo.list_trades(&TradeFilter {
            user_id: Some(self.user_id.clone()),
            ..filter
        })
    }

    /// Like [`list`](Self::list), narrowed to `timeframe`. `limit` applies
    /// after the window so it still keeps the most recent N trades.
    pub fn list_in_timeframe(
        &self,
        filter: TradeFilter,
        timeframe: Timeframe,
        now: DateTime<Utc>,
    ) -> Result<Vec<Trade>, DomainError> {
        let limit = filter.limit;
        let trades = self.list(TradeFilter { limit: None, ..filter })?;
        let mut trades = filter_by_timeframe(&trades, timeframe, now);
        if let Some(n) = limit {
            let skip = trades.len().saturating_sub(n);
            trades.drain(..skip);
        }
        Ok(trades)
    }

    pub fn delete(&self, id: &str) -> Result<(), DomainError> {
        // Ownership check before removing.
        self.get(id)?;
        self.repo.delete_trade(id)
    }
}
