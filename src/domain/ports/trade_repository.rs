use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct TradeFilter {
    pub user_id: Option<String>,
    pub account: Option<String>,
    /// Inclusive lower bound on the trade date.
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound on the trade date.
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

/// Source of journal trades.
///
/// `list_trades` returns trades in chronological order: date ascending,
/// then insertion time ascending.
pub trait TradeRepository: Send + Sync {
    fn add_trade(&self, trade: &Trade) -> Result<(), DomainError>;
    fn get_trade(&self, id: &str) -> Result<Option<Trade>, DomainError>;
    fn list_trades(&self, filter: &TradeFilter) -> Result<Vec<Trade>, DomainError>;
    fn delete_trade(&self, id: &str) -> Result<(), DomainError>;
}
