use crate::domain::analytics::report::{report_file_name, serialize};
use crate::domain::analytics::time_window::filter_by_timeframe;
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::{TradeFilter, TradeRepository};
use crate::domain::values::timeframe::Timeframe;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct ExportUseCase {
    repo: Arc<dyn TradeRepository>,
    user_id: String,
}

impl ExportUseCase {
    pub fn new(repo: Arc<dyn TradeRepository>, user_id: String) -> Self {
        Self { repo, user_id }
    }

    /// CSV report of the trades inside `timeframe`.
    pub fn csv(&self, timeframe: Timeframe, now: DateTime<Utc>) -> Result<String, DomainError> {
        let trades = self.repo.list_trades(&TradeFilter {
            user_id: Some(self.user_id.clone()),
            ..Default::default()
        })?;
        let trades = filter_by_timeframe(&trades, timeframe, now);
        serialize(&trades)
    }

    /// Writes the report to `dir/trade_report_<date>.csv` and returns the path.
    pub fn write_report(
        &self,
        dir: &Path,
        timeframe: Timeframe,
        now: DateTime<Utc>,
    ) -> Result<PathBuf, DomainError> {
        let csv = self.csv(timeframe, now)?;
        let path = dir.join(report_file_name(now.date_naive()));
        std::fs::write(&path, csv)
            .map_err(|e| DomainError::Export(format!("Failed to write {}: {e}", path.display())))?;
        tracing::info!(path = %path.display(), %timeframe, "trade report written");
        Ok(path)
    }
}
