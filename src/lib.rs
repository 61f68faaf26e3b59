pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::analytics::{AnalyticsUseCase, Dashboard, SeriesKind};
use crate::application::export::ExportUseCase;
use crate::application::trade::TradeUseCase;
use crate::config::JournalConfig;
use crate::domain::analytics::breakdown::BreakdownEntry;
use crate::domain::analytics::metrics::MetricsSummary;
use crate::domain::analytics::time_series::TimeSeriesPoint;
use crate::domain::entities::trade::{NewTrade, Trade};
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::{TradeFilter, TradeRepository};
use crate::domain::values::breakdown_dimension::BreakdownDimension;
use crate::domain::values::timeframe::Timeframe;
use crate::infrastructure::sqlite::migrations::run_migrations;
use crate::infrastructure::sqlite::trade_repo::SqliteTradeRepo;
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct TradeJournal {
    trade_uc: TradeUseCase,
    analytics_uc: AnalyticsUseCase,
    export_uc: ExportUseCase,
}

impl TradeJournal {
    pub fn new(config: &JournalConfig) -> Result<Self, DomainError> {
        let conn = Connection::open(&config.db_path)
            .map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
        if config.db_path != ":memory:" {
            conn.pragma_update(None, "journal_mode", "WAL")
                .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
        }
        run_migrations(&conn)?;
        tracing::debug!(db = %config.db_path, "journal database ready");

        Ok(Self::with_repository(
            Arc::new(SqliteTradeRepo::new(conn)),
            &config.user_id,
        ))
    }

    /// Opens an in-memory journal, mostly for tests and dry runs.
    pub fn in_memory(user_id: &str) -> Result<Self, DomainError> {
        Self::new(&JournalConfig {
            db_path: ":memory:".into(),
            user_id: user_id.into(),
            ..Default::default()
        })
    }

    pub fn with_repository(repo: Arc<dyn TradeRepository>, user_id: &str) -> Self {
        Self {
            trade_uc: TradeUseCase::new(repo.clone(), user_id.to_string()),
            analytics_uc: AnalyticsUseCase::new(repo.clone(), user_id.to_string()),
            export_uc: ExportUseCase::new(repo, user_id.to_string()),
        }
    }

    // Delegating methods
    pub fn trade_add(&self, input: NewTrade) -> Result<Trade, DomainError> {
        self.trade_uc.add(input)
    }

    pub fn trade_get(&self, id: &str) -> Result<Trade, DomainError> {
        self.trade_uc.get(id)
    }

    pub fn trade_list(&self, filter: TradeFilter) -> Result<Vec<Trade>, DomainError> {
        self.trade_uc.list(filter)
    }

    pub fn trade_list_in_timeframe(
        &self,
        filter: TradeFilter,
        timeframe: Timeframe,
        now: DateTime<Utc>,
    ) -> Result<Vec<Trade>, DomainError> {
        self.trade_uc.list_in_timeframe(filter, timeframe, now)
    }

    pub fn trade_delete(&self, id: &str) -> Result<(), DomainError> {
        self.trade_uc.delete(id)
    }

    pub fn metrics(&self, timeframe: Timeframe, now: DateTime<Utc>) -> Result<MetricsSummary, DomainError> {
        self.analytics_uc.metrics(timeframe, now)
    }

    pub fn breakdown(
        &self,
        dimension: BreakdownDimension,
        timeframe: Timeframe,
        now: DateTime<Utc>,
    ) -> Result<Vec<BreakdownEntry>, DomainError> {
        self.analytics_uc.breakdown(dimension, timeframe, now)
    }

    pub fn series(
        &self,
        kind: SeriesKind,
        timeframe: Timeframe,
        now: DateTime<Utc>,
    ) -> Result<Vec<TimeSeriesPoint>, DomainError> {
        self.analytics_uc.series(kind, timeframe, now)
    }

    pub fn dashboard(&self, timeframe: Timeframe, now: DateTime<Utc>) -> Result<Dashboard, DomainError> {
        self.analytics_uc.dashboard(timeframe, now)
    }

    pub fn export_csv(&self, timeframe: Timeframe, now: DateTime<Utc>) -> Result<String, DomainError> {
        self.export_uc.csv(timeframe, now)
    }

    pub fn export_to_dir(
        &self,
        dir: &Path,
        timeframe: Timeframe,
        now: DateTime<Utc>,
    ) -> Result<PathBuf, DomainError> {
        self.export_uc.write_report(dir, timeframe, now)
    }
}
