use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::*;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection};
use std::sync::Mutex;

const SELECT_COLS: &str = "id, user_id, account, pair, trade_type, entry, exit, lot_size, stop_loss, take_profit, commission, trade_date, duration_minutes, profit_loss, total, hashtags, notes, rating, created_at";

pub struct SqliteTradeRepo {
    conn: Mutex<Connection>,
}

impl SqliteTradeRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_trade(row: &rusqlite::Row) -> Result<Trade, rusqlite::Error> {
        let type_str: String = row.get(4)?;
        let date_str: String = row.get(11)?;
        let hashtags_str: String = row.get(15)?;
        let created_str: String = row.get(18)?;

        Ok(Trade {
            id: row.get(0)?,
            user_id: row.get(1)?,
            account: row.get(2)?,
            pair: row.get(3)?,
            trade_type: type_str
                .parse()
                .map_err(|e: String| conversion_error(4, DomainError::Parse(e)))?,
            entry: row.get(5)?,
            exit: row.get(6)?,
            lot_size: row.get(7)?,
            stop_loss: row.get(8)?,
            take_profit: row.get(9)?,
            commission: row.get(10)?,
            date: NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
                conversion_error(11, DomainError::Parse(format!("bad trade date '{date_str}': {e}")))
            })?,
            duration_minutes: row.get(12)?,
            profit_loss: row.get(13)?,
            total: row.get(14)?,
            hashtags: serde_json::from_str(&hashtags_str).unwrap_or_else(|e| {
                tracing::warn!(hashtags = %hashtags_str, error = %e, "unreadable hashtags, treating as empty");
                Vec::new()
            }),
            notes: row.get(16)?,
            rating: row.get(17)?,
            created_at: DateTime::parse_from_rfc3339(&created_str)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| {
                    conversion_error(18, DomainError::Parse(format!("bad created_at '{created_str}': {e}")))
                })?,
        })
    }
}

fn conversion_error(column: usize, err: DomainError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err))
}

impl TradeRepository for SqliteTradeRepo {
    fn add_trade(&self, trade: &Trade) -> Result<(), DomainError> {
        let hashtags = serde_json::to_string(&trade.hashtags)
            .map_err(|e| DomainError::Parse(format!("Failed to encode hashtags: {e}")))?;
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            &format!(
                "INSERT INTO trades ({SELECT_COLS})
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19)"
            ),
            params![
                trade.id,
                trade.user_id,
                trade.account,
                trade.pair,
                trade.trade_type.to_string(),
                trade.entry,
                trade.exit,
                trade.lot_size,
                trade.stop_loss,
                trade.take_profit,
                trade.commission,
                trade.date.format("%Y-%m-%d").to_string(),
                trade.duration_minutes,
                trade.profit_loss,
                trade.total,
                hashtags,
                trade.notes,
                trade.rating,
                trade.created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add trade: {e}")))?;
        tracing::info!(id = %trade.id, pair = %trade.pair, date = %trade.date, "trade stored");
        Ok(())
    }

    fn get_trade(&self, id: &str) -> Result<Option<Trade>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(&format!("SELECT {SELECT_COLS} FROM trades WHERE id = ?1"))
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut rows = stmt
            .query_map(params![id], Self::row_to_trade)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        match rows.next() {
            Some(row) => row
                .map(Some)
                .map_err(|e| DomainError::Database(format!("Failed to read trade {id}: {e}"))),
            None => Ok(None),
        }
    }

    fn list_trades(&self, filter: &TradeFilter) -> Result<Vec<Trade>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut sql = format!("SELECT {SELECT_COLS} FROM trades WHERE 1=1");
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(user_id) = &filter.user_id {
            sql.push_str(&format!(" AND user_id = ?{}", param_values.len() + 1));
            param_values.push(Box::new(user_id.clone()));
        }
        if let Some(account) = &filter.account {
            sql.push_str(&format!(" AND account = ?{}", param_values.len() + 1));
            param_values.push(Box::new(account.clone()));
        }
        if let Some(from) = &filter.from {
            sql.push_str(&format!(" AND trade_date >= ?{}", param_values.len() + 1));
            param_values.push(Box::new(from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = &filter.to {
            sql.push_str(&format!(" AND trade_date <= ?{}", param_values.len() + 1));
            param_values.push(Box::new(to.format("%Y-%m-%d").to_string()));
        }
        sql.push_str(" ORDER BY trade_date ASC, created_at ASC, rowid ASC");

        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut trades: Vec<Trade> = stmt
            .query_map(params_refs.as_slice(), Self::row_to_trade)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| match r {
                Ok(trade) => Some(trade),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable trade row");
                    None
                }
            })
            .collect();

        // Keep the most recent trades while staying chronological.
        if let Some(limit) = filter.limit {
            if trades.len() > limit {
                trades = trades.split_off(trades.len() - limit);
            }
        }
        Ok(trades)
    }

    fn delete_trade(&self, id: &str) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let rows = conn
            .execute("DELETE FROM trades WHERE id = ?1", params![id])
            .map_err(|e| DomainError::Database(format!("Failed to delete trade: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Trade not found: {id}")));
        }
        tracing::info!(id, "trade deleted");
        Ok(())
    }
}
