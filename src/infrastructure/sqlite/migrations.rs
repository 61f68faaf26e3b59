use crate::domain::error::DomainError;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), DomainError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS trades (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            account TEXT NOT NULL,
            pair TEXT NOT NULL,
            trade_type TEXT NOT NULL,
            entry REAL NOT NULL,
            exit REAL NOT NULL,
            lot_size REAL NOT NULL,
            stop_loss REAL,
            take_profit REAL,
            commission REAL NOT NULL DEFAULT 0,
            trade_date TEXT NOT NULL,
            duration_minutes INTEGER NOT NULL DEFAULT 0,
            profit_loss REAL NOT NULL,
            total REAL NOT NULL,
            hashtags TEXT NOT NULL DEFAULT '[]',
            notes TEXT NOT NULL DEFAULT '',
            rating INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_trades_user_date ON trades(user_id, trade_date);
        CREATE INDEX IF NOT EXISTS idx_trades_account ON trades(account);
        ",
    )
    .map_err(|e| DomainError::Database(format!("Migration failed: {e}")))
}
