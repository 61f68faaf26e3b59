//! CSV trade report.

use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use chrono::NaiveDate;

pub const HEADER: [&str; 10] = [
    "Date", "Account", "Pair", "Type", "Entry", "Exit", "Lot Size", "P/L", "Duration", "Hashtags",
];

/// Renders `trades` as CSV, one row per trade after the header row.
///
/// Fields containing a delimiter, quote or newline are quoted with internal
/// quotes doubled. Records end with `\n`.
pub fn serialize(trades: &[Trade]) -> Result<String, DomainError> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(HEADER)
        .map_err(|e| DomainError::Export(format!("Failed to write CSV header: {e}")))?;

    for trade in trades {
        wtr.write_record(row(trade))
            .map_err(|e| DomainError::Export(format!("Failed to write trade {}: {e}", trade.id)))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| DomainError::Export(format!("Failed to flush CSV writer: {e}")))?;
    String::from_utf8(bytes).map_err(|e| DomainError::Export(format!("CSV is not UTF-8: {e}")))
}

fn row(trade: &Trade) -> [String; 10] {
    [
        trade.date.format("%Y-%m-%d").to_string(),
        trade.account.clone(),
        trade.pair.clone(),
        trade.trade_type.to_string(),
        trade.entry.to_string(),
        trade.exit.to_string(),
        trade.lot_size.to_string(),
        trade.profit_loss.to_string(),
        trade.duration_minutes.to_string(),
        trade.hashtags.join(" "),
    ]
}

/// File name a report generated on `date` is saved under.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("trade_report_{}.csv", date.format("%Y-%m-%d"))
}
