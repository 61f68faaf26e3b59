use crate::domain::error::DomainError;
use crate::domain::values::trade_type::TradeType;
use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A closed position as recorded in the journal.
///
/// `profit_loss` and `total` are trusted as stored; analytics never
/// re-derive them from prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,
    pub user_id: String,
    pub account: String,
    pub pair: String,
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    pub entry: f64,
    pub exit: f64,
    pub lot_size: f64,
    pub stop_loss: Option<f64>,
    pub take_profit: Option<f64>,
    pub commission: f64,
    pub date: NaiveDate,
    pub duration_minutes: i64,
    pub profit_loss: f64,
    pub total: f64,
    pub hashtags: Vec<String>,
    pub notes: String,
    pub rating: u8,
    pub created_at: DateTime<Utc>,
}

impl Trade {
    pub fn is_win(&self) -> bool {
        self.profit_loss > 0.0
    }

    pub fn is_loss(&self) -> bool {
        self.profit_loss < 0.0
    }

    pub fn is_break_even(&self) -> bool {
        self.profit_loss == 0.0
    }
}

/// Loosely-typed trade input as it arrives from the CLI or an import.
///
/// Validated once here so the analytics layer can assume a well-formed
/// `Trade`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTrade {
    pub account: String,
    pub pair: String,
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    pub entry: f64,
    pub exit: f64,
    pub lot_size: f64,
    #[serde(default)]
    pub stop_loss: Option<f64>,
    #[serde(default)]
    pub take_profit: Option<f64>,
    #[serde(default)]
    pub commission: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub duration_minutes: i64,
    pub profit_loss: f64,
    /// Defaults to `profit_loss - commission`.
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub rating: u8,
}

impl NewTrade {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.account.trim().is_empty() {
            return Err(DomainError::InvalidInput("account must not be empty".into()));
        }
        if self.pair.trim().is_empty() {
            return Err(DomainError::InvalidInput("pair must not be empty".into()));
        }

        let numbers = [
            ("entry", Some(self.entry)),
            ("exit", Some(self.exit)),
            ("lot_size", Some(self.lot_size)),
            ("stop_loss", self.stop_loss),
            ("take_profit", self.take_profit),
            ("commission", Some(self.commission)),
            ("profit_loss", Some(self.profit_loss)),
            ("total", self.total),
        ];
        for (name, value) in numbers {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(DomainError::InvalidInput(format!(
                        "{name} must be a finite number, got {v}"
                    )));
                }
            }
        }

        if self.lot_size <= 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "lot_size must be positive, got {}",
                self.lot_size
            )));
        }
        if self.commission < 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "commission must not be negative, got {}",
                self.commission
            )));
        }
        if self.duration_minutes < 0 {
            return Err(DomainError::InvalidInput(format!(
                "duration_minutes must not be negative, got {}",
                self.duration_minutes
            )));
        }
        if self.rating > 5 {
            return Err(DomainError::InvalidInput(format!(
                "rating must be between 0 and 5, got {}",
                self.rating
            )));
        }
        Ok(())
    }

    pub fn into_trade(self, user_id: &str) -> Result<Trade, DomainError> {
        self.validate()?;

        let total = self.total.unwrap_or(self.profit_loss - self.commission);
        Ok(Trade {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            account: self.account.trim().to_string(),
            pair: self.pair.trim().to_string(),
            trade_type: self.trade_type,
            entry: self.entry,
            exit: self.exit,
            lot_size: self.lot_size,
            stop_loss: self.stop_loss,
            take_profit: self.take_profit,
            commission: self.commission,
            date: self.date,
            duration_minutes: self.duration_minutes,
            profit_loss: self.profit_loss,
            total,
            hashtags: normalize_hashtags(self.hashtags),
            notes: self.notes,
            rating: self.rating,
            // Storage keeps microseconds.
            created_at: Utc::now().trunc_subsecs(6),
        })
    }
}

/// Trims, drops empties and duplicates, keeping first-seen order.
fn normalize_hashtags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().trim_start_matches('#').to_string();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_trade() -> NewTrade {
        serde_json::from_value(serde_json::json!({
            "account": "Demo",
            "pair": "EURUSD",
            "type": "Buy",
            "entry": 1.1,
            "exit": 1.105,
            "lot_size": 1.0,
            "commission": 2.5,
            "date": "2024-01-01",
            "profit_loss": 50.0,
            "hashtags": ["breakout", "#breakout", " london "]
        }))
        .unwrap()
    }

    #[test]
    fn test_into_trade_fills_defaults() {
        let trade = new_trade().into_trade("user-1").unwrap();
        assert_eq!(trade.user_id, "user-1");
        assert_eq!(trade.total, 47.5);
        assert_eq!(trade.duration_minutes, 0);
        assert_eq!(trade.rating, 0);
        assert_eq!(trade.stop_loss, None);
        assert_eq!(trade.hashtags, vec!["breakout", "london"]);
        assert!(trade.is_win());
    }

    #[test]
    fn test_created_at_has_whole_microseconds() {
        let trade = new_trade().into_trade("u").unwrap();
        assert_eq!(trade.created_at.timestamp_subsec_nanos() % 1_000, 0);
    }

    #[test]
    fn test_explicit_total_is_kept() {
        let mut input = new_trade();
        input.total = Some(10.0);
        let trade = input.into_trade("u").unwrap();
        assert_eq!(trade.total, 10.0);
    }

    #[test]
    fn test_lowercase_type_accepted() {
        let input: NewTrade = serde_json::from_value(serde_json::json!({
            "account": "Live",
            "pair": "GBPUSD",
            "type": "sell",
            "entry": 1.27,
            "exit": 1.26,
            "lot_size": 0.5,
            "date": "2024-02-02",
            "profit_loss": -12.0
        }))
        .unwrap();
        assert_eq!(input.trade_type, TradeType::Sell);
    }

    #[test]
    fn test_rejects_bad_rating() {
        let mut input = new_trade();
        input.rating = 6;
        assert!(matches!(input.validate(), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_non_positive_lot_size() {
        let mut input = new_trade();
        input.lot_size = 0.0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_rejects_nan() {
        let mut input = new_trade();
        input.profit_loss = f64::NAN;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_pair() {
        let mut input = new_trade();
        input.pair = "  ".into();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_missing_required_field_fails_to_parse() {
        let parsed: Result<NewTrade, _> = serde_json::from_value(serde_json::json!({
            "account": "Demo",
            "pair": "EURUSD",
            "type": "Buy",
            "entry": 1.1,
            "exit": 1.105,
            "lot_size": 1.0,
            "date": "2024-01-01"
        }));
        assert!(parsed.is_err());
    }
}
