use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeType {
    #[serde(alias = "buy", alias = "BUY")]
    Buy,
    #[serde(alias = "sell", alias = "SELL")]
    Sell,
}

impl TradeType {
    pub const ALL: [TradeType; 2] = [TradeType::Buy, TradeType::Sell];
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeType::Buy => write!(f, "Buy"),
            TradeType::Sell => write!(f, "Sell"),
        }
    }
}

impl FromStr for TradeType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buy" | "long" => Ok(TradeType::Buy),
            "sell" | "short" => Ok(TradeType::Sell),
            _ => Err(format!("Unknown trade type: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(TradeType::from_str("BUY").unwrap(), TradeType::Buy);
        assert_eq!(TradeType::from_str("sell").unwrap(), TradeType::Sell);
        assert_eq!(TradeType::from_str("long").unwrap(), TradeType::Buy);
        assert!(TradeType::from_str("hold").is_err());
    }

    #[test]
    fn test_display_matches_report_labels() {
        assert_eq!(TradeType::Buy.to_string(), "Buy");
        assert_eq!(TradeType::Sell.to_string(), "Sell");
    }
}
