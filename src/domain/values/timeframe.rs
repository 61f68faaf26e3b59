use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dashboard lookback window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    #[default]
    All,
    Week,
    Month,
    Quarter,
    Year,
}

impl Timeframe {
    /// Number of days looked back from `now`, `None` for an unbounded window.
    pub fn lookback_days(&self) -> Option<i64> {
        match self {
            Timeframe::All => None,
            Timeframe::Week => Some(7),
            Timeframe::Month => Some(30),
            Timeframe::Quarter => Some(90),
            Timeframe::Year => Some(365),
        }
    }

    /// Earliest instant a trade may fall on to be inside the window.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.lookback_days().map(|days| now - Duration::days(days))
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timeframe::All => write!(f, "all"),
            Timeframe::Week => write!(f, "week"),
            Timeframe::Month => write!(f, "month"),
            Timeframe::Quarter => write!(f, "quarter"),
            Timeframe::Year => write!(f, "year"),
        }
    }
}

impl FromStr for Timeframe {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Timeframe::All),
            "week" | "7d" => Ok(Timeframe::Week),
            "month" | "30d" => Ok(Timeframe::Month),
            "quarter" | "90d" => Ok(Timeframe::Quarter),
            "year" | "365d" => Ok(Timeframe::Year),
            _ => Err(format!("Unknown timeframe: {s}")),
        }
    }
}
