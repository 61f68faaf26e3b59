use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BreakdownDimension {
    Pair,
    Account,
    Type,
    DayOfWeek,
    Result,
}

impl fmt::Display for BreakdownDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakdownDimension::Pair => write!(f, "pair"),
            BreakdownDimension::Account => write!(f, "account"),
            BreakdownDimension::Type => write!(f, "type"),
            BreakdownDimension::DayOfWeek => write!(f, "dayOfWeek"),
            BreakdownDimension::Result => write!(f, "result"),
        }
    }
}

impl FromStr for BreakdownDimension {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pair" | "symbol" => Ok(BreakdownDimension::Pair),
            "account" => Ok(BreakdownDimension::Account),
            "type" | "side" => Ok(BreakdownDimension::Type),
            "dayofweek" | "day-of-week" | "day_of_week" | "weekday" => {
                Ok(BreakdownDimension::DayOfWeek)
            }
            "result" | "outcome" => Ok(BreakdownDimension::Result),
            _ => Err(format!("Unknown breakdown dimension: {s}")),
        }
    }
}
