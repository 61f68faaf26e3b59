use serde::{Deserialize, Serialize};
use std::fmt;

/// Gross profit over absolute gross loss.
///
/// A journal with winners and no losers has no finite ratio; that case is
/// carried as `Infinite` instead of an IEEE infinity so it survives JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitFactor {
    Finite(f64),
    Infinite,
}

impl ProfitFactor {
    /// `gross_loss` is the signed (non-positive) sum of losing trades.
    pub fn from_gross(gross_profit: f64, gross_loss: f64) -> Self {
        if gross_loss != 0.0 {
            ProfitFactor::Finite(gross_profit / gross_loss.abs())
        } else if gross_profit > 0.0 {
            ProfitFactor::Infinite
        } else {
            ProfitFactor::Finite(0.0)
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, ProfitFactor::Infinite)
    }
}

impl Default for ProfitFactor {
    fn default() -> Self {
        ProfitFactor::Finite(0.0)
    }
}

impl fmt::Display for ProfitFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfitFactor::Finite(v) => write!(f, "{v:.2}"),
            ProfitFactor::Infinite => write!(f, "inf"),
        }
    }
}
