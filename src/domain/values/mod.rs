pub mod breakdown_dimension;
pub mod profit_factor;
pub mod timeframe;
pub mod trade_type;
