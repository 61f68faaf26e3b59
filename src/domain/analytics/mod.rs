//! Trade performance analytics.
//!
//! Every function here is a pure transformation over an already loaded
//! slice of trades. Anything time-relative takes `now` as an argument.

pub mod breakdown;
pub mod metrics;
pub mod report;
pub mod time_series;
pub mod time_window;
