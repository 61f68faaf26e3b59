use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tradejournal", about = "Personal trading journal and performance analytics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log a closed trade
    Add {
        /// JSON with account, pair, type, entry, exit, lot_size, date, profit_loss and
        /// optional stop_loss, take_profit, commission, duration_minutes, total, hashtags, notes, rating
        json: String,
    },
    /// List logged trades (oldest first)
    List {
        /// Lookback window (all, week, month, quarter, year)
        #[arg(long, default_value = "all")]
        timeframe: String,
        #[arg(long)]
        account: Option<String>,
        /// Start of date range (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End of date range (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Keep only the most recent N trades
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show a single trade
    Show {
        /// Trade ID
        id: String,
    },
    /// Delete a trade
    Delete {
        /// Trade ID
        id: String,
    },
    /// Summary performance metrics
    Metrics {
        #[arg(long, default_value = "all")]
        timeframe: String,
    },
    /// Trade counts and profit grouped by a dimension
    Breakdown {
        /// Dimension (pair, account, type, dayOfWeek, result)
        dimension: String,
        #[arg(long, default_value = "all")]
        timeframe: String,
    },
    /// Profit series for charts
    Series {
        /// monthly (last 6 months) or daily (last 7 days)
        kind: String,
        #[arg(long, default_value = "all")]
        timeframe: String,
    },
    /// Metrics, breakdowns and series in one document
    Dashboard {
        #[arg(long, default_value = "all")]
        timeframe: String,
    },
    /// Export trades as a CSV report
    Export {
        #[arg(long, default_value = "all")]
        timeframe: String,
        /// Directory the trade_report_<date>.csv file is written to
        #[arg(long, default_value = ".")]
        out_dir: String,
        /// Print the CSV to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
}
