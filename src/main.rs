use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;
use tradejournal::application::analytics::SeriesKind;
use tradejournal::cli::commands::{Cli, Commands};
use tradejournal::config::JournalConfig;
use tradejournal::domain::entities::trade::NewTrade;
use tradejournal::domain::ports::trade_repository::TradeFilter;
use tradejournal::domain::values::breakdown_dimension::BreakdownDimension;
use tradejournal::domain::values::timeframe::Timeframe;
use tradejournal::TradeJournal;

fn main() {
    let cli = Cli::parse();
    let config = JournalConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let journal = match TradeJournal::new(&config) {
        Ok(journal) => journal,
        Err(e) => {
            eprintln!("Error initializing journal: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(journal, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(journal: TradeJournal, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    let now = chrono::Utc::now();

    match cmd {
        Commands::Add { json } => {
            let input: NewTrade = serde_json::from_str(&json)?;
            let trade = journal.trade_add(input)?;
            println!("{}", serde_json::to_string_pretty(&trade)?);
        }
        Commands::List {
            timeframe,
            account,
            from,
            to,
            limit,
        } => {
            let tf: Timeframe = timeframe.parse()?;
            let filter = TradeFilter {
                account,
                from: parse_date(&from)?,
                to: parse_date(&to)?,
                limit,
                ..Default::default()
            };
            let trades = journal.trade_list_in_timeframe(filter, tf, now)?;
            println!("{}", serde_json::to_string_pretty(&trades)?);
        }
        Commands::Show { id } => {
            let trade = journal.trade_get(&id)?;
            println!("{}", serde_json::to_string_pretty(&trade)?);
        }
        Commands::Delete { id } => {
            journal.trade_delete(&id)?;
            println!("Trade {id} deleted");
        }
        Commands::Metrics { timeframe } => {
            let tf: Timeframe = timeframe.parse()?;
            let metrics = journal.metrics(tf, now)?;
            println!("{}", serde_json::to_string_pretty(&metrics)?);
        }
        Commands::Breakdown {
            dimension,
            timeframe,
        } => {
            let dim: BreakdownDimension = dimension.parse()?;
            let tf: Timeframe = timeframe.parse()?;
            let entries = journal.breakdown(dim, tf, now)?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        Commands::Series { kind, timeframe } => {
            let kind: SeriesKind = kind.parse()?;
            let tf: Timeframe = timeframe.parse()?;
            let points = journal.series(kind, tf, now)?;
            println!("{}", serde_json::to_string_pretty(&points)?);
        }
        Commands::Dashboard { timeframe } => {
            let tf: Timeframe = timeframe.parse()?;
            let dashboard = journal.dashboard(tf, now)?;
            println!("{}", serde_json::to_string_pretty(&dashboard)?);
        }
        Commands::Export {
            timeframe,
            out_dir,
            stdout,
        } => {
            let tf: Timeframe = timeframe.parse()?;
            if stdout {
                print!("{}", journal.export_csv(tf, now)?);
            } else {
                let path = journal.export_to_dir(Path::new(&out_dir), tf, now)?;
                println!("Report written to {}", path.display());
            }
        }
    }
    Ok(())
}

fn parse_date(s: &Option<String>) -> Result<Option<chrono::NaiveDate>, String> {
    match s {
        None => Ok(None),
        Some(s) => chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| format!("Invalid date format: {s}. Use YYYY-MM-DD")),
    }
}
