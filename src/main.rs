use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use trip_planner::utils::load_items::{load_items, thanksgiving_list};
use trip_planner::utils::report::{render_json, TripReport, DEFAULT_TITLE};
use trip_planner::{Minutes, TripOptimizer, TripSolver};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(about = "Plan a shopping trip, closest stores first")]
struct Args {
    /// JSON file with the items to buy (defaults to the Thanksgiving list)
    #[arg(long)]
    items: Option<PathBuf>,
    /// Minutes available for the whole trip
    #[arg(long, default_value_t = 120.0, allow_negative_numbers = true)]
    available: Minutes,
    /// Report title
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    // init shopping list
    let items = match &args.items {
        Some(path) => load_items(path)
            .with_context(|| format!("could not load shopping list {}", path.display()))?,
        None => thanksgiving_list(),
    };
    tracing::info!(count = items.len(), "shopping list ready");

    let plan = TripOptimizer::new().plan(&items);

    match args.format {
        OutputFormat::Text => {
            print!("{}", TripReport::new(&plan, args.available, &args.title));
        }
        OutputFormat::Json => {
            println!("{}", render_json(&plan, args.available)?);
        }
    }

    Ok(())
}
