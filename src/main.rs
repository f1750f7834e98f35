//! Wildfire Dashboard
//!
//! Run with: cargo run -- serve
//!
//! # Commands
//!
//! - `serve` (default): load the dataset and serve the dashboard
//! - `summary`: print the monthly aggregates for one region/year
//! - `init-config`: print a documented default config file
//!
//! # Configuration
//!
//! `--config <path>`, else `~/.config/wildfire-dashboard/config.toml` or
//! `./config.toml`, else defaults. `WILDFIRE_*` environment variables
//! override file values; `RUST_LOG` overrides the log level.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wildfire_dashboard::api::{serve, ApiConfig, AppState};
use wildfire_dashboard::config::{generate_default_config, Config, LoggingConfig};
use wildfire_dashboard::dashboard::{
    fire_area_title, monthly_mean, pixel_count_title, region_year_display, Metric,
    MonthlyAggregate,
};
use wildfire_dashboard::data::{DatasetLoader, FireDataset};

#[derive(Parser)]
#[command(name = "wildfire-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Australia wildfire dashboard: monthly fire area and pixel averages by region and year")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Dataset URL or CSV path (overrides config)
    #[arg(short, long, global = true)]
    data: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print monthly averages for a region and year
    Summary {
        /// Region code (NSW, NT, QL, SA, TA, VI, WA)
        #[arg(short, long, default_value = "NSW")]
        region: String,
        /// Year
        #[arg(short, long, default_value = "2005")]
        year: i32,
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Print a default config file
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::InitConfig) = cli.command {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };
    if let Some(data) = cli.data {
        config.data.source = data;
    }

    init_tracing(&config.logging);
    config.log_load_outcome();

    // One event is handled to completion before the next.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;

    runtime.block_on(run(cli.command, config))
}

async fn run(command: Option<Commands>, mut config: Config) -> anyhow::Result<()> {
    match command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    }) {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            tracing::info!("Starting Wildfire Dashboard v{}", env!("CARGO_PKG_VERSION"));

            let dataset = Arc::new(load_dataset(&config).await?);
            let api_config = ApiConfig::from(&config);

            tracing::info!("Month order: {}", api_config.month_order);

            serve(AppState::new(dataset, api_config.clone()), &api_config)
                .await
                .context("dashboard server failed")?;
        }

        Commands::Summary {
            region,
            year,
            format,
        } => {
            let dataset = load_dataset(&config).await?;
            print_summary(&dataset, &region, year, &format, &config)?;
        }

        Commands::InitConfig => print!("{}", generate_default_config()),
    }

    Ok(())
}

async fn load_dataset(config: &Config) -> anyhow::Result<FireDataset> {
    let source = config.data.data_source();
    let loader = DatasetLoader::new(config.data.fetch_timeout())?;

    loader
        .load(&source)
        .await
        .with_context(|| format!("loading wildfire dataset from {}", source))
}

fn print_summary(
    dataset: &FireDataset,
    region: &str,
    year: i32,
    format: &str,
    config: &Config,
) -> anyhow::Result<()> {
    let order = config.charts.month_order;

    match format.to_lowercase().as_str() {
        "json" => {
            let figures = region_year_display(dataset, region, Some(year), order);
            println!("{}", serde_json::to_string_pretty(&figures)?);
        }
        "table" => {
            let rows: Vec<_> = dataset.select(region, Some(year)).collect();
            let area = monthly_mean(rows.iter().copied(), Metric::EstimatedFireArea, order);
            let pixels = monthly_mean(rows.iter().copied(), Metric::Count, order);

            println!("{} matching records\n", rows.len());
            print_table(&fire_area_title(region, Some(year)), &area);
            println!();
            print_table(&pixel_count_title(region, Some(year)), &pixels);
        }
        other => anyhow::bail!("Unknown format: {}. Use table or json", other),
    }

    Ok(())
}

fn print_table(title: &str, rows: &[MonthlyAggregate]) {
    println!("{}", title);
    println!("{:<12} {:>14}", "Month", "Mean");
    println!("{}", "-".repeat(27));
    if rows.is_empty() {
        println!("(no data)");
    }
    for row in rows {
        println!("{:<12} {:>14.4}", row.month, row.value);
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "wildfire_dashboard={level},tower_http={level}",
            level = logging.level
        ))
    });

    let (pretty, json) = if logging.is_json() {
        (None, Some(tracing_subscriber::fmt::layer().json()))
    } else {
        (Some(tracing_subscriber::fmt::layer()), None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .init();
}
