//! Medlist CLI - serve and inspect the medication table
//!
//! # Main Commands
//!
//! ```bash
//! medlist serve                      # Start HTTP server (PORT or 8050)
//! medlist table --query adder        # Print the filtered table as JSON
//! medlist legend                     # Print category markers
//! medlist columns                    # Show the visible / hidden split
//! medlist chart --types Stimulant    # Print duration chart data
//! ```

use clap::{Parser, Subcommand};
use medlist::{load_dataset, AppConfig, Dashboard, Palette};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "medlist")]
#[command(about = "Interactive adult ADHD medication table", long_about = None)]
struct Cli {
    /// Medication CSV (overrides MEDLIST_DATA)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (overrides HOST)
        #[arg(long)]
        host: Option<String>,
    },

    /// Print the table view as JSON
    Table {
        /// Case-insensitive search on the brand name
        #[arg(short, long)]
        query: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the category legend
    Legend,

    /// Show which columns are visible and which go to the tooltip
    Columns,

    /// Print duration bars and hierarchy as JSON
    Chart {
        /// Comma-separated medication types (default: all)
        #[arg(short, long)]
        types: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::from_env()?;
    if let Some(data) = cli.data {
        config.data_file = data;
    }

    if let Commands::Serve { port, host } = &cli.command {
        if let Some(port) = port {
            config.port = *port;
        }
        if let Some(host) = host {
            config.host = host.clone();
        }
    }

    let dashboard = load_dashboard(&config)?;

    match cli.command {
        Commands::Serve { .. } => medlist::server::start_server(&config, dashboard).await?,

        Commands::Table { query, output } => {
            let view = dashboard.table(query.as_deref());
            eprintln!("🔍 {} of {} medications", view.matched, view.total);
            write_output(&serde_json::to_string_pretty(&view)?, output.as_deref())?;
        }

        Commands::Legend => {
            for entry in dashboard.legend() {
                println!("  {}  {}", entry.marker.value(), entry.category);
            }
        }

        Commands::Columns => {
            let partition = &dashboard.options().partition;
            println!("Visible: {}", partition.visible.join(", "));
            println!("Hidden:  {}", partition.hidden.join(", "));
        }

        Commands::Chart { types, output } => {
            let query = medlist::ChartQuery { types };
            let chart = dashboard.chart(&query.categories());
            eprintln!("📊 {} bars", chart.bars.len());
            write_output(&serde_json::to_string_pretty(&chart)?, output.as_deref())?;
        }
    }

    Ok(())
}

/// Load the dataset; any failure stops the process.
fn load_dashboard(config: &AppConfig) -> Result<Dashboard, Box<dyn std::error::Error>> {
    eprintln!("📄 Loading: {}", config.data_file.display());

    let dataset = load_dataset(&config.data_file)?;
    eprintln!("   Columns: {}", dataset.headers().join(", "));
    eprintln!("✅ Loaded {} medications", dataset.len());

    let options = config.dashboard_options(&dataset);
    Ok(Dashboard::new(dataset, options, &Palette::for_kind(config.markers)))
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
