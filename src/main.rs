use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use salary_breakup::api::{AppState, create_router};
use salary_breakup::calculation::SalaryCalculator;
use salary_breakup::config::ConfigLoader;
use salary_breakup::models::SalaryInput;

/// Salary breakup calculator with PF and ESIC deductions.
#[derive(Parser, Debug)]
#[command(name = "salary-breakup")]
#[command(version, about, long_about = None)]
struct Cli {
    /// YAML payroll configuration; built-in defaults are used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the breakdown for one set of inputs
    Calculate {
        /// Gross monthly amount
        #[arg(long)]
        gross: Option<Decimal>,

        /// Basic Pay as a percentage of gross
        #[arg(long)]
        basic: Option<Decimal>,

        /// HRA as a percentage of Basic Pay
        #[arg(long)]
        hra: Option<Decimal>,

        /// Other Allowance as a percentage of gross
        #[arg(long)]
        other: Option<Decimal>,

        /// Print the full breakdown as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = ConfigLoader::load_or_default(cli.config.as_ref())
        .with_context(|| match &cli.config {
            Some(path) => format!("Failed to load configuration: {}", path.display()),
            None => "Failed to build default configuration".to_string(),
        })?
        .into_config();

    match cli.command {
        Command::Calculate {
            gross,
            basic,
            hra,
            other,
            json,
        } => {
            let input = SalaryInput {
                gross_amount: gross,
                basic_percentage: basic,
                hra_percentage: hra,
                other_percentage: other,
            };
            let breakdown = SalaryCalculator::new(config)
                .recompute(&input)
                .context("Failed to calculate salary breakdown")?;

            if json {
                let rendered = serde_json::to_string_pretty(&breakdown)
                    .context("Failed to serialize breakdown")?;
                println!("{}", rendered);
            } else {
                print!("{}", breakdown);
            }
        }
        Command::Serve { addr } => {
            let router = create_router(AppState::new(config));
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .with_context(|| format!("Failed to bind {}", addr))?;

            info!(%addr, "Salary breakup API listening");
            axum::serve(listener, router)
                .await
                .context("HTTP server terminated")?;
        }
    }

    Ok(())
}
