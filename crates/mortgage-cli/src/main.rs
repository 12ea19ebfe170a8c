mod commands;
mod config;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::mortgage::{LabelArgs, LoanArgs};
use config::CliConfig;

/// Fixed-rate mortgage amortization
#[derive(Parser)]
#[command(
    name = "mortgage",
    version,
    about = "Fixed-rate mortgage amortization schedules",
    long_about = "Computes the level monthly payment for a fixed-rate loan and splits \
                  every installment into interest and principal, with running totals, \
                  chart series and table rows for display."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Full amortization: summary, schedule and running totals
    Schedule(LoanArgs),
    /// Interest vs principal series for a line chart
    Chart(LoanArgs),
    /// Display rows with yearly grouping and running totals
    Table(LoanArgs),
    /// Format a month number as years and months
    Label(LabelArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();

    let config = CliConfig::from_env().unwrap_or_else(|e| {
        eprintln!("{}: ignoring MORTGAGE_* settings: {}", "warning".yellow(), e);
        CliConfig::default()
    });
    init_tracing(&config);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Schedule(args) => commands::mortgage::run_schedule(args),
        Commands::Chart(args) => commands::mortgage::run_chart(args),
        Commands::Table(args) => commands::mortgage::run_table(args),
        Commands::Label(args) => commands::mortgage::run_label(args),
        Commands::Version => {
            println!("mortgage {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
