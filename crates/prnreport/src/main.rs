//! prnreport
//!
//! Collects printer inventory from the monitoring platform and writes a
//! dated spreadsheet report.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use clap::Parser;
use color_eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use prnreport_client::RpcClient;
use prnreport_inventory::{PrinterCollector, PrinterRecord};
use prnreport_report::layout::{HEADERS, column_widths};
use prnreport_report::{ReportRow, ReportWriter};

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "prnreport")]
#[command(about = "Printer page counter report from the monitoring platform", long_about = None)]
struct Cli {
    /// Config file (defaults: $PRNREPORT_CONFIG, ./prnreport.toml, /etc/prnreport/prnreport.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory to write the report to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Collect and print a summary without writing the workbook
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config_path = cli.config.clone().or_else(Config::locate);
    let mut config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &config_path {
        Some(path) => info!(path = %path.display(), "configuration loaded"),
        None => warn!("no config file found, using defaults"),
    }

    run(cli, config).await
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    config.validate()?;

    let client = RpcClient::new(&config.client_config())?;
    let collector = PrinterCollector::new(Arc::new(client));

    let records = collector.collect(&config.credentials()).await?;

    if records.is_empty() {
        info!("no printers match the criteria, no report written");
        return Ok(());
    }
    info!(count = records.len(), "printers found");

    if cli.dry_run {
        print_summary(&records, config.report.max_column_width);
        return Ok(());
    }

    let output_dir = cli.output_dir.unwrap_or(config.report.output_dir);
    let path = ReportWriter::new()
        .with_max_column_width(config.report.max_column_width)
        .write(&output_dir, &records, Local::now().date_naive())?;

    println!("Report saved: {}", path.display());
    Ok(())
}

fn print_summary(records: &[PrinterRecord], max_width: usize) {
    let rows: Vec<ReportRow> = records.iter().map(ReportRow::from).collect();
    let widths = column_widths(&rows, max_width);

    let line = |cells: &[&str]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<String>()
    };

    println!("{}", line(&HEADERS[..]).trim_end());
    for row in &rows {
        let cells: Vec<&str> = row.cells.iter().map(String::as_str).collect();
        println!("{}", line(&cells[..]).trim_end());
    }
}
