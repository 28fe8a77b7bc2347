//! Newsmood CLI binary.
//!
//! Provides a command-line interface for browsing monthly headline
//! sentiment by entity.

mod integration;

use clap::{Parser, Subcommand};
use integration::format::ReportFormat;
use integration::session::Session;
use newsmood_analysis::{StopWords, filter_by_month};
use newsmood_data::MonthKey;
use newsmood_output::{
    ExportFormat, Exporter, HeadlineListing, NO_HEADLINES, RenderOptions, render_markdown,
    render_text,
};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "newsmood")]
#[command(about = "Newsmood: monthly sentiment of news headlines", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (default: <config dir>/newsmood/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the selectable months and their headline counts
    Months {
        /// Headline CSV file
        #[arg(long)]
        data: PathBuf,
    },

    /// Show sentiment proportions, top words and example headlines
    Report {
        /// Headline CSV file
        #[arg(long)]
        data: PathBuf,

        /// Month to report (YYYY-MM)
        #[arg(long)]
        month: MonthKey,

        /// Output format (text, markdown or json)
        #[arg(long, default_value = "text")]
        format: ReportFormat,
    },

    /// Write a month's proportions or example headlines to a file
    Export {
        /// Headline CSV file
        #[arg(long)]
        data: PathBuf,

        /// Month to export (YYYY-MM)
        #[arg(long)]
        month: MonthKey,

        /// Destination file
        #[arg(long)]
        output: PathBuf,

        /// Output format (csv, json or pretty-json)
        #[arg(long, default_value = "csv")]
        format: ExportFormat,

        /// Export example headlines instead of proportions
        #[arg(long)]
        headlines: bool,
    },

    /// Show the most frequent words in an entity's headlines
    Words {
        /// Headline CSV file
        #[arg(long)]
        data: PathBuf,

        /// Month to analyze (YYYY-MM)
        #[arg(long)]
        month: MonthKey,

        /// Entity name
        #[arg(long)]
        entity: String,

        /// Number of words to show
        #[arg(long, default_value = "20")]
        top: usize,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Months { data } => {
            list_months(&data, config)?;
        }
        Commands::Report {
            data,
            month,
            format,
        } => {
            show_report(&data, config, month, format)?;
        }
        Commands::Export {
            data,
            month,
            output,
            format,
            headlines,
        } => {
            export_month(&data, config, month, &output, format, headlines)?;
        }
        Commands::Words {
            data,
            month,
            entity,
            top,
        } => {
            show_words(&data, config, month, &entity, top)?;
        }
    }

    Ok(())
}

fn list_months(data: &Path, config: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::open(data, config)?;
    let months = session.month_counts();

    println!("\nSelectable months ({})", session.config.range);
    println!("{}", "─".repeat(40));
    if months.is_empty() {
        println!("  {}", NO_HEADLINES);
    }
    for (month, count) in months {
        println!("  {}  {:<16} {:>6}", month, month.label(), count);
    }
    println!();

    Ok(())
}

fn show_report(
    data: &Path,
    config: Option<&Path>,
    month: MonthKey,
    format: ReportFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::open(data, config)?;
    let report = session.report(month);
    let options = RenderOptions::default();

    match format {
        ReportFormat::Text => print!("{}", render_text(&report, &options)),
        ReportFormat::Markdown => print!("{}", render_markdown(&report, &options)),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn export_month(
    data: &Path,
    config: Option<&Path>,
    month: MonthKey,
    output: &Path,
    format: ExportFormat,
    headlines: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::open(data, config)?;
    let report = session.report(month);

    if headlines {
        let listing = HeadlineListing::from_report(&report);
        listing.export_to_file(output, format)?;
        println!(
            "Wrote {} headlines for {} to {}",
            listing.rows.len(),
            month.label(),
            output.display()
        );
    } else {
        report.export_to_file(output, format)?;
        println!(
            "Wrote {} proportions for {} to {}",
            report.entities.len() * report.sentiments.len(),
            month.label(),
            output.display()
        );
    }

    Ok(())
}

fn show_words(
    data: &Path,
    config: Option<&Path>,
    month: MonthKey,
    entity: &str,
    top: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::open(data, config)?;
    let month_data = filter_by_month(&session.dataset, month);
    let summary = session.aggregator().summarize_entity(&month_data, entity);

    println!("\nTop words: {} – {}", summary.entity, month.label());
    println!("{}", "─".repeat(40));

    let words = summary.word_frequencies(&StopWords::english());
    if words.is_empty() {
        println!("  {}", NO_HEADLINES);
    }
    for word in words.iter().take(top) {
        println!("  {:<20} {:>5} {:>6.2}", word.word, word.count, word.weight);
    }
    println!();

    Ok(())
}
