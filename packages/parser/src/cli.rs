//! Command-line interface for the parser.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{
    title_filename, validate_title, validate_year, DEFAULT_DATA_DIR, DEFAULT_OUTPUT_DIR,
    DEFAULT_YEAR,
};
use crate::error::{ParserError, Result};
use crate::input::load_title;
use crate::title::parse_title;

/// USC parser - Build outline trees from tokenized United States Code titles.
#[derive(Parser)]
#[command(name = "uscode-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse every section of a title into JSON trees.
    Parse {
        /// Title number (e.g., 5 or 50A)
        title: String,

        /// Release year of the dump
        #[arg(short, long, default_value_t = DEFAULT_YEAR.to_string())]
        year: String,

        /// Directory holding tokenized dumps as <year>/<title>.json
        #[arg(long, default_value = DEFAULT_DATA_DIR)]
        data_dir: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Also write a plain-text outline per section
        #[arg(long)]
        outline: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            title,
            year,
            data_dir,
            output,
            outline,
        } => parse_command(&title, &year, &data_dir, &output, outline),
    }
}

/// Execute the parse command.
fn parse_command(
    title: &str,
    year: &str,
    data_dir: &Path,
    output: &Path,
    outline: bool,
) -> Result<()> {
    validate_title(title)?;
    let year = validate_year(year)?;

    let dump_path = title_filename(data_dir, title, year);
    let dump = match load_title(&dump_path) {
        Ok(dump) => dump,
        Err(ParserError::TitleNotFound { path, .. }) => {
            tracing::error!(title, path = %path, "Title has not been downloaded");
            println!(
                "{} Title {} has not been downloaded (looked for {})",
                style("Skipping:").yellow().bold(),
                style(title).cyan(),
                path
            );
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    println!(
        "{} title {} ({} sections, {})",
        style("Parsing").bold(),
        style(title).cyan(),
        dump.sections.len(),
        style(year).green()
    );

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Building section trees...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let report = match parse_title(&dump, year, output, outline) {
        Ok(report) => report,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    if !report.failed.is_empty() {
        println!("  Failed: {}", style(report.failed.len()).red().bold());
        for citation in &report.failed {
            println!("    {citation}");
        }
    }
    if !report.warnings.is_empty() {
        println!("  Warnings: {}", style(report.warnings.len()).yellow().bold());
    }

    println!("Parsed {} sections of title {title}.", report.parsed);

    Ok(())
}
