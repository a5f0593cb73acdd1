//! `slotscan` -- find times when an instructor and an aircraft are both free.
//!
//! ## Usage
//!
//! ```sh
//! # Scan captured daily grids for the next 7 days
//! slotscan scan -i grids.json --cfis "Jane Smith|Bob Jones" --planes "N123AB|N456CD"
//!
//! # Same, configured from the environment (or a `.env` file in the working directory)
//! SLOTSCAN_CFIS="Jane Smith" SLOTSCAN_PLANES="N123AB" SLOTSCAN_DAYS=14 slotscan scan -i grids.json
//!
//! # Report over already-classified day schedules (stdin → stdout)
//! cat schedules.json | slotscan report --min-blocks 3
//!
//! # Raw intersection records as JSON
//! slotscan intersect -i schedules.json
//! ```

mod telemetry;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use slot_engine::{
    availability_windows, intersect, scan, DaySchedule, GridFileSource, Roster, ScanConfig,
};
use std::io::{self, Read};
use tracing::Level;

/// Printed after the text report.
const END_MARKER: &str = "-- THE END --";

#[derive(Parser)]
#[command(
    name = "slotscan",
    version,
    about = "Find shared instructor/aircraft availability in flight-school schedules"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan captured daily grids across a date range
    Scan {
        /// JSON array of daily grids (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Treat this date as today (YYYY-MM-DD, defaults to the local date)
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Number of days to check after the start date
        #[arg(long, env = "SLOTSCAN_DAYS")]
        days: Option<u32>,
        /// Start date offset from today, in days
        #[arg(long, env = "SLOTSCAN_START_OFFSET", allow_negative_numbers = true)]
        start_offset: Option<i64>,
        /// Minimum number of contiguous shared blocks to report
        #[arg(long, env = "SLOTSCAN_MIN_BLOCKS")]
        min_blocks: Option<usize>,
        /// `|`-separated instructor names
        #[arg(long, env = "SLOTSCAN_CFIS", default_value = "")]
        cfis: String,
        /// `|`-separated aircraft names
        #[arg(long, env = "SLOTSCAN_PLANES", default_value = "")]
        planes: String,
        /// Write availability windows as JSON instead of report lines
        #[arg(long)]
        json: bool,
    },
    /// Report shared availability from classified day schedules
    Report {
        /// JSON array of day schedules (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Minimum number of contiguous shared blocks to report
        #[arg(long, env = "SLOTSCAN_MIN_BLOCKS")]
        min_blocks: Option<usize>,
        /// Write availability windows as JSON instead of report lines
        #[arg(long)]
        json: bool,
    },
    /// Print raw intersection records as JSON
    Intersect {
        /// JSON array of day schedules (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    // SLOTSCAN_* settings may live in a `.env` file; real environment wins.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    telemetry::init_tracing(cli.log_json, Level::INFO);

    let defaults = ScanConfig::default();

    match cli.command {
        Commands::Scan {
            input,
            output,
            today,
            days,
            start_offset,
            min_blocks,
            cfis,
            planes,
            json,
        } => {
            let config = ScanConfig {
                days: days.unwrap_or(defaults.days),
                start_offset: start_offset.unwrap_or(defaults.start_offset),
                min_blocks: min_blocks.unwrap_or(defaults.min_blocks),
                roster: Roster {
                    cfis: Roster::parse_list(&cfis),
                    planes: Roster::parse_list(&planes),
                },
            };
            if config.roster.is_empty() {
                tracing::warn!("no instructor or aircraft names configured; nothing can match");
            }

            let raw = read_input(input.as_deref())?;
            let mut source = GridFileSource::from_json(&raw, config.roster.clone())
                .context("Failed to load schedule grids")?;
            let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());

            let outcome = scan(&mut source, today, &config).context("Scan failed")?;

            let rendered = if json {
                serde_json::to_string_pretty(&outcome.windows)?
            } else {
                render_lines(&outcome.lines())
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Report {
            input,
            output,
            min_blocks,
            json,
        } => {
            let schedules = read_schedules(input.as_deref())?;
            let records = intersect(&schedules);
            let windows = availability_windows(&records, min_blocks.unwrap_or(defaults.min_blocks))
                .context("Failed to build report")?;

            let rendered = if json {
                serde_json::to_string_pretty(&windows)?
            } else {
                let lines: Vec<String> = windows.iter().map(ToString::to_string).collect();
                render_lines(&lines)
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Intersect { input, output } => {
            let schedules = read_schedules(input.as_deref())?;
            let records = intersect(&schedules);
            let rendered = serde_json::to_string_pretty(&records)?;
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

/// One line per window, followed by the end marker.
fn render_lines(lines: &[String]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(END_MARKER);
    out.push('\n');
    out
}

fn read_schedules(path: Option<&str>) -> Result<Vec<DaySchedule>> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse day schedules")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
