//! Crop Calendar - Main Entry Point
//!
//! Text presentation shell over the `crop_calendar` library: region and crop
//! listings, schedule cards, the activity timeline, day details and a month
//! calendar.

use anyhow::{Context, Result, anyhow};
use chrono::{Datelike, Month};
use clap::{CommandFactory, Parser, Subcommand};
use crop_calendar::{CropCalendar, FormSelection, Storage, formatting, logging, validation};
use std::path::PathBuf;

/// Crop Calendar - planting schedules for a region and crop
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a catalog file (TOML); the bundled catalog is used when omitted
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, global = true, default_value = logging::DEFAULT_LOG_LEVEL)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List regions
    Regions,

    /// List the crops of a region
    Crops {
        /// Region identifier
        region: String,
    },

    /// Generate and print the schedule for a region and crop
    Schedule {
        /// Region identifier
        region: String,
        /// Crop name
        crop: String,
        /// Soil type; the crop's first soil type when omitted
        #[arg(long)]
        soil_type: Option<String>,
        /// Climate condition; the crop's first climate condition when omitted
        #[arg(long)]
        climate: Option<String>,
        /// Generation year; the current year when omitted
        #[arg(long)]
        year: Option<i32>,
        /// Print the schedule as TOML
        #[arg(long = "toml")]
        as_toml: bool,
    },

    /// Print the activities on one day
    Day {
        /// Region identifier
        region: String,
        /// Crop name
        crop: String,
        /// Day to inspect (YYYY-MM-DD)
        date: String,
        /// Generation year; the year of the date when omitted
        #[arg(long)]
        year: Option<i32>,
    },

    /// Print a month calendar with activity markers
    Calendar {
        /// Region identifier
        region: String,
        /// Crop name
        crop: String,
        /// Month name or number; the month of the first activity when omitted
        #[arg(long)]
        month: Option<String>,
        /// Generation year; the current year when omitted
        #[arg(long)]
        year: Option<i32>,
        /// Day to highlight (YYYY-MM-DD)
        #[arg(long)]
        select: Option<String>,
    },

    /// Write the active catalog to a TOML file
    ExportCatalog {
        /// Destination path
        path: PathBuf,
    },
}

fn load_calendar(catalog: Option<&PathBuf>) -> Result<CropCalendar> {
    match catalog {
        Some(path) => CropCalendar::from_path(path),
        None => CropCalendar::bundled(),
    }
}

fn run(args: Args) -> Result<()> {
    let calendar = load_calendar(args.catalog.as_ref())?;

    match args.command {
        Command::Regions => {
            print!("{}", formatting::format_regions(&calendar.list_regions()));
        }

        Command::Crops { region } => {
            print!(
                "{}",
                formatting::format_crops(&region, &calendar.list_crops(&region))
            );
        }

        Command::Schedule {
            region,
            crop,
            soil_type,
            climate,
            year,
            as_toml,
        } => {
            let defaults = FormSelection::defaults_for_crop(calendar.catalog(), &region, &crop);
            let selection = FormSelection::new(
                &region,
                &crop,
                soil_type.as_deref().unwrap_or(&defaults.soil_type),
                climate.as_deref().unwrap_or(&defaults.climate_condition),
            );
            let schedule = calendar.submit(&selection, year).map_err(|e| anyhow!(e))?;

            if as_toml {
                print!(
                    "{}",
                    toml::to_string_pretty(&schedule).context("Failed to encode schedule")?
                );
            } else {
                println!(
                    "{}",
                    formatting::format_schedule_header(&schedule, &selection)
                );
                println!("{}", formatting::format_schedule_cards(&schedule));
                print!("{}", formatting::format_timeline(&schedule));
            }
        }

        Command::Day {
            region,
            crop,
            date,
            year,
        } => {
            let date = validation::parse_date(&date).map_err(|e| anyhow!(e))?;
            let schedule = calendar.generate_schedule_for_year(
                &region,
                &crop,
                year.unwrap_or_else(|| date.year()),
            );
            if schedule.is_empty() {
                println!("{}", formatting::NO_SCHEDULE);
            } else {
                print!("{}", formatting::format_day_activities(&schedule, date));
            }
        }

        Command::Calendar {
            region,
            crop,
            month,
            year,
            select,
        } => {
            let schedule = match year {
                Some(year) => calendar.generate_schedule_for_year(&region, &crop, year),
                None => calendar.generate_schedule(&region, &crop),
            };
            if schedule.is_empty() {
                println!("{}", formatting::NO_SCHEDULE);
                return Ok(());
            }

            let mut marking = calendar.marked_dates(&schedule);
            if let Some(select) = select {
                marking.select(validation::parse_date(&select).map_err(|e| anyhow!(e))?);
            }

            let month = match month {
                Some(month) => validation::parse_month(&month).map_err(|e| anyhow!(e))?,
                None => schedule
                    .start_date()
                    .and_then(|start| Month::try_from(start.month() as u8).ok())
                    .unwrap_or(Month::January),
            };
            print!(
                "{}",
                formatting::format_month_calendar(&marking, schedule.year, month)
            );
        }

        Command::ExportCatalog { path } => {
            Storage::new(&path).save(calendar.catalog())?;
            println!("Catalog written to {}", path.display());
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    let _logger = logging::init_logging(&args.log_level).map_err(|e| anyhow!(e))?;
    run(args)
}
