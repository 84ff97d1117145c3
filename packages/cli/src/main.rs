#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line tool for querying the terrorism incident dataset.
//!
//! Loads the GTD CSV export, runs one filter, chart or option query
//! against it, and prints the result as pretty JSON on stdout.

mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use terror_insights_analytics::{FilterOutcome, chart};
use terror_insights_analytics_models::{ChartRequest, ChartScope, FilterCriteria};
use terror_insights_dataset::Dataset;
use terror_insights_incident_models::ChartDimension;

use crate::report::{FilterReport, OptionsReport};

#[derive(Parser)]
#[command(name = "terror_insights", about = "Terrorism incident dataset explorer")]
struct Cli {
    /// Path to the GTD CSV export (defaults to `DATASET_PATH`, then `global_terror.csv`)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print record count, year range and coverage
    Summary,
    /// List dropdown options, cascading from the given selections
    Options {
        /// Comma-separated regions to resolve countries for
        #[arg(long, value_delimiter = ',')]
        regions: Vec<String>,
        /// Comma-separated countries to resolve subregions for
        #[arg(long, value_delimiter = ',')]
        countries: Vec<String>,
        /// Comma-separated subregions to resolve localities for
        #[arg(long, value_delimiter = ',')]
        subregions: Vec<String>,
        /// Comma-separated month numbers to resolve days for
        #[arg(long, value_delimiter = ',')]
        months: Vec<u8>,
    },
    /// Print incidents matching the given filters
    Filter {
        #[command(flatten)]
        filters: FilterArgs,
        /// Print only the number of matching incidents
        #[arg(long)]
        count: bool,
    },
    /// Print per-year counts grouped by a dimension
    Chart {
        /// Grouping dimension (e.g. `organization`, `country`, `gname`)
        #[arg(long)]
        dimension: ChartDimension,
        /// Case-insensitive substring the dimension value must contain
        #[arg(long)]
        search: Option<String>,
        /// First year to include
        #[arg(long)]
        year_start: Option<i32>,
        /// Last year to include
        #[arg(long)]
        year_end: Option<i32>,
        /// Geographic preset (`world` or `india`)
        #[arg(long, default_value = "world")]
        scope: ChartScope,
    },
}

#[derive(clap::Args)]
struct FilterArgs {
    /// Comma-separated regions
    #[arg(long, value_delimiter = ',')]
    region: Vec<String>,
    /// Comma-separated countries
    #[arg(long, value_delimiter = ',')]
    country: Vec<String>,
    /// Comma-separated provinces/states
    #[arg(long, value_delimiter = ',')]
    subregion: Vec<String>,
    /// Comma-separated cities
    #[arg(long, value_delimiter = ',')]
    locality: Vec<String>,
    /// Comma-separated attack types
    #[arg(long, value_delimiter = ',')]
    attack_type: Vec<String>,
    /// First year to include
    #[arg(long)]
    year_start: Option<i32>,
    /// Last year to include
    #[arg(long)]
    year_end: Option<i32>,
    /// Comma-separated month numbers
    #[arg(long, value_delimiter = ',')]
    month: Vec<u8>,
    /// Comma-separated days of month
    #[arg(long, value_delimiter = ',')]
    day: Vec<u8>,
}

impl From<FilterArgs> for FilterCriteria {
    fn from(args: FilterArgs) -> Self {
        Self {
            region: args.region,
            country: args.country,
            subregion: args.subregion,
            locality: args.locality,
            attack_type: args.attack_type,
            year_start: args.year_start,
            year_end: args.year_end,
            month: args.month,
            day: args.day,
        }
    }
}

fn print_json(value: &impl Serialize) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let cli = Cli::parse();
    let path = cli
        .data
        .or_else(|| std::env::var_os("DATASET_PATH").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("global_terror.csv"));

    log::debug!("Using dataset {}", path.display());
    let dataset = Dataset::load(&path)?;

    match cli.command {
        Commands::Summary => print_json(&dataset.summary())?,
        Commands::Options {
            regions,
            countries,
            subregions,
            months,
        } => print_json(&OptionsReport::build(
            &dataset,
            &regions,
            &countries,
            &subregions,
            &months,
        ))?,
        Commands::Filter { filters, count } => {
            let criteria = FilterCriteria::from(filters);
            log::debug!("Filtering with {criteria:?}");
            let outcome = FilterOutcome::of(&dataset, &criteria);
            if outcome == FilterOutcome::NoData {
                eprintln!("No data available for the selected filters.");
            }
            print_json(&FilterReport::build(outcome, count))?;
        }
        Commands::Chart {
            dimension,
            search,
            year_start,
            year_end,
            scope,
        } => {
            let request = ChartRequest {
                dimension,
                search_text: search,
                year_start,
                year_end,
                scope,
            };
            log::debug!("Charting {request:?}");
            print_json(&chart(&dataset, &request))?;
        }
    }

    Ok(())
}
