//! Compute precipitable water and zenith delays for every sounding of a station.
//!
//! Run with `RUST_LOG=debug` to see every level that gets dropped.

use clap::Parser;
use log::{error, info};
use sounding_tropo::{
    config::{DEFAULT_HOURS, DEFAULT_STATION, DEFAULT_TABLE_NAME},
    run_batch, DirectorySink, DirectoryStore, RunConfig, StationCsv,
};
use std::{path::PathBuf, process};

/// Precipitable water vapor and zenith tropospheric delays from radiosonde soundings.
#[derive(Debug, Clone, Parser)]
#[command(name = "sounding-tropo", version)]
struct Args {
    /// Station identifier
    #[arg(short, long, default_value = DEFAULT_STATION)]
    station: String,

    /// First year to process
    #[arg(long, value_name = "YEAR")]
    start_year: i32,

    /// Last year to process, defaults to the first year
    #[arg(long, value_name = "YEAR")]
    end_year: Option<i32>,

    /// First month to process in each year
    #[arg(long, value_name = "MONTH", default_value_t = 1)]
    start_month: u32,

    /// Last month to process in each year
    #[arg(long, value_name = "MONTH", default_value_t = 12)]
    end_month: u32,

    /// Launch hours, UTC
    #[arg(long, value_delimiter = ',', value_name = "HOURS")]
    hours: Vec<u32>,

    /// Directory with the station files and the sounding tree
    #[arg(short, long, value_name = "PATH", default_value = ".")]
    data_dir: PathBuf,

    /// Directory for the result table and the wet refractivity files
    #[arg(short, long, value_name = "PATH", default_value = ".")]
    output_dir: PathBuf,

    /// File name of the result table inside the output directory
    #[arg(short, long, default_value = DEFAULT_TABLE_NAME)]
    table: String,
}

impl Args {
    fn run_config(&self) -> RunConfig {
        let hours = if self.hours.is_empty() {
            DEFAULT_HOURS.to_vec()
        } else {
            self.hours.clone()
        };

        RunConfig::new(
            self.station.clone(),
            self.start_year..=self.end_year.unwrap_or(self.start_year),
            self.start_month..=self.end_month,
            hours,
        )
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let cfg = args.run_config();

    let stations = StationCsv::new(&args.data_dir);
    let store = DirectoryStore::new(&args.data_dir);
    let mut sink = DirectorySink::new(&args.output_dir, args.output_dir.join(&args.table));

    match run_batch(&cfg, &stations, &store, &mut sink) {
        Ok(report) if report.processed() > 0 => {
            info!("Table written to {}", sink.table_path().display());
        }
        Ok(_) => {}
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}
