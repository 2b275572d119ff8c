use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "growops", version, about = "Hydroponics and microgreens farm intelligence")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Re-run interactive setup
    Init,
    /// Validate config and resolve the crop profile
    Check,
    /// Score the latest reading in a log file
    Score {
        /// JSON log file (defaults to data.logs_path from config)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Crop name (defaults to farm.crop from config)
        #[arg(long)]
        crop: Option<String>,
        /// System type (defaults to farm.system_type from config)
        #[arg(long)]
        system: Option<String>,
        /// Batch age in days (defaults to days since farm.sow_date)
        #[arg(long)]
        age: Option<i64>,
    },
    /// Compute VPD for a temperature/humidity pair
    Vpd {
        /// Air temperature in Celsius
        #[arg(short, long)]
        temp: f64,
        /// Relative humidity in percent
        #[arg(long)]
        humidity: f64,
    },
    /// Stability and direction of a logged field over time
    Trend {
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Field to analyze (temp, humidity, ph, ec, water_temp, ...)
        #[arg(long)]
        field: String,
        /// Target range lower bound (defaults to the crop profile's range)
        #[arg(long)]
        min: Option<f64>,
        /// Target range upper bound (defaults to the crop profile's range)
        #[arg(long)]
        max: Option<f64>,
    },
    /// Consecutive-day logging streak
    Streak {
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Degree-day harvest forecast
    Harvest {
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Sowing date (YYYY-MM-DD, defaults to farm.sow_date from config)
        #[arg(long)]
        sown: Option<NaiveDate>,
        #[arg(long)]
        crop: Option<String>,
    },
    /// Microgreens blackout phase for a sow date
    Blackout {
        /// Sowing date (YYYY-MM-DD, defaults to farm.sow_date from config)
        #[arg(long)]
        sown: Option<NaiveDate>,
        /// The tray is still covered
        #[arg(long)]
        covered: bool,
    },
}
