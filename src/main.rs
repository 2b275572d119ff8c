use chrono::Utc;
use clap::Parser;
use growops::cli::{Cli, Commands};
use growops::config::Config;
use growops::datasources;
use growops::error::{GrowOpsError, Result};
use growops::logic::{degree_days, streak, trend, vpd};
use growops::models::{CropProfile, GrowthPhase, SystemType};
use growops::service::FarmIntelligenceService;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging; -v flags outrank the environment default
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Interactive setup runs before any config load can fail
    if matches!(cli.command, Commands::Init) {
        let (_, path) = Config::setup_interactive()?;
        println!("Run `growops check` to validate {}", path.display());
        return Ok(());
    }

    let config = Config::load(cli.config.clone())?;
    let now = Utc::now();
    let today = now.date_naive();

    match cli.command {
        Commands::Init => {}
        Commands::Check => {
            config.validate()?;
            let system = config.system_type()?;
            let profile = CropProfile::lookup_or_default(&config.farm.crop);
            println!("Config OK");
            println!("  Farm:    {}", config.farm.name);
            println!("  Crop:    {} (profile: {})", config.farm.crop, profile.name);
            println!("  System:  {}", system);
            match &config.data.logs_path {
                Some(p) if p.exists() => println!("  Logs:    {}", p.display()),
                Some(p) => println!("  Logs:    {} (missing)", p.display()),
                None => println!("  Logs:    not configured"),
            }
        }
        Commands::Score {
            file,
            crop,
            system,
            age,
        } => {
            let readings = datasources::load_readings(&logs_path(&config, file)?)?;
            let Some(latest) = readings.last() else {
                return Err(GrowOpsError::InvalidData("log file has no readings".into()));
            };

            let crop = crop.unwrap_or_else(|| config.farm.crop.clone());
            let system = match system {
                Some(s) => SystemType::from_str(&s)
                    .ok_or_else(|| GrowOpsError::Config(format!("Unknown system type '{s}'")))?,
                None => config.system_type()?,
            };
            let age = age
                .or_else(|| config.farm.sow_date.map(|d| (today - d).num_days()))
                .unwrap_or(0)
                .max(0);

            let mut service = FarmIntelligenceService::with_ttl_minutes(config.cache.ttl_minutes);
            let assessment = service.assess(latest, &crop, system, age, now);

            if assessment.error {
                println!("Score: 0 (assessment failed)");
                if let Some(msg) = &assessment.error_message {
                    println!("  {}", msg);
                }
                return Ok(());
            }

            let r = &assessment.result;
            println!("Farm health: {:.0}/100", r.score);
            println!("  Air:      {}", r.air);
            println!("  Nutrient: {}", r.nutrient);
            println!("  Light:    {}", r.light);
            if r.reasons.is_empty() {
                println!("  All factors in range.");
            } else {
                for reason in &r.reasons {
                    println!("  - {}", reason);
                }
            }
        }
        Commands::Vpd { temp, humidity } => {
            let value = vpd::calculate_vpd(Some(temp), Some(humidity));
            let band = vpd::vpd_status(value);
            match value {
                Some(v) => println!("VPD: {:.2} kPa ({})", v, band.label()),
                None => println!("VPD: unavailable ({})", band.label()),
            }
            println!("  {}", band.recommendation());
        }
        Commands::Trend {
            file,
            field,
            min,
            max,
        } => {
            let readings = datasources::load_readings(&logs_path(&config, file)?)?;
            let values = datasources::series(&readings, &field)?;

            let profile = CropProfile::lookup_or_default(&config.farm.crop);
            let range = match field.as_str() {
                "temp" | "temperature" => Some(profile.temp_c),
                "humidity" => Some(profile.humidity_pct),
                "ph" => Some(profile.ph),
                "ec" => Some(profile.ec_ms_cm),
                _ => None,
            };
            let target_min = min.or(range.map(|r| r.min)).unwrap_or(f64::MIN);
            let target_max = max.or(range.map(|r| r.max)).unwrap_or(f64::MAX);

            let result = trend::analyze_trend(&values, target_min, target_max);
            if !result.is_measured() {
                println!("Trend for '{}': {}", field, result.trend);
                println!("  Need at least 3 logged values.");
                return Ok(());
            }
            println!("Trend for '{}': {}", field, result.trend);
            println!("  Stability:  {:.0}/100", result.stability);
            println!("  In range:   {:.0}%", result.percent_in_range);
            println!("  Variance:   {:.2}", result.variance);
        }
        Commands::Streak { file } => {
            let readings = datasources::load_readings(&logs_path(&config, file)?)?;
            let timestamps: Vec<_> = readings.iter().map(|r| r.timestamp).collect();
            let count = streak::calculate_streak(&timestamps, today);
            let badge = streak::streak_badge(count);
            println!("{} {} - {} day streak", badge.emoji, badge.label, count);
            println!("  {}", badge.message);
        }
        Commands::Harvest { file, sown, crop } => {
            let sown = sown.or(config.farm.sow_date).ok_or_else(|| {
                GrowOpsError::Config("no sow date: pass --sown or set farm.sow_date".into())
            })?;
            let readings = datasources::load_readings(&logs_path(&config, file)?)?;
            let crop = crop.unwrap_or_else(|| config.farm.crop.clone());
            let profile = CropProfile::lookup_or_default(&crop);

            match degree_days::predict_harvest(&readings, profile, sown, today) {
                growops::models::HarvestForecast::Predicted {
                    predicted_date,
                    days_remaining,
                    percent_complete,
                } => {
                    println!("Predicted harvest: {}", predicted_date);
                    println!("  Days remaining: {}", days_remaining);
                    println!("  Progress:       {:.0}%", percent_complete);
                }
                growops::models::HarvestForecast::Unavailable { reason } => {
                    println!("Harvest forecast unavailable: {}", reason);
                }
            }
        }
        Commands::Blackout { sown, covered } => {
            let sown = sown.or(config.farm.sow_date).ok_or_else(|| {
                GrowOpsError::Config("no sow date: pass --sown or set farm.sow_date".into())
            })?;
            let status = streak::blackout_status(sown, covered, today);
            println!("Phase: {} (day {})", status.phase, status.age_days);
            if status.phase == GrowthPhase::Blackout {
                println!("  Days of blackout remaining: {}", status.days_remaining);
            }
            if status.urgency.is_some() {
                println!("  Uncover today: the blackout window just ended.");
            }
            if let Some(warning) = &status.warning {
                println!("  {}: {}", warning.severity, warning.message);
            }
        }
    }

    Ok(())
}

fn logs_path(config: &Config, file: Option<PathBuf>) -> Result<PathBuf> {
    file.or_else(|| config.data.logs_path.clone()).ok_or_else(|| {
        GrowOpsError::Config("no log file: pass --file or set data.logs_path".into())
    })
}
