//! RepChart - Exercise Progress Charting
//!
//! Command-line front end over the charting library.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use repchart::goals::{GoalForm, GoalGauges, GoalStore};
use repchart::progress::{TimePeriod, TimeSeriesReducer};
use repchart::storage::{config, FileStore};
use repchart::{ExerciseRef, SetRecord};

#[derive(Parser)]
#[command(
    name = "repchart",
    version,
    about = "Exercise progress charts and goal gauges"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print weight, reps and duration charts for an exercise
    Chart {
        /// JSON array of set records
        records: PathBuf,
        /// Exercise identifier
        exercise_id: String,
        /// Time period (day, week, month, sixMonths, year); defaults to the configured one
        period: Option<TimePeriod>,
    },

    /// Print goal gauges for an exercise
    Gauges {
        /// JSON array of set records
        records: PathBuf,
        /// Exercise identifier
        exercise_id: String,
    },

    /// Save goals for an exercise
    SetGoal {
        /// Exercise display name
        name: String,
        /// Weight goal
        weight: String,
        /// Reps goal
        reps: String,
        /// Duration goal in minutes
        duration: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Starting RepChart v{}", env!("CARGO_PKG_VERSION"));

    let config = config::load_config().context("loading config")?;
    let mut goals = GoalStore::with_key(
        FileStore::new(config.store_dir()),
        config.goals.storage_key.clone(),
    );

    match cli.command {
        Command::Chart {
            records,
            exercise_id,
            period,
        } => {
            let period = period.unwrap_or(config.charts.default_period);
            let records = read_records(&records)?;
            let exercise = find_exercise(&records, &exercise_id);

            let charts = TimeSeriesReducer::new(&goals)
                .with_units(config.units)
                .charts(&records, &exercise, period, &chrono::Local::now());
            println!("{}", serde_json::to_string_pretty(&charts)?);
        }
        Command::Gauges {
            records,
            exercise_id,
        } => {
            let records = read_records(&records)?;
            let exercise = find_exercise(&records, &exercise_id);

            let gauges = GoalGauges::compute(&records, &exercise, &goals);
            println!("{}", serde_json::to_string_pretty(&gauges)?);
        }
        Command::SetGoal {
            name,
            weight,
            reps,
            duration,
        } => {
            let mut form = GoalForm::load(Some(name.as_str()), &goals);
            form.weight = weight;
            form.reps = reps;
            form.duration = duration;

            let saved = form.save(&mut goals)?;
            println!("{}", serde_json::to_string_pretty(&saved)?);
        }
    }

    Ok(())
}

/// Read a JSON array of set records.
fn read_records(path: &Path) -> Result<Vec<SetRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let records: Vec<SetRecord> = serde_json::from_str(&content)
        .with_context(|| format!("parsing {}", path.display()))?;

    tracing::info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Resolve an exercise id to the identity carried by its records.
fn find_exercise(records: &[SetRecord], exercise_id: &str) -> ExerciseRef {
    records
        .iter()
        .filter_map(SetRecord::exercise)
        .find(|exercise| exercise.id == exercise_id)
        .cloned()
        .unwrap_or_else(|| {
            tracing::warn!("No records reference exercise '{}'", exercise_id);
            ExerciseRef {
                id: exercise_id.to_string(),
                name: None,
            }
        })
}
