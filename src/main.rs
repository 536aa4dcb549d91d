//! FormCoach - exercise technique analysis
//!
//! Command-line entry point.

use anyhow::{bail, Context, Result};
use formcoach::exercises::{catalog, Exercise};
use formcoach::storage::config::{self, AppConfig};
use formcoach::storage::{Database, SetEntry};
use formcoach::technique::{classify, SampleLibrary};
use formcoach::TechniqueCoach;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const USAGE: &str = "Usage:
  formcoach exercises
  formcoach analyze <exercise-id>
  formcoach log <exercise-id> <reps>x<weight>... [--notes <text>]
  formcoach history [limit]";

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting FormCoach v{}", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        println!("{}", USAGE);
        return Ok(());
    };

    match command.as_str() {
        "exercises" => list_exercises(),
        "analyze" => {
            let exercise = exercise_arg(&args)?;
            let coach = open_coach()?;
            let review = coach.review(&exercise)?;
            println!("{}", serde_json::to_string_pretty(&review.report)?);
            Ok(())
        }
        "log" => {
            let exercise = exercise_arg(&args)?;
            let (sets, notes) = parse_log_args(&args[2..])?;
            let coach = open_coach()?;
            let log = coach.log_workout(&exercise, sets, notes)?;
            println!("{}", serde_json::to_string_pretty(&log)?);
            Ok(())
        }
        "history" => {
            let limit = match args.get(1) {
                Some(raw) => raw
                    .parse()
                    .with_context(|| format!("Invalid limit: {}", raw))?,
                None => config::DEFAULT_MAX_REPORTS,
            };
            let coach = open_coach()?;
            for report in coach.history(limit)? {
                println!(
                    "{}  {:<28} {:>3}  {}",
                    report.created_at.format("%Y-%m-%d %H:%M"),
                    report.exercise_name,
                    report.score,
                    report.verdict
                );
                for focus in &report.focus_areas {
                    println!("    - {}", focus);
                }
            }
            Ok(())
        }
        "help" | "--help" | "-h" => {
            println!("{}", USAGE);
            Ok(())
        }
        other => bail!("Unknown command '{}'\n{}", other, USAGE),
    }
}

fn list_exercises() -> Result<()> {
    for exercise in catalog::all() {
        println!(
            "{:<16} {:<30} {:<10} {:<12} {}",
            exercise.id,
            exercise.display_name(),
            exercise.muscle_group.name_ru(),
            exercise.difficulty.name_ru(),
            classify(&exercise)
        );
    }
    Ok(())
}

fn exercise_arg(args: &[String]) -> Result<Exercise> {
    let id = args.get(1).context("Missing exercise id")?;
    catalog::find(id).with_context(|| format!("Unknown exercise '{}'", id))
}

fn parse_log_args(args: &[String]) -> Result<(Vec<SetEntry>, Option<String>)> {
    let mut sets = Vec::new();
    let mut notes = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "--notes" {
            notes = Some(iter.next().context("--notes needs a value")?.clone());
            continue;
        }
        let set = SetEntry::parse(arg)
            .with_context(|| format!("Invalid set '{}', expected <reps>x<weight>", arg))?;
        sets.push(set);
    }

    if sets.is_empty() {
        bail!("At least one set is required");
    }
    Ok((sets, notes))
}

fn open_coach() -> Result<TechniqueCoach> {
    let config = config::load_config().context("Failed to load configuration")?;
    if !config::get_config_path().exists() {
        // Leave an editable file with the defaults behind
        if let Err(e) = config::save_config(&config) {
            tracing::warn!("Failed to write default configuration: {}", e);
        }
    }
    let db = Database::open(&config.database_path()).context("Failed to open database")?;
    let samples = load_samples(&config);
    Ok(TechniqueCoach::new(db, samples, config.history.max_reports))
}

fn load_samples(config: &AppConfig) -> SampleLibrary {
    let mut samples = SampleLibrary::builtin();

    if let Some(path) = &config.analysis.samples_path {
        match SampleLibrary::load(path) {
            Ok(extra) => samples.merge(extra),
            Err(e) => {
                tracing::warn!("Failed to load samples from {}: {}", path.display(), e);
            }
        }
    }

    samples
}
