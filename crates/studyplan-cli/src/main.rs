mod availability_cmds;
mod config;
mod course_cmds;
mod plan_cmds;
#[cfg(test)]
mod test_util;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use studyplan_core::{Clock, CourseId, DayOfWeek, FixedClock, SystemClock, WeekKey};

use config::StudyplanConfig;

#[derive(Parser)]
#[command(name = "studyplan", about = "Weekly study planner for exam preparation")]
struct Cli {
    /// Data directory (overrides STUDYPLAN_DATA_DIR env var)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a studyplan config file with the default policy
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Course management
    Course {
        #[command(subcommand)]
        command: CourseCommands,
    },
    /// Weekly availability management
    Availability {
        #[command(subcommand)]
        command: AvailabilityCommands,
    },
    /// Generate, show, and clear the weekly plan
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
}

#[derive(Subcommand)]
pub enum CourseCommands {
    /// Add a course
    Add {
        /// Course name
        #[arg(long)]
        name: String,
        /// Exam date (YYYY-MM-DD)
        #[arg(long)]
        exam_date: NaiveDate,
        /// Difficulty, 1 (easy) to 5 (hard)
        #[arg(long, default_value_t = 3)]
        difficulty: u8,
        /// Importance, 1 (low) to 5 (high)
        #[arg(long, default_value_t = 3)]
        weight: u8,
    },
    /// List courses ordered by exam date
    List,
    /// Remove a course by ID
    Remove {
        /// Course ID
        id: CourseId,
    },
    /// Remove every course
    Clear,
    /// Replace the course list with sample data
    Sample {
        /// Date to schedule sample exams from (defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

#[derive(Subcommand)]
pub enum AvailabilityCommands {
    /// Show hours per day for a week
    Show {
        /// Any date in the week (defaults to the current week)
        #[arg(long)]
        week: Option<NaiveDate>,
    },
    /// Set the hours for one day
    Set {
        /// Day of week (Mon..Sun)
        day: DayOfWeek,
        /// Hours available, clamped to 0-10
        hours: f64,
        /// Any date in the week (defaults to the current week)
        #[arg(long)]
        week: Option<NaiveDate>,
    },
    /// Store the default hours for a week
    Reset {
        /// Any date in the week (defaults to the current week)
        #[arg(long)]
        week: Option<NaiveDate>,
    },
    /// Copy hours from the latest earlier week
    CopyPrevious {
        /// Any date in the week (defaults to the current week)
        #[arg(long)]
        week: Option<NaiveDate>,
    },
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Generate the plan for a week, replacing any stored plan
    Generate {
        /// Any date in the week (defaults to the current week)
        #[arg(long)]
        week: Option<NaiveDate>,
        /// Date to score exams against (defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Show the stored plan
    Show {
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove the stored plan
    Clear,
    /// Explain how each course is prioritized
    Explain {
        /// Date to score exams against (defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

/// Clock for a command: a fixed date when one was given, the system date otherwise.
pub fn clock_for(today: Option<NaiveDate>) -> Box<dyn Clock> {
    match today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    }
}

/// The week containing `date`, or the week containing `clock`'s today.
pub fn week_for(date: Option<NaiveDate>, clock: &dyn Clock) -> WeekKey {
    WeekKey::containing(date.unwrap_or_else(|| clock.today()))
}

/// Execute the `studyplan init` command: write config file.
fn cmd_init(cli_data_dir: Option<&std::path::Path>, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        storage: config::StorageSection {
            data_dir: cli_data_dir.map(PathBuf::from),
        },
        policy: Default::default(),
    };
    config::save_config_to(&path, &cfg)?;
    tracing::info!(path = %path.display(), "wrote config file");

    println!("Config written to {}", path.display());
    if let Some(dir) = &cfg.storage.data_dir {
        println!("  storage.data_dir = {}", dir.display());
    }
    println!();
    println!("Next: add courses with `studyplan course add` and set hours with `studyplan availability set`.");

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => {
            cmd_init(cli.data_dir.as_deref(), force)?;
        }
        Commands::Course { command } => {
            let resolved = StudyplanConfig::resolve(cli.data_dir.as_deref())?;
            course_cmds::run_course_command(command, &resolved)?;
        }
        Commands::Availability { command } => {
            let resolved = StudyplanConfig::resolve(cli.data_dir.as_deref())?;
            availability_cmds::run_availability_command(command, &resolved)?;
        }
        Commands::Plan { command } => {
            let resolved = StudyplanConfig::resolve(cli.data_dir.as_deref())?;
            plan_cmds::run_plan_command(command, &resolved)?;
        }
    }

    Ok(())
}
