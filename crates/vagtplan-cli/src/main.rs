//! vagtplan CLI - Roster Calendar Engine
//!
//! Command-line interface for loading a roster, resolving a week period
//! and showing which days a staff member worked.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vagtplan_core::{
    CalendarPlan, PeriodSpec, Renderer, RoleColumns, Roster, DEFAULT_BOUNDARY_COLUMN,
    DEFAULT_ROLE_MARKER, DEFAULT_YEAR,
};
use vagtplan_engine::plan_calendar;
use vagtplan_render::{DateListRenderer, SvgGridRenderer, TextGridRenderer};

#[derive(Parser)]
#[command(name = "vagtplan")]
#[command(author, version, about = "Roster calendar engine", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Query {
    /// Roster file path (JSON)
    #[arg(value_name = "ROSTER")]
    file: PathBuf,

    /// Staff identifier (initials) to look up
    #[arg(short, long)]
    teacher: String,

    /// Week period, e.g. 14-15
    #[arg(short, long)]
    period: String,

    /// Reference year for the week numbers
    #[arg(short, long, default_value_t = DEFAULT_YEAR)]
    year: i32,

    /// Substring marking role columns
    #[arg(long, default_value = DEFAULT_ROLE_MARKER)]
    role_marker: String,

    /// Column that terminates role-column discovery
    #[arg(long, default_value = DEFAULT_BOUNDARY_COLUMN)]
    boundary_column: String,

    /// Include Saturdays and Sundays
    #[arg(long)]
    all_days: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the dates a staff member worked in a period
    Dates {
        #[command(flatten)]
        query: Query,
    },

    /// Render the period as a worked/free calendar grid
    Grid {
        #[command(flatten)]
        query: Query,

        /// Output format (text, svg)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Dates { query } => {
            let plan = run_query(&query)?;
            print!("{}", DateListRenderer::new().render(&plan)?);
        }
        Commands::Grid {
            query,
            format,
            output,
        } => {
            let plan = run_query(&query)?;
            let rendered = match format.as_str() {
                "text" => TextGridRenderer::new().render(&plan)?,
                "svg" => SvgGridRenderer::new()
                    .title(query.teacher.clone())
                    .render(&plan)?,
                other => anyhow::bail!("unknown format: {other} (expected text or svg)"),
            };
            match output {
                Some(path) => std::fs::write(&path, rendered)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => print!("{rendered}"),
            }
        }
    }

    Ok(())
}

/// Load the roster, discover role columns and run the pipeline.
fn run_query(query: &Query) -> Result<CalendarPlan> {
    let roster = load_roster(&query.file)?;

    let roles = RoleColumns::discover(&roster, &query.role_marker, &query.boundary_column)?;
    if roles.is_empty() {
        tracing::warn!("no role columns found; every day will show as free");
    }

    let period = PeriodSpec::parse(&query.period, query.year)?;

    let plan = plan_calendar(
        &roster,
        &query.teacher,
        &period,
        &roles,
        !query.all_days,
    )?;
    Ok(plan)
}

fn load_roster(path: &PathBuf) -> Result<Roster> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open roster {}", path.display()))?;
    let roster: Roster = serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("failed to parse roster {}", path.display()))?;

    tracing::debug!(
        columns = roster.columns.len(),
        rows = roster.rows.len(),
        "loaded roster"
    );
    Ok(roster)
}
