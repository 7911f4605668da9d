//! # vagtplan-core
//!
//! Core domain model and traits for the vagtplan roster calendar engine.
//!
//! This crate provides:
//! - Domain types: `Roster`, `RoleColumns`, `PeriodSpec`, `DayRecord`,
//!   `GridPosition`, `CalendarPlan`
//! - The `Renderer` trait implemented by rendering backends
//! - Error types shared across the workspace
//!
//! ## Example
//!
//! ```rust
//! use vagtplan_core::{PeriodSpec, Roster, RosterRow, RoleColumns};
//!
//! let mut roster = Roster::new(["Dato", "Lærer1", "Lærer2", "KODER"]);
//! roster.rows.push(
//!     RosterRow::on(chrono::NaiveDate::from_ymd_opt(2024, 4, 2).unwrap())
//!         .cell("Lærer1", "Ochr"),
//! );
//!
//! let roles = RoleColumns::discover(&roster, "Lærer", "KODER").unwrap();
//! assert_eq!(roles.len(), 2);
//!
//! let period = PeriodSpec::parse("14-15", 2024).unwrap();
//! assert_eq!(period.start_week, 14);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

// ============================================================================
// Type Aliases & Conventions
// ============================================================================

/// Set of dates on which a staff identifier appears in at least one role
/// column. Ordered and deduplicated; membership is the only operation the
/// classifier needs.
pub type WorkedSet = BTreeSet<NaiveDate>;

/// Reference year assumed when a query does not carry one (the source
/// workbook covers a single calendar year).
pub const DEFAULT_YEAR: i32 = 2024;

/// Substring that marks a roster column as a role column.
pub const DEFAULT_ROLE_MARKER: &str = "Lærer";

/// Column name that terminates role-column discovery; only columns to its
/// left qualify as roles.
pub const DEFAULT_BOUNDARY_COLUMN: &str = "KODER";

/// First full Gregorian year; chrono caps out at four-digit years.
pub const MIN_YEAR: i32 = 1583;
pub const MAX_YEAR: i32 = 9999;

/// ISO years have 52 or 53 weeks.
pub const MAX_WEEK: u32 = 53;

// ============================================================================
// Roster
// ============================================================================

/// A tabular duty roster: ordered named columns and one row per scheduled
/// date. Read-only for the lifetime of a session; the core never mutates
/// or caches it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Roster {
    /// Column names in sheet order. Order matters: role-column discovery
    /// compares positions against the boundary column.
    pub columns: Vec<String>,
    /// Rows in sheet order.
    pub rows: Vec<RosterRow>,
}

impl Roster {
    /// Create an empty roster with the given column names.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// A single roster row: the row's date plus its named cells. Cells without
/// a value are simply absent from the map.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RosterRow {
    /// Date of this row, if the date cell was present and parseable.
    /// Rows without a date are skipped by the scanner.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Cell values keyed by column name.
    #[serde(default)]
    pub cells: HashMap<String, String>,
}

impl RosterRow {
    /// Create a row for the given date.
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            cells: HashMap::new(),
        }
    }

    /// Create a row whose date cell is missing.
    pub fn undated() -> Self {
        Self::default()
    }

    /// Set a cell value (builder pattern).
    pub fn cell(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.cells.insert(column.into(), value.into());
        self
    }

    /// Get a cell value by column name.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }
}

// ============================================================================
// Role Columns
// ============================================================================

/// The validated column-role map: the subset of roster columns whose cells
/// hold staff identifiers. Built once per roster load and passed into the
/// scanner, so ambiguous sheets are rejected before any query runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleColumns {
    columns: Vec<String>,
}

impl RoleColumns {
    /// Discover role columns by naming convention: a column qualifies if
    /// its name contains `marker` and its position precedes the `boundary`
    /// column. Fails if the boundary column does not exist.
    pub fn discover(roster: &Roster, marker: &str, boundary: &str) -> Result<Self, PlanError> {
        let limit = roster
            .column_index(boundary)
            .ok_or_else(|| PlanError::BoundaryColumnMissing(boundary.to_string()))?;

        let columns = roster
            .columns
            .iter()
            .take(limit)
            .filter(|c| c.contains(marker))
            .cloned()
            .collect();

        Ok(Self { columns })
    }

    /// Build from an explicit column list, bypassing discovery.
    pub fn from_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// An empty role set is not an error: scanning yields an empty
    /// `WorkedSet` and every day classifies as free.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

// ============================================================================
// Period
// ============================================================================

/// A contiguous span of ISO weeks within a reference year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSpec {
    /// First ISO week of the span (1-based).
    pub start_week: u32,
    /// Last ISO week of the span, inclusive.
    pub end_week: u32,
    /// Reference year the week numbers belong to.
    pub year: i32,
}

impl PeriodSpec {
    /// Create a period spec, validating week order and year plausibility.
    pub fn new(start_week: u32, end_week: u32, year: i32) -> Result<Self, PlanError> {
        let spec = Self {
            start_week,
            end_week,
            year,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Parse a period identifier of the form `"14-15"` (also `"W14-W15"`,
    /// as sheet tabs are sometimes labeled) against a reference year.
    pub fn parse(id: &str, year: i32) -> Result<Self, PlanError> {
        let (start, end) = id
            .split_once('-')
            .ok_or_else(|| PlanError::malformed_period(id))?;

        let parse_week = |s: &str| {
            s.trim()
                .trim_start_matches(['W', 'w'])
                .parse::<u32>()
                .map_err(|_| PlanError::malformed_period(id))
        };

        Self::new(parse_week(start)?, parse_week(end)?, year)
    }

    /// Check the period invariants: positive weeks, no inverted range,
    /// week numbers within the ISO maximum, plausible year.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.start_week == 0
            || self.end_week == 0
            || self.start_week > self.end_week
            || self.end_week > MAX_WEEK
        {
            return Err(PlanError::InvalidPeriod {
                start_week: self.start_week,
                end_week: self.end_week,
            });
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(PlanError::InvalidYear(self.year));
        }
        Ok(())
    }
}

impl std::fmt::Display for PeriodSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} ({})", self.start_week, self.end_week, self.year)
    }
}

// ============================================================================
// Classification & Layout (Results)
// ============================================================================

/// One classified calendar day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// The calendar date.
    pub date: NaiveDate,
    /// ISO 8601 week number (week 1 contains the year's first Thursday).
    pub week: u32,
    /// Weekday index, 0 = Monday .. 6 = Sunday.
    pub weekday: u32,
    /// Whether the target identifier worked this date.
    pub worked: bool,
}

/// Grid coordinate for one day: week row and 1-based column. Columns are
/// the rank of the day among its week's days, so short boundary weeks
/// produce short contiguous runs rather than gaps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition {
    /// ISO week number (row key).
    pub week: u32,
    /// 1-based column within the week row.
    pub column: u32,
}

/// A classified day together with its grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionedDay {
    pub day: DayRecord,
    pub position: GridPosition,
}

/// The full result of one calendar query, ready for a rendering backend.
/// Carries the raw date sequence and worked set alongside the positioned
/// days so simple displays (a plain list of dates) need no re-aggregation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CalendarPlan {
    /// Every date of the period, ordered, deduplicated.
    pub dates: Vec<NaiveDate>,
    /// Dates the identifier worked.
    pub worked: WorkedSet,
    /// One positioned record per date, in date order.
    pub days: Vec<PositionedDay>,
}

impl CalendarPlan {
    /// Week numbers present in the plan, in row order.
    pub fn weeks(&self) -> Vec<u32> {
        let mut weeks: Vec<u32> = Vec::new();
        for day in &self.days {
            if weeks.last() != Some(&day.day.week) {
                weeks.push(day.day.week);
            }
        }
        weeks
    }

    /// Widest week row in the plan (0 for an empty plan).
    pub fn max_columns(&self) -> u32 {
        self.days
            .iter()
            .map(|d| d.position.column)
            .max()
            .unwrap_or(0)
    }
}

// ============================================================================
// Traits
// ============================================================================

/// Output rendering. Backends turn a `CalendarPlan` into pixels, markup,
/// or text; the core never draws anything itself.
pub trait Renderer {
    type Output;

    /// Render a calendar plan to the output format.
    fn render(&self, plan: &CalendarPlan) -> Result<Self::Output, RenderError>;
}

// ============================================================================
// Errors
// ============================================================================

/// Unrecoverable query errors. Each one fails the query as a whole; no
/// partial calendar is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("invalid period: weeks {start_week}-{end_week} (weeks must be 1-{MAX_WEEK}, start <= end)")]
    InvalidPeriod { start_week: u32, end_week: u32 },

    #[error("invalid year: {0} (expected {MIN_YEAR}-{MAX_YEAR})")]
    InvalidYear(i32),

    #[error("boundary column '{0}' not found; role-column discovery cannot proceed")]
    BoundaryColumnMissing(String),
}

impl PlanError {
    /// A period id that did not even parse into two week numbers is
    /// reported as an inverted empty range.
    fn malformed_period(_id: &str) -> Self {
        Self::InvalidPeriod {
            start_week: 0,
            end_week: 0,
        }
    }
}

/// Rendering error.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

// ============================================================================
// Tests
// ============================================================================
