//! # vagtplan-engine
//!
//! Calendar resolution, roster scanning, day classification and grid
//! layout for the vagtplan roster calendar engine.
//!
//! This crate provides:
//! - Period resolution (week range -> date sequence, ISO 8601 semantics)
//! - Roster scanning (staff identifier -> worked-date set)
//! - Day classification (date sequence + worked set -> day records)
//! - Grid layout (day records -> week-by-column positions)
//!
//! Every function is pure over immutable inputs. Queries are independent
//! and may run concurrently without coordination; nothing is cached.
//!
//! ## Example
//!
//! ```rust
//! use vagtplan_core::{PeriodSpec, RoleColumns, Roster, RosterRow};
//! use vagtplan_engine::plan_calendar;
//!
//! let mut roster = Roster::new(["Dato", "Lærer1", "KODER"]);
//! roster.rows.push(
//!     RosterRow::on(chrono::NaiveDate::from_ymd_opt(2024, 4, 2).unwrap())
//!         .cell("Lærer1", "Ochr"),
//! );
//! let roles = RoleColumns::discover(&roster, "Lærer", "KODER").unwrap();
//! let period = PeriodSpec::parse("14-15", 2024).unwrap();
//!
//! let plan = plan_calendar(&roster, "Ochr", &period, &roles, true).unwrap();
//! assert_eq!(plan.dates.len(), 10);
//! assert_eq!(plan.worked.len(), 1);
//! ```

pub mod classify;
pub mod layout;
pub mod period;
pub mod scan;

pub use classify::classify_days;
pub use layout::layout_grid;
pub use period::{is_business_day, resolve_period};
pub use scan::scan_roster;

use vagtplan_core::{CalendarPlan, PeriodSpec, PlanError, RoleColumns, Roster};

/// Run the full pipeline for one query: resolve the period, scan the
/// roster for the identifier, classify every date and lay the result out
/// on the grid.
///
/// Fails as a whole on `InvalidPeriod` or `InvalidYear`; an empty role
/// set is not an error and produces an all-free calendar.
pub fn plan_calendar(
    roster: &Roster,
    identifier: &str,
    period: &PeriodSpec,
    roles: &RoleColumns,
    business_days_only: bool,
) -> Result<CalendarPlan, PlanError> {
    let dates = resolve_period(period, business_days_only)?;
    let worked = scan_roster(roster, identifier, roles);
    let days = layout_grid(classify_days(&dates, &worked));

    tracing::debug!(
        identifier,
        period = %period,
        days = days.len(),
        worked = worked.len(),
        "planned calendar"
    );

    Ok(CalendarPlan {
        dates,
        worked,
        days,
    })
}
