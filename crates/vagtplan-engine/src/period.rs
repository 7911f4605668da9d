//! Period Resolution
//!
//! Turns a week-range specification into the concrete sequence of calendar
//! dates it covers, optionally filtered to business days.
//!
//! Week semantics are ISO 8601 throughout: week 1 is the week containing
//! the year's first Thursday, and weeks run Monday through Sunday. The
//! anchor for all offsets is the Monday of ISO week 1 of the reference
//! year, so week numbers line up exactly with what the classifier reports
//! via `iso_week()`.

use chrono::{Datelike, Duration, NaiveDate};
use vagtplan_core::{PeriodSpec, PlanError};

/// Resolve a period into its ordered, duplicate-free date sequence.
///
/// The span runs from the Monday of `start_week` through the Sunday of
/// `end_week`, inclusive. With `business_days_only`, Saturdays and Sundays
/// are dropped while order is preserved.
///
/// Pure function of its inputs; same spec, same sequence.
pub fn resolve_period(
    spec: &PeriodSpec,
    business_days_only: bool,
) -> Result<Vec<NaiveDate>, PlanError> {
    spec.validate()?;

    let anchor = iso_week_one_monday(spec.year)?;

    let first = anchor
        .checked_add_signed(Duration::days(7 * (i64::from(spec.start_week) - 1)))
        .ok_or(PlanError::InvalidYear(spec.year))?;
    let last = anchor
        .checked_add_signed(Duration::days(7 * i64::from(spec.end_week) - 1))
        .ok_or(PlanError::InvalidYear(spec.year))?;

    let dates: Vec<NaiveDate> = first
        .iter_days()
        .take_while(|d| *d <= last)
        .filter(|d| !business_days_only || is_business_day(*d))
        .collect();

    tracing::trace!(
        period = %spec,
        business_days_only,
        count = dates.len(),
        "resolved period"
    );

    Ok(dates)
}

/// Monday of ISO week 1 of the given year. January 4 always falls in
/// ISO week 1, so week 1's Monday is that week's Monday.
fn iso_week_one_monday(year: i32) -> Result<NaiveDate, PlanError> {
    let jan4 = NaiveDate::from_ymd_opt(year, 1, 4).ok_or(PlanError::InvalidYear(year))?;
    Ok(jan4 - Duration::days(i64::from(jan4.weekday().num_days_from_monday())))
}

/// Monday through Friday.
pub fn is_business_day(date: NaiveDate) -> bool {
    date.weekday().num_days_from_monday() < 5
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use pretty_assertions::assert_eq;
    use vagtplan_core::PeriodSpec;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weeks_14_to_15_of_2024_business_days() {
        let spec = PeriodSpec::new(14, 15, 2024).unwrap();
        let dates = resolve_period(&spec, true).unwrap();

        // Mon 2024-04-01 .. Fri 2024-04-05 and Mon 2024-04-08 .. Fri 2024-04-12
        assert_eq!(dates.len(), 10);
        assert_eq!(dates.first(), Some(&ymd(2024, 4, 1)));
        assert_eq!(dates.last(), Some(&ymd(2024, 4, 12)));
        assert!(dates.iter().all(|d| d.weekday() != Weekday::Sat));
        assert!(dates.iter().all(|d| d.weekday() != Weekday::Sun));
    }

    #[test]
    fn full_week_includes_weekend() {
        let spec = PeriodSpec::new(14, 14, 2024).unwrap();
        let dates = resolve_period(&spec, false).unwrap();

        assert_eq!(dates.len(), 7);
        assert_eq!(dates.first(), Some(&ymd(2024, 4, 1)));
        assert_eq!(dates.last(), Some(&ymd(2024, 4, 7)));
    }

    #[test]
    fn sequence_is_strictly_increasing_and_in_bounds() {
        let spec = PeriodSpec::new(3, 9, 2023).unwrap();
        let dates = resolve_period(&spec, true).unwrap();

        assert!(dates.windows(2).all(|w| w[0] < w[1]));
        // ISO week 3 of 2023 starts Mon 2023-01-16; week 9 ends Sun 2023-03-05.
        assert!(dates.iter().all(|d| *d >= ymd(2023, 1, 16)));
        assert!(dates.iter().all(|d| *d <= ymd(2023, 3, 5)));
    }

    #[test]
    fn filter_removes_exactly_the_weekend() {
        let spec = PeriodSpec::new(20, 21, 2024).unwrap();
        let all = resolve_period(&spec, false).unwrap();
        let business = resolve_period(&spec, true).unwrap();

        let weekdays: Vec<NaiveDate> = all
            .iter()
            .copied()
            .filter(|d| is_business_day(*d))
            .collect();
        assert_eq!(business, weekdays);
        assert_eq!(all.len() - business.len(), 4);
    }

    #[test]
    fn week_one_anchor_when_january_first_is_midweek() {
        // 2026-01-01 is a Thursday, so ISO week 1 starts Mon 2025-12-29.
        let spec = PeriodSpec::new(1, 1, 2026).unwrap();
        let dates = resolve_period(&spec, false).unwrap();

        assert_eq!(dates.first(), Some(&ymd(2025, 12, 29)));
        assert_eq!(dates.last(), Some(&ymd(2026, 1, 4)));
    }

    #[test]
    fn week_one_anchor_when_january_first_is_late_week() {
        // 2021-01-01 is a Friday, so it belongs to ISO week 53 of 2020 and
        // week 1 of 2021 starts Mon 2021-01-04.
        let spec = PeriodSpec::new(1, 1, 2021).unwrap();
        let dates = resolve_period(&spec, false).unwrap();

        assert_eq!(dates.first(), Some(&ymd(2021, 1, 4)));
    }

    #[test]
    fn iso_week_numbers_match_chrono() {
        let spec = PeriodSpec::new(14, 15, 2024).unwrap();
        let dates = resolve_period(&spec, true).unwrap();

        assert!(dates[..5].iter().all(|d| d.iso_week().week() == 14));
        assert!(dates[5..].iter().all(|d| d.iso_week().week() == 15));
    }

    #[test]
    fn invalid_specs_are_rejected() {
        let inverted = PeriodSpec {
            start_week: 15,
            end_week: 14,
            year: 2024,
        };
        assert!(matches!(
            resolve_period(&inverted, true),
            Err(PlanError::InvalidPeriod { .. })
        ));

        let bad_year = PeriodSpec {
            start_week: 1,
            end_week: 2,
            year: 0,
        };
        assert!(matches!(
            resolve_period(&bad_year, true),
            Err(PlanError::InvalidYear(0))
        ));
    }

    #[test]
    fn resolution_is_idempotent() {
        let spec = PeriodSpec::new(14, 15, 2024).unwrap();
        assert_eq!(
            resolve_period(&spec, true).unwrap(),
            resolve_period(&spec, true).unwrap()
        );
    }
}
