//! Calendar Classification
//!
//! Joins a resolved date sequence with a worked-date set, producing one
//! record per date with its ISO week number and weekday index.

use chrono::Datelike;
use chrono::NaiveDate;
use vagtplan_core::{DayRecord, WorkedSet};

/// Classify every date of a sequence against the worked set.
///
/// Total function: one output record per input date, same order. Week
/// numbers follow ISO 8601 (week 1 contains the year's first Thursday),
/// matching the resolver's anchor so grid row labels stay consistent.
/// Weekday index is 0 for Monday through 6 for Sunday.
pub fn classify_days(dates: &[NaiveDate], worked: &WorkedSet) -> Vec<DayRecord> {
    dates
        .iter()
        .map(|&date| DayRecord {
            date,
            week: date.iso_week().week(),
            weekday: date.weekday().num_days_from_monday(),
            worked: worked.contains(&date),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn length_and_order_preserved() {
        let dates = vec![ymd(2024, 4, 1), ymd(2024, 4, 2), ymd(2024, 4, 3)];
        let records = classify_days(&dates, &WorkedSet::new());

        assert_eq!(records.len(), dates.len());
        let output_dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
        assert_eq!(output_dates, dates);
    }

    #[test]
    fn worked_flag_follows_set_membership() {
        let dates = vec![ymd(2024, 4, 1), ymd(2024, 4, 2), ymd(2024, 4, 3)];
        let worked: WorkedSet = [ymd(2024, 4, 2)].into_iter().collect();
        let records = classify_days(&dates, &worked);

        assert!(!records[0].worked);
        assert!(records[1].worked);
        assert!(!records[2].worked);
    }

    #[test]
    fn iso_week_and_weekday_index() {
        // 2024-04-01 is the Monday of ISO week 14.
        let records = classify_days(&[ymd(2024, 4, 1), ymd(2024, 4, 5)], &WorkedSet::new());

        assert_eq!(records[0].week, 14);
        assert_eq!(records[0].weekday, 0);
        assert_eq!(records[1].week, 14);
        assert_eq!(records[1].weekday, 4);
    }

    #[test]
    fn year_boundary_week_number() {
        // 2025-12-29 (Monday) belongs to ISO week 1 of 2026.
        let records = classify_days(&[ymd(2025, 12, 29)], &WorkedSet::new());
        assert_eq!(records[0].week, 1);
    }

    #[test]
    fn empty_sequence_is_fine() {
        assert!(classify_days(&[], &WorkedSet::new()).is_empty());
    }
}
