//! Grid Layout Planning
//!
//! Assigns each classified day a (week row, column) position for calendar
//! grid rendering.

use std::collections::HashMap;
use vagtplan_core::{DayRecord, GridPosition, PositionedDay};

/// Lay out classified days on a week-by-column grid.
///
/// Days are grouped by ISO week number; within each week, columns are
/// assigned 1..=k in input order, where k is the number of days that week
/// contributes. Boundary weeks with fewer days get a shorter contiguous
/// run, never a gap. Output order equals input order.
pub fn layout_grid(records: Vec<DayRecord>) -> Vec<PositionedDay> {
    let mut next_column: HashMap<u32, u32> = HashMap::new();

    records
        .into_iter()
        .map(|day| {
            let column = next_column.entry(day.week).or_insert(0);
            *column += 1;
            PositionedDay {
                day,
                position: GridPosition {
                    week: day.week,
                    column: *column,
                },
            }
        })
        .collect()
}
