//! Roster Scanning
//!
//! Finds the dates on which a staff identifier appears in any role column.

use vagtplan_core::{RoleColumns, Roster, WorkedSet};

/// Scan the roster for `identifier` across the given role columns.
///
/// Matching is exact and case-sensitive; no trimming, no normalization.
/// Rows with a missing date cell are skipped. The result is a set, so a
/// date reached through several role columns is recorded once.
///
/// An empty role set is not an error: it means no data is available for
/// classification and every day will come out free.
pub fn scan_roster(roster: &Roster, identifier: &str, roles: &RoleColumns) -> WorkedSet {
    let mut worked = WorkedSet::new();

    if roles.is_empty() {
        tracing::debug!(identifier, "no role columns; worked set is empty");
        return worked;
    }

    for column in roles.iter() {
        for row in &roster.rows {
            let Some(date) = row.date else { continue };
            if row.get(column) == Some(identifier) {
                worked.insert(date);
            }
        }
    }

    tracing::debug!(
        identifier,
        roles = roles.len(),
        dates = worked.len(),
        "scanned roster"
    );

    worked
}
