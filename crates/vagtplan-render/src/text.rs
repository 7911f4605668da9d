//! Text renderers
//!
//! Console-friendly output: a compact week-by-week grid and the plain
//! date list the original dashboard showed.

use vagtplan_core::{CalendarPlan, RenderError, Renderer};

/// Plain-text calendar grid, one line per ISO week.
///
/// ## Example Output
///
/// ```text
/// Week 14   1.  2#  3.  4.  5.
/// Week 15   8.  9. 10. 11. 12.
/// ```
///
/// `#` marks a worked day, `.` a free day.
#[derive(Clone, Debug)]
pub struct TextGridRenderer {
    /// Mark for worked days
    pub worked_mark: char,
    /// Mark for free days
    pub free_mark: char,
}

impl Default for TextGridRenderer {
    fn default() -> Self {
        Self {
            worked_mark: '#',
            free_mark: '.',
        }
    }
}

impl TextGridRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for TextGridRenderer {
    type Output = String;

    fn render(&self, plan: &CalendarPlan) -> Result<String, RenderError> {
        use chrono::Datelike;

        let mut out = String::new();
        for week in plan.weeks() {
            out.push_str(&format!("Week {:>2}", week));
            for positioned in plan.days.iter().filter(|p| p.position.week == week) {
                let mark = if positioned.day.worked {
                    self.worked_mark
                } else {
                    self.free_mark
                };
                out.push_str(&format!(" {:>2}{}", positioned.day.date.day(), mark));
            }
            out.push('\n');
        }
        Ok(out)
    }
}

/// The classic list display: one worked date per line, or a fixed message
/// when the identifier never appears in the period.
#[derive(Clone, Debug, Default)]
pub struct DateListRenderer;

impl DateListRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DateListRenderer {
    type Output = String;

    fn render(&self, plan: &CalendarPlan) -> Result<String, RenderError> {
        if plan.worked.is_empty() {
            return Ok("No dates found for the selected identifier.\n".into());
        }

        let mut out = String::new();
        for date in &plan.worked {
            out.push_str(&format!("{}\n", date.format("%Y-%m-%d")));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use vagtplan_core::{DayRecord, GridPosition, PositionedDay, WorkedSet};

    fn small_plan() -> CalendarPlan {
        let d1 = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        let day = |date: NaiveDate, column: u32, worked: bool| PositionedDay {
            day: DayRecord {
                date,
                week: 14,
                weekday: column - 1,
                worked,
            },
            position: GridPosition { week: 14, column },
        };

        CalendarPlan {
            dates: vec![d1, d2],
            worked: [d2].into_iter().collect(),
            days: vec![day(d1, 1, false), day(d2, 2, true)],
        }
    }

    #[test]
    fn text_grid_marks_worked_days() {
        let text = TextGridRenderer::new().render(&small_plan()).unwrap();
        assert_eq!(text, "Week 14  1.  2#\n");
    }

    #[test]
    fn text_grid_empty_plan_is_empty_string() {
        let text = TextGridRenderer::new()
            .render(&CalendarPlan::default())
            .unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn date_list_prints_worked_dates() {
        let text = DateListRenderer::new().render(&small_plan()).unwrap();
        assert_eq!(text, "2024-04-02\n");
    }

    #[test]
    fn date_list_reports_no_dates() {
        let mut plan = small_plan();
        plan.worked = WorkedSet::new();

        let text = DateListRenderer::new().render(&plan).unwrap();
        assert!(text.contains("No dates found"));
    }
}
