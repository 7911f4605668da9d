//! # vagtplan-render
//!
//! Rendering backends for vagtplan calendar plans.
//!
//! This crate provides:
//! - SVG calendar-grid rendering (one row per ISO week)
//! - Plain-text grid rendering for console output
//! - A date-list renderer matching the classic dashboard display
//!
//! ## Example
//!
//! ```rust,ignore
//! use vagtplan_core::Renderer;
//! use vagtplan_render::{SvgGridRenderer, TextGridRenderer};
//!
//! let svg = SvgGridRenderer::new().render(&plan)?;
//! std::fs::write("calendar.svg", svg)?;
//!
//! let text = TextGridRenderer::new().render(&plan)?;
//! println!("{text}");
//! ```

pub mod text;

pub use text::{DateListRenderer, TextGridRenderer};

use chrono::Datelike;
use svg::node::element::{Group, Rectangle, Text};
use svg::Document;
use vagtplan_core::{CalendarPlan, PositionedDay, RenderError, Renderer};

/// SVG calendar-grid renderer configuration
#[derive(Clone, Debug)]
pub struct SvgGridRenderer {
    /// Cell edge length in pixels
    pub cell_size: u32,
    /// Gap between cells in pixels
    pub cell_gap: u32,
    /// Width of the week-label column in pixels
    pub label_width: u32,
    /// Padding around the chart
    pub padding: u32,
    /// Fill color for worked days
    pub worked_color: String,
    /// Fill color for free days
    pub free_color: String,
    /// Background color
    pub background_color: String,
    /// Text color
    pub text_color: String,
    /// Font family
    pub font_family: String,
    /// Font size in pixels
    pub font_size: u32,
    /// Chart title (typically the staff identifier)
    pub title: Option<String>,
}

impl Default for SvgGridRenderer {
    fn default() -> Self {
        Self {
            cell_size: 36,
            cell_gap: 4,
            label_width: 64,
            padding: 20,
            worked_color: "#27ae60".into(),
            free_color: "#ecf0f1".into(),
            background_color: "#ffffff".into(),
            text_color: "#2c3e50".into(),
            font_family: "system-ui, -apple-system, sans-serif".into(),
            font_size: 12,
            title: None,
        }
    }
}

impl SvgGridRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure cell size
    pub fn cell_size(mut self, size: u32) -> Self {
        self.cell_size = size;
        self
    }

    /// Set a chart title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Height reserved for the title line
    fn header_height(&self) -> u32 {
        if self.title.is_some() {
            self.font_size + 18
        } else {
            0
        }
    }

    fn total_width(&self, max_columns: u32) -> u32 {
        self.padding * 2
            + self.label_width
            + max_columns * (self.cell_size + self.cell_gap)
    }

    fn total_height(&self, week_count: usize) -> u32 {
        self.padding * 2
            + self.header_height()
            + week_count as u32 * (self.cell_size + self.cell_gap)
            + 26 // legend line
    }

    /// Render one day cell with its day-of-month label
    fn render_cell(&self, positioned: &PositionedDay, row: usize) -> Group {
        let x = self.padding
            + self.label_width
            + (positioned.position.column - 1) * (self.cell_size + self.cell_gap);
        let y =
            self.padding + self.header_height() + row as u32 * (self.cell_size + self.cell_gap);

        let fill = if positioned.day.worked {
            self.worked_color.as_str()
        } else {
            self.free_color.as_str()
        };

        let rect = Rectangle::new()
            .set("x", x)
            .set("y", y)
            .set("width", self.cell_size)
            .set("height", self.cell_size)
            .set("rx", 4)
            .set("ry", 4)
            .set("fill", fill);

        let label = Text::new(format!("{}", positioned.day.date.day()))
            .set("x", x + self.cell_size / 2)
            .set("y", y + self.cell_size / 2 + self.font_size / 3)
            .set("font-family", self.font_family.as_str())
            .set("font-size", self.font_size)
            .set("fill", self.text_color.as_str())
            .set("text-anchor", "middle");

        Group::new().set("class", "day").add(rect).add(label)
    }

    /// Render the week-number label for a row
    fn render_week_label(&self, week: u32, row: usize) -> Text {
        let y = self.padding
            + self.header_height()
            + row as u32 * (self.cell_size + self.cell_gap)
            + self.cell_size / 2
            + self.font_size / 3;

        Text::new(format!("Week {}", week))
            .set("x", self.padding)
            .set("y", y)
            .set("font-family", self.font_family.as_str())
            .set("font-size", self.font_size)
            .set("fill", self.text_color.as_str())
    }

    /// Render the worked/free legend below the grid
    fn render_legend(&self, y_offset: u32) -> Group {
        let mut group = Group::new().set("class", "legend");
        let box_size = 12;
        let y = y_offset + 14;

        let entries = [
            (self.worked_color.as_str(), "Worked", 0u32),
            (self.free_color.as_str(), "Free", 100u32),
        ];
        for (color, label, dx) in entries {
            let swatch = Rectangle::new()
                .set("x", self.padding + dx)
                .set("y", y - box_size + 2)
                .set("width", box_size)
                .set("height", box_size)
                .set("rx", 2)
                .set("fill", color);
            group = group.add(swatch);

            let text = Text::new(label)
                .set("x", self.padding + dx + box_size + 5)
                .set("y", y)
                .set("font-family", self.font_family.as_str())
                .set("font-size", self.font_size - 1)
                .set("fill", self.text_color.as_str());
            group = group.add(text);
        }

        group
    }
}

impl Renderer for SvgGridRenderer {
    type Output = String;

    fn render(&self, plan: &CalendarPlan) -> Result<String, RenderError> {
        if plan.days.is_empty() {
            return Err(RenderError::InvalidData("No days to render".into()));
        }

        let weeks = plan.weeks();
        let width = self.total_width(plan.max_columns());
        let height = self.total_height(weeks.len());

        let mut document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0, 0, width, height))
            .set("xmlns", "http://www.w3.org/2000/svg");

        let background = Rectangle::new()
            .set("width", "100%")
            .set("height", "100%")
            .set("fill", self.background_color.as_str());
        document = document.add(background);

        if let Some(title) = &self.title {
            let text = Text::new(title.as_str())
                .set("x", self.padding)
                .set("y", self.padding + self.font_size)
                .set("font-family", self.font_family.as_str())
                .set("font-size", self.font_size + 4)
                .set("font-weight", "bold")
                .set("fill", self.text_color.as_str());
            document = document.add(text);
        }

        for (row, week) in weeks.iter().enumerate() {
            document = document.add(self.render_week_label(*week, row));
            for positioned in plan.days.iter().filter(|p| p.position.week == *week) {
                document = document.add(self.render_cell(positioned, row));
            }
        }

        let legend_y = self.padding
            + self.header_height()
            + weeks.len() as u32 * (self.cell_size + self.cell_gap);
        document = document.add(self.render_legend(legend_y));

        let mut output = Vec::new();
        svg::write(&mut output, &document)
            .map_err(|e| RenderError::Format(format!("Failed to write SVG: {}", e)))?;

        String::from_utf8(output).map_err(|e| RenderError::Format(format!("Invalid UTF-8: {}", e)))
    }
}
