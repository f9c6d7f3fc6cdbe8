//! Spreadsheet export of a single report.
//!
//! The sheet is laid out top to bottom as:
//!
//! ```text
//! ANG MANANAMPALATAYANG GUMAWA           (org name, bold/16pt/blue/centered)
//! NATIONAL WORKERS' MONTHLY REPORT       (title, bold/centered)
//! ID | Month Of: | Worker Name: | ...    (one field/value row each)
//! Weekly Attendance                      (bold)
//! Activities | Week 1 .. Week 5 | Average
//! <label> | "10, 12, 14" | "(Average: 12.00)"   x one row per activity
//! Narrative Report: | Challenges/Problems encountered: | Prayer Requests:
//! ```
//!
//! Week values and averages are written as display strings, not numeric cells.

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatPattern, Workbook};

use super::error::ReportError;
use super::types::{Activity, ReportView};

/// Organization name in the first row.
pub const ORGANIZATION_NAME: &str = "ANG MANANAMPALATAYANG GUMAWA";

/// Report title in the second row.
pub const REPORT_TITLE: &str = "NATIONAL WORKERS' MONTHLY REPORT";

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Report";

const WEEKLY_ATTENDANCE: &str = "Weekly Attendance";

const COLUMN_HEADERS: [&str; 7] = [
    "Activities",
    "Week 1",
    "Week 2",
    "Week 3",
    "Week 4",
    "Week 5",
    "Average",
];

/// Visual treatment of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    /// Default formatting.
    Plain,
    /// Bold, 16pt, centered, blue.
    OrganizationName,
    /// Bold, centered.
    Title,
    /// Bold.
    SectionHeader,
    /// Bold with no fill.
    ColumnHeader,
}

/// A single text cell of the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Displayed text.
    pub text: String,
    /// Formatting.
    pub style: CellStyle,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, CellStyle::Plain)
    }

    fn styled(text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Joins weekly values as `10, 12, 14`.
#[must_use]
pub fn join_counts(values: &[i32]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats an average as `(Average: 11.20)`.
#[must_use]
pub fn format_average(avg: f64) -> String {
    format!("(Average: {avg:.2})")
}

fn field_row(field: &str, value: impl Into<String>) -> Vec<Cell> {
    vec![Cell::plain(field), Cell::plain(value)]
}

/// Builds the row/cell layout of the export for `report`.
#[must_use]
pub fn layout(report: &ReportView) -> Vec<Vec<Cell>> {
    let fields = &report.fields;
    let mut rows = vec![
        vec![Cell::styled(ORGANIZATION_NAME, CellStyle::OrganizationName)],
        vec![Cell::styled(REPORT_TITLE, CellStyle::Title)],
        field_row("ID", report.id.to_string()),
        field_row("Month Of:", fields.month_of.as_str()),
        field_row("Worker Name:", fields.worker_name.as_str()),
        field_row("Area Of Assignment:", fields.area_of_assignment.as_str()),
        field_row("Name Of Church:", fields.name_of_church.as_str()),
        vec![Cell::styled(WEEKLY_ATTENDANCE, CellStyle::SectionHeader)],
        COLUMN_HEADERS
            .iter()
            .map(|h| Cell::styled(*h, CellStyle::ColumnHeader))
            .collect(),
    ];

    rows.extend(Activity::ALL.iter().map(|&activity| {
        vec![
            Cell::plain(activity.label()),
            Cell::plain(join_counts(fields.activities.series(activity))),
            Cell::plain(format_average(report.averages.get(activity))),
        ]
    }));

    rows.push(field_row("Narrative Report:", fields.narrative_report.as_str()));
    rows.push(field_row(
        "Challenges/Problems encountered:",
        fields.challenges_and_problem_encountered.as_str(),
    ));
    rows.push(field_row("Prayer Requests:", fields.prayer_request.as_str()));

    rows
}

fn format_for(style: CellStyle) -> Option<Format> {
    match style {
        CellStyle::Plain => None,
        CellStyle::OrganizationName => Some(
            Format::new()
                .set_bold()
                .set_font_size(16)
                .set_align(FormatAlign::Center)
                .set_font_color(Color::RGB(0x0000_00FF)),
        ),
        CellStyle::Title => Some(Format::new().set_bold().set_align(FormatAlign::Center)),
        CellStyle::SectionHeader => Some(Format::new().set_bold()),
        CellStyle::ColumnHeader => Some(Format::new().set_bold().set_pattern(FormatPattern::None)),
    }
}

/// Renders `report` into xlsx bytes.
///
/// # Errors
///
/// Returns [`ReportError::Render`] if the workbook cannot be built or serialized.
pub fn render(report: &ReportView) -> Result<Vec<u8>, ReportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (row_idx, row) in layout(report).into_iter().enumerate() {
        let row_num = u32::try_from(row_idx)
            .map_err(|_| ReportError::Render(format!("row {row_idx} out of range")))?;

        for (col_idx, cell) in row.into_iter().enumerate() {
            let col_num = u16::try_from(col_idx)
                .map_err(|_| ReportError::Render(format!("column {col_idx} out of range")))?;

            match format_for(cell.style) {
                Some(format) => {
                    worksheet.write_string_with_format(row_num, col_num, cell.text, &format)?;
                }
                None => {
                    worksheet.write_string(row_num, col_num, cell.text)?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
