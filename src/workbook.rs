// File: ./src/workbook.rs
//! Spreadsheet ingestion: finds the header row and exposes course rows.
use crate::model::CourseMeta;
use anyhow::{Context, Result, anyhow};
use calamine::{Data, Reader, open_workbook_auto};
use std::collections::HashMap;
use std::path::Path;

pub const COURSE_LISTING: &str = "Course Listing";
pub const INSTRUCTIONAL_FORMAT: &str = "Instructional Format";
pub const MEETING_PATTERNS: &str = "Meeting Patterns";
pub const INSTRUCTOR: &str = "Instructor";
pub const ADDRESS: &str = "Address";
pub const SECTION: &str = "Section";

const REQUIRED_COLUMNS: &[&str] = &[COURSE_LISTING, MEETING_PATTERNS];

/// One course section as read from the spreadsheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseRow {
    pub course_listing: String,
    pub instructional_format: String,
    pub meeting_patterns: Option<String>,
    pub instructor: String,
    pub address: String,
    pub section: String,
}

impl CourseRow {
    pub fn title(&self) -> String {
        if self.instructional_format.is_empty() {
            self.course_listing.clone()
        } else {
            format!("{} - {}", self.course_listing, self.instructional_format)
        }
    }

    pub fn has_meeting_patterns(&self) -> bool {
        self.meeting_patterns
            .as_deref()
            .is_some_and(|p| !p.trim().is_empty())
    }

    pub fn meta(&self) -> CourseMeta {
        CourseMeta {
            title: self.title(),
            instructor: self.instructor.clone(),
            section_details: self.section.clone(),
        }
    }
}

/// Loads course rows from `.xlsx`/`.xls`/`.xlsm`/`.ods` or `.csv`.
pub fn load_rows(path: &Path) -> Result<Vec<CourseRow>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let grid = if ext == "csv" {
        read_csv_grid(path)?
    } else {
        read_sheet_grid(path)?
    };
    rows_from_grid(&grid).with_context(|| format!("In spreadsheet '{}'", path.display()))
}

fn read_sheet_grid(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook '{}'", path.display()))?;
    let sheet_names = workbook.sheet_names();
    let first = sheet_names
        .first()
        .ok_or_else(|| anyhow!("Workbook '{}' has no sheets", path.display()))?
        .clone();
    let range = workbook
        .worksheet_range(&first)
        .map_err(|e| anyhow!("Failed to read sheet '{}': {}", first, e))?;

    log::debug!("Reading sheet '{}' ({} rows)", first, range.height());
    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect())
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn read_csv_grid(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to open '{}'", path.display()))?;

    reader
        .records()
        .map(|result| {
            result
                .map(|record| record.iter().map(str::to_string).collect())
                .with_context(|| format!("Failed to read CSV record in '{}'", path.display()))
        })
        .collect()
}

/// Finds the header row (the first one with a `Course Listing` cell) and
/// maps every following non-blank row to a [`CourseRow`].
pub fn rows_from_grid(grid: &[Vec<String>]) -> Result<Vec<CourseRow>> {
    let header_idx = grid
        .iter()
        .position(|row| row.iter().any(|c| c.trim() == COURSE_LISTING))
        .ok_or_else(|| anyhow!("Could not find '{}' in the spreadsheet", COURSE_LISTING))?;

    let columns: HashMap<&str, usize> = grid[header_idx]
        .iter()
        .enumerate()
        .map(|(i, name)| (name.trim(), i))
        .filter(|(name, _)| !name.is_empty())
        .collect();

    for required in REQUIRED_COLUMNS {
        if !columns.contains_key(required) {
            return Err(anyhow!("Missing required column '{}'", required));
        }
    }
    log::debug!("Header found on row {}", header_idx + 1);

    let field = |row: &[String], name: &str| -> String {
        columns
            .get(name)
            .and_then(|&i| row.get(i))
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    };

    Ok(grid[header_idx + 1..]
        .iter()
        .filter(|row| row.iter().any(|c| !c.trim().is_empty()))
        .map(|row| {
            let patterns = field(row, MEETING_PATTERNS);
            CourseRow {
                course_listing: field(row, COURSE_LISTING),
                instructional_format: field(row, INSTRUCTIONAL_FORMAT),
                meeting_patterns: if patterns.is_empty() { None } else { Some(patterns) },
                instructor: field(row, INSTRUCTOR),
                address: field(row, ADDRESS),
                section: field(row, SECTION),
            }
        })
        .collect())
}
