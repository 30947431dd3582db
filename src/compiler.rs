// File: ./src/compiler.rs
//! Turns spreadsheet rows into event descriptors.
use crate::error::FormatError;
use crate::model::{EventBuilder, EventDescriptor, parse_meeting_pattern};
use crate::workbook::CourseRow;

/// Splits a `Meeting Patterns` cell into individual pattern lines.
///
/// The exporting system puts each pattern on its own line starting with the
/// four-digit year of its start date; any other line continues the previous
/// pattern. This is a formatting heuristic of that export, not a grammar.
pub struct MeetingBlockLexer<'a> {
    lines: std::iter::Peekable<std::str::Lines<'a>>,
}

impl<'a> MeetingBlockLexer<'a> {
    pub fn new(block: &'a str) -> Self {
        Self {
            lines: block.lines().peekable(),
        }
    }

    fn starts_pattern(line: &str) -> bool {
        line.len() >= 4 && line.as_bytes()[..4].iter().all(u8::is_ascii_digit)
    }
}

impl Iterator for MeetingBlockLexer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let mut pattern = self.lines.next()?.to_string();
            while let Some(next) = self.lines.peek() {
                if Self::starts_pattern(next) {
                    break;
                }
                pattern.push('\n');
                pattern.push_str(next);
                self.lines.next();
            }
            let trimmed = pattern.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
}

pub fn split_meeting_block(block: &str) -> Vec<String> {
    MeetingBlockLexer::new(block).collect()
}

/// A pattern that could not be turned into an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternFailure {
    pub title: String,
    pub pattern: String,
    pub error: FormatError,
}

#[derive(Debug, Clone, Default)]
pub struct CompiledRow {
    pub events: Vec<EventDescriptor>,
    pub failures: Vec<PatternFailure>,
}

/// Everything produced from one spreadsheet.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    pub events: Vec<EventDescriptor>,
    pub failures: Vec<PatternFailure>,
    pub rows_skipped: usize,
}

impl Schedule {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct ScheduleCompiler<'a> {
    builder: EventBuilder<'a>,
}

impl<'a> ScheduleCompiler<'a> {
    pub fn new(builder: EventBuilder<'a>) -> Self {
        Self { builder }
    }

    /// Compiles one row. A bad pattern is logged and recorded but does not
    /// stop the row's other patterns.
    pub fn compile_row(&self, row: &CourseRow) -> CompiledRow {
        let mut out = CompiledRow::default();
        let Some(block) = row.meeting_patterns.as_deref() else {
            return out;
        };
        let meta = row.meta();

        for pattern in MeetingBlockLexer::new(block) {
            match parse_meeting_pattern(&pattern) {
                Ok(parsed) => out.events.push(self.builder.build(&parsed, &meta)),
                Err(error) => {
                    log::warn!("Skipping pattern of '{}': {} ({})", meta.title, pattern, error);
                    out.failures.push(PatternFailure {
                        title: meta.title.clone(),
                        pattern,
                        error,
                    });
                }
            }
        }
        out
    }

    pub fn compile(&self, rows: &[CourseRow]) -> Schedule {
        let mut schedule = Schedule::default();
        for row in rows {
            if !row.has_meeting_patterns() {
                log::debug!("No meeting patterns for '{}', skipping", row.title());
                schedule.rows_skipped += 1;
                continue;
            }
            let compiled = self.compile_row(row);
            schedule.events.extend(compiled.events);
            schedule.failures.extend(compiled.failures);
        }
        log::info!(
            "Compiled {} event(s) from {} row(s), {} pattern(s) failed",
            schedule.events.len(),
            rows.len(),
            schedule.failures.len()
        );
        schedule
    }
}
