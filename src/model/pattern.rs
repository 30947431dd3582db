// File: ./src/model/pattern.rs
use crate::error::{FormatError, FormatResult};
use crate::model::time::{format_time_of_day, parse_time_of_day};
use crate::model::weekday::MeetingDay;
use chrono::{NaiveDate, NaiveTime};
use std::fmt;

pub const FIELD_SEPARATOR: &str = " | ";
pub const DEFAULT_LOCATION: &str = "Online";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// One fully parsed meeting pattern line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSchedule {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub weekdays: Vec<MeetingDay>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
}

/// Parses `"2024-01-08 - 2024-04-05 | Mon Wed | 9:00 a.m. - 10:20 a.m. | HENN - Room 200"`.
///
/// Fields after the third are joined back together, so locations that
/// contain ` | ` themselves survive intact.
pub fn parse_meeting_pattern(line: &str) -> FormatResult<ParsedSchedule> {
    let line = line.trim();
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < 3 {
        return Err(FormatError::FieldCount {
            found: fields.len(),
            pattern: line.to_string(),
        });
    }

    let (start_date, end_date) = parse_date_range(fields[0])?;

    let weekdays = MeetingDay::parse_list(fields[1]);
    if weekdays.is_empty() {
        return Err(FormatError::Weekdays(fields[1].trim().to_string()));
    }

    let (start_time, end_time) = parse_time_range(fields[2])?;

    let location = fields[3..].join(FIELD_SEPARATOR).trim().to_string();
    let location = if location.is_empty() {
        DEFAULT_LOCATION.to_string()
    } else {
        location
    };

    Ok(ParsedSchedule {
        start_date,
        end_date,
        weekdays,
        start_time,
        end_time,
        location,
    })
}

fn parse_date(raw: &str) -> FormatResult<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| FormatError::Date(raw.to_string()))
}

fn parse_date_range(raw: &str) -> FormatResult<(NaiveDate, NaiveDate)> {
    let (start, end) = raw
        .split_once(" - ")
        .ok_or_else(|| FormatError::DateRange(raw.trim().to_string()))?;
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    if start > end {
        return Err(FormatError::DateRange(raw.trim().to_string()));
    }
    Ok((start, end))
}

fn parse_time_range(raw: &str) -> FormatResult<(NaiveTime, NaiveTime)> {
    let cleaned = raw.trim_end_matches(|c: char| c == '|' || c.is_whitespace());
    let (start, end) = cleaned
        .split_once('-')
        .ok_or_else(|| FormatError::TimeRange(raw.trim().to_string()))?;
    Ok((parse_time_of_day(start)?, parse_time_of_day(end)?))
}

impl fmt::Display for ParsedSchedule {
    /// Canonical pattern line; parsing it yields the same value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days: Vec<String> = self.weekdays.iter().map(|d| d.to_string()).collect();
        write!(
            f,
            "{} - {}{sep}{}{sep}{} - {}{sep}{}",
            self.start_date.format(DATE_FORMAT),
            self.end_date.format(DATE_FORMAT),
            days.join(" "),
            format_time_of_day(self.start_time),
            format_time_of_day(self.end_time),
            self.location,
            sep = FIELD_SEPARATOR,
        )
    }
}
