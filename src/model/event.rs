// File: ./src/model/event.rs
use crate::error::{FormatError, FormatResult};
use crate::model::location::LocationResolver;
use crate::model::pattern::ParsedSchedule;
use crate::model::weekday::MeetingDay;
use chrono::{Duration, NaiveDateTime};
use rrule::RRuleSet;
use std::str::FromStr;

/// Classes nominally ending at :20 or :50 actually end ten minutes earlier.
pub const DEFAULT_END_TRIM_MINUTES: i64 = 10;

/// Safety cap for occurrence expansion.
const MAX_OCCURRENCES: usize = 1000;

const ICAL_DATETIME: &str = "%Y%m%dT%H%M%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Weekly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Weekly => "WEEKLY",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recurrence {
    pub frequency: Frequency,
    pub by_weekday: Vec<MeetingDay>,
    /// Inclusive end of the series.
    pub until: NaiveDateTime,
}

impl Recurrence {
    /// e.g. `FREQ=WEEKLY;BYDAY=MO,WE;UNTIL=20240405T101000`
    pub fn to_rrule_string(&self) -> String {
        self.render("")
    }

    fn render(&self, until_suffix: &str) -> String {
        let mut rule = format!("FREQ={}", self.frequency.as_str());
        if !self.by_weekday.is_empty() {
            let codes: Vec<&str> = self.by_weekday.iter().map(|d| d.rrule_code()).collect();
            rule.push_str(&format!(";BYDAY={}", codes.join(",")));
        }
        rule.push_str(&format!(
            ";UNTIL={}{}",
            self.until.format(ICAL_DATETIME),
            until_suffix
        ));
        rule
    }
}

/// Row-level data that is not part of the meeting pattern itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseMeta {
    pub title: String,
    pub instructor: String,
    pub section_details: String,
}

/// A single weekly-recurring class meeting, ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDescriptor {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub location_display: String,
    pub address_text: String,
    pub description: String,
    pub recurrence: Recurrence,
}

impl EventDescriptor {
    pub fn rrule(&self) -> String {
        self.recurrence.to_rrule_string()
    }

    /// Start instants of every occurrence in the series.
    ///
    /// Naive times are fed to `rrule` as UTC and converted back, so no
    /// timezone shift takes place.
    pub fn occurrences(&self) -> FormatResult<Vec<NaiveDateTime>> {
        let rrule_string = format!(
            "DTSTART:{}Z\nRRULE:{}",
            self.start.format(ICAL_DATETIME),
            self.recurrence.render("Z")
        );

        let set = RRuleSet::from_str(&rrule_string)
            .map_err(|e| FormatError::Recurrence(e.to_string()))?;
        Ok(set
            .into_iter()
            .take(MAX_OCCURRENCES)
            .map(|d| d.to_utc().naive_utc())
            .collect())
    }
}

/// Turns parsed patterns into event descriptors.
#[derive(Debug, Clone)]
pub struct EventBuilder<'a> {
    resolver: LocationResolver<'a>,
    end_trim: Duration,
}

impl<'a> EventBuilder<'a> {
    pub fn new(resolver: LocationResolver<'a>) -> Self {
        Self {
            resolver,
            end_trim: Duration::minutes(DEFAULT_END_TRIM_MINUTES),
        }
    }

    pub fn with_end_trim(mut self, minutes: i64) -> Self {
        self.end_trim = Duration::minutes(minutes);
        self
    }

    pub fn resolver(&self) -> &LocationResolver<'a> {
        &self.resolver
    }

    pub fn build(&self, schedule: &ParsedSchedule, meta: &CourseMeta) -> EventDescriptor {
        let start = schedule.start_date.and_time(schedule.start_time);
        let end = schedule.start_date.and_time(schedule.end_time) - self.end_trim;
        // UNTIL must sit on the last day, otherwise the series collapses to one event.
        let until = schedule.end_date.and_time(schedule.end_time) - self.end_trim;

        let location_display = self.resolver.resolve_display_name(&schedule.location);
        let address_text = self.resolver.resolve_address(&schedule.location);
        let description = format!(
            "Instructor: {}\n\n{}\n\n{}",
            meta.instructor, location_display, meta.section_details
        );

        EventDescriptor {
            title: meta.title.clone(),
            start,
            end,
            location_display,
            address_text,
            description,
            recurrence: Recurrence {
                frequency: Frequency::Weekly,
                by_weekday: schedule.weekdays.clone(),
                until,
            },
        }
    }
}
