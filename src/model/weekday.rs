// File: ./src/model/weekday.rs
use std::fmt;
use strum::{EnumIter, EnumString};

/// Weekday as it appears in the days field of a meeting pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum MeetingDay {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl MeetingDay {
    /// Two-letter code used by RRULE `BYDAY`.
    pub fn rrule_code(self) -> &'static str {
        match self {
            MeetingDay::Mon => "MO",
            MeetingDay::Tue => "TU",
            MeetingDay::Wed => "WE",
            MeetingDay::Thu => "TH",
            MeetingDay::Fri => "FR",
            MeetingDay::Sat => "SA",
            MeetingDay::Sun => "SU",
        }
    }

    pub fn to_chrono(self) -> chrono::Weekday {
        match self {
            MeetingDay::Mon => chrono::Weekday::Mon,
            MeetingDay::Tue => chrono::Weekday::Tue,
            MeetingDay::Wed => chrono::Weekday::Wed,
            MeetingDay::Thu => chrono::Weekday::Thu,
            MeetingDay::Fri => chrono::Weekday::Fri,
            MeetingDay::Sat => chrono::Weekday::Sat,
            MeetingDay::Sun => chrono::Weekday::Sun,
        }
    }

    /// Parses a whitespace-separated day list ("Mon Wed Fri").
    /// Unknown tokens are dropped, duplicates collapse, order is Mon..Sun.
    pub fn parse_list(input: &str) -> Vec<MeetingDay> {
        let mut days: Vec<MeetingDay> = input
            .split_whitespace()
            .filter_map(|token| match token.parse::<MeetingDay>() {
                Ok(day) => Some(day),
                Err(_) => {
                    log::debug!("Ignoring unrecognized weekday token '{}'", token);
                    None
                }
            })
            .collect();
        days.sort();
        days.dedup();
        days
    }
}

impl fmt::Display for MeetingDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MeetingDay::Mon => "Mon",
            MeetingDay::Tue => "Tue",
            MeetingDay::Wed => "Wed",
            MeetingDay::Thu => "Thu",
            MeetingDay::Fri => "Fri",
            MeetingDay::Sat => "Sat",
            MeetingDay::Sun => "Sun",
        };
        write!(f, "{}", label)
    }
}
