// File: ./src/model/mod.rs
pub mod adapter;
pub mod event;
pub mod location;
pub mod pattern;
pub mod time;
pub mod weekday;

pub use event::{CourseMeta, EventBuilder, EventDescriptor, Frequency, Recurrence};
pub use location::{AddressTable, Building, LocationResolver, ResolvedLocation};
pub use pattern::{ParsedSchedule, parse_meeting_pattern};
pub use time::parse_time_of_day;
pub use weekday::MeetingDay;
