// File: ./src/model/adapter.rs
use crate::model::event::EventDescriptor;
use chrono::Utc;
use icalendar::{Calendar, Component, Event};
use uuid::Uuid;

impl EventDescriptor {
    /// Builds the VEVENT for this descriptor.
    ///
    /// Start and end are written as floating local times: the source
    /// spreadsheet carries no timezone.
    pub fn to_event(&self) -> Event {
        let mut event = Event::new();
        event.uid(&Uuid::new_v4().to_string());
        event.summary(&self.title);
        event.timestamp(Utc::now());

        event.add_property("DTSTART", self.start.format("%Y%m%dT%H%M%S").to_string());
        event.add_property("DTEND", self.end.format("%Y%m%dT%H%M%S").to_string());
        event.add_property("RRULE", self.rrule());

        if !self.address_text.is_empty() {
            event.add_property("LOCATION", &self.address_text);
        }
        if !self.description.is_empty() {
            event.description(&self.description);
        }
        event
    }

    /// Standalone VCALENDAR holding only this event.
    pub fn to_ics(&self) -> String {
        let mut calendar = Calendar::new();
        calendar.push(self.to_event());
        calendar.to_string()
    }
}
