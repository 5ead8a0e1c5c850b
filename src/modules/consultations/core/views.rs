use crate::modules::consultations::core::slot::Slot;
use crate::modules::directory::core::user::{Topic, User};
use crate::shared::core::event_calendar::{EventCalendar, MEETING_LOCATION};
use crate::shared::core::primitives::{SlotId, TopicId, UserId};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonSummary {
    pub id: UserId,
    pub name: String,
    pub username: Option<String>,
}

impl From<&User> for PersonSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.full_name(),
            username: user.username.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicSummary {
    pub id: TopicId,
    pub name: String,
}

impl From<&Topic> for TopicSummary {
    fn from(topic: &Topic) -> Self {
        Self {
            id: topic.id,
            name: topic.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicView {
    pub id: TopicId,
    pub name: String,
    pub experts: Vec<PersonSummary>,
}

/// A bookable cell computed on the fly. `id` is only meaningful to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateView {
    pub id: i64,
    pub expert: PersonSummary,
    pub topic: TopicSummary,
    pub time: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingView {
    pub slot_id: SlotId,
    pub expert: Option<PersonSummary>,
    pub topic: Option<TopicSummary>,
    pub attendee: Option<PersonSummary>,
    pub date: String,
    pub time: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub meeting_location: String,
}

impl BookingView {
    pub fn new(
        slot: &Slot,
        expert: Option<&User>,
        topic: Option<&Topic>,
        attendee: Option<&User>,
        calendar: &EventCalendar,
    ) -> Self {
        Self {
            slot_id: slot.id,
            expert: expert.map(PersonSummary::from),
            topic: topic.map(TopicSummary::from),
            attendee: attendee.map(PersonSummary::from),
            date: calendar.date(slot.start),
            time: calendar.time_range(slot.start, slot.end),
            start: slot.start,
            end: slot.end,
            meeting_location: MEETING_LOCATION.to_string(),
        }
    }
}
