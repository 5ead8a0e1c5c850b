// Side effects requested by the consultation use cases once the ledger has committed.
//
// Each intent addresses the expert owning the slot and renders to a chat message
// in venue local time.

use crate::shared::core::event_calendar::{EventCalendar, MEETING_LOCATION};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingNotice {
    pub expert_chat_id: i64,
    pub attendee_name: String,
    pub attendee_handle: Option<String>,
    pub topic_name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsultationIntent {
    NotifyExpertOfBooking(BookingNotice),
    NotifyExpertOfCancellation(BookingNotice),
}

impl ConsultationIntent {
    pub fn recipient(&self) -> i64 {
        match self {
            ConsultationIntent::NotifyExpertOfBooking(notice)
            | ConsultationIntent::NotifyExpertOfCancellation(notice) => notice.expert_chat_id,
        }
    }

    pub fn render(&self, calendar: &EventCalendar) -> String {
        let (headline, notice) = match self {
            ConsultationIntent::NotifyExpertOfBooking(notice) => ("New consultation booking", notice),
            ConsultationIntent::NotifyExpertOfCancellation(notice) => {
                ("Consultation cancelled", notice)
            }
        };
        let attendee = match &notice.attendee_handle {
            Some(handle) => format!("{} ({handle})", notice.attendee_name),
            None => notice.attendee_name.clone(),
        };
        [
            headline.to_string(),
            String::new(),
            format!("Date: {}", calendar.date(notice.start)),
            format!("Time: {}", calendar.time_range(notice.start, notice.end)),
            format!("Attendee: {attendee}"),
            format!("Topic: {}", notice.topic_name),
            format!("Meeting place: {MEETING_LOCATION}"),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod consultation_intent_tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rstest::{fixture, rstest};

    #[fixture]
    fn notice() -> BookingNotice {
        let start = Utc.with_ymd_and_hms(2025, 9, 20, 8, 0, 0).unwrap();
        BookingNotice {
            expert_chat_id: 5010,
            attendee_name: "Anna Petrova".into(),
            attendee_handle: Some("@anna".into()),
            topic_name: "BI".into(),
            start,
            end: start + Duration::minutes(30),
        }
    }

    #[rstest]
    fn it_should_render_a_booking_message(notice: BookingNotice) {
        let calendar = EventCalendar::from_utc_offset_hours(3).unwrap();
        let text = ConsultationIntent::NotifyExpertOfBooking(notice).render(&calendar);
        assert_eq!(
            text,
            "New consultation booking\n\n\
             Date: 20.09.2025\n\
             Time: 11:00 - 11:30\n\
             Attendee: Anna Petrova (@anna)\n\
             Topic: BI\n\
             Meeting place: Information desk at the Yandex stand, 1st floor"
        );
    }

    #[rstest]
    fn it_should_render_a_cancellation_without_handle(mut notice: BookingNotice) {
        notice.attendee_handle = None;
        let calendar = EventCalendar::from_utc_offset_hours(3).unwrap();
        let intent = ConsultationIntent::NotifyExpertOfCancellation(notice);
        let text = intent.render(&calendar);
        assert!(text.starts_with("Consultation cancelled"));
        assert!(text.contains("Attendee: Anna Petrova\n"));
        assert_eq!(intent.recipient(), 5010);
    }
}
