// Shared test fixtures: a pinned event day, directory records, command builders
// and a bench wiring the consultation handlers to in-memory adapters.

use crate::modules::assessments::adapters::outbound::results_in_memory::InMemoryAssessmentResults;
use crate::modules::assessments::core::results::TestSubmission;
use crate::modules::consultations::adapters::outbound::ledger_in_memory::InMemorySlotLedger;
use crate::modules::consultations::use_cases::book_slot::command::{BookSlot, BookSlotRequest};
use crate::modules::consultations::use_cases::book_slot::handler::BookSlotHandler;
use crate::modules::consultations::use_cases::cancel_booking::handler::CancelBookingHandler;
use crate::modules::consultations::use_cases::list_bookings::handler::ListBookingsHandler;
use crate::modules::consultations::use_cases::list_candidate_slots::handler::ListCandidateSlotsHandler;
use crate::modules::consultations::use_cases::list_topics::handler::ListTopicsHandler;
use crate::modules::directory::adapters::outbound::directory_in_memory::InMemoryDirectory;
use crate::modules::directory::core::user::{Topic, User};
use crate::modules::workshops::adapters::outbound::registrations_in_memory::InMemoryWorkshopRegistrations;
use crate::modules::workshops::core::workshop::Workshop;
use crate::shared::core::event_calendar::{EventCalendar, GridCell};
use crate::shared::core::primitives::{TopicId, UserId, WorkshopId};
use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use crate::shell::state::{AppState, StateSettings, Stores};
use chrono::{DateTime, Duration as ChronoDuration, NaiveDate, Utc};
use std::sync::Arc;
use std::time::Duration;

pub const NOTIFY_TIMEOUT: Duration = Duration::from_millis(50);

pub fn event_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 20).unwrap()
}

pub fn calendar() -> EventCalendar {
    EventCalendar::from_utc_offset_hours(3)
        .unwrap()
        .pinned_to(event_day())
}

pub fn cell(index: usize) -> GridCell {
    calendar().cells(event_day())[index]
}

pub fn attendee(n: i64) -> User {
    User {
        id: UserId(n),
        telegram_id: 1000 + n,
        first_name: "Attendee".into(),
        last_name: Some(n.to_string()),
        username: Some(format!("attendee{n}")),
        email: None,
        workplace: None,
        position: None,
        is_expert: false,
    }
}

pub fn expert(n: i64) -> User {
    User {
        id: UserId(n),
        telegram_id: 5000 + n,
        first_name: "Expert".into(),
        last_name: Some(n.to_string()),
        username: Some(format!("expert{n}")),
        email: None,
        workplace: Some("Yandex".into()),
        position: Some("Analyst".into()),
        is_expert: true,
    }
}

pub fn topic(id: i64, name: &str, expert_ids: &[i64]) -> Topic {
    Topic {
        id: TopicId(id),
        name: name.into(),
        expert_ids: expert_ids.iter().copied().map(UserId).collect(),
    }
}

/// One-hour workshop starting at `hour` venue time on the event day.
pub fn workshop(id: i64, hour: u32) -> Workshop {
    let start: DateTime<Utc> = event_day()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
        .and_local_timezone(calendar().offset())
        .unwrap()
        .with_timezone(&Utc);
    Workshop {
        id: WorkshopId(id),
        title: format!("Workshop {id}"),
        tag: None,
        start,
        end: start + ChronoDuration::hours(1),
    }
}

pub fn test_submission() -> TestSubmission {
    TestSubmission {
        analyst_type: "INTJ".into(),
        analyst_name: "Architect".into(),
        animal: "Owl".into(),
        description: "Plans three moves ahead".into(),
        tags: vec!["strategy".into(), "data".into()],
        ei_score: 2,
        pj_score: 4,
    }
}

pub struct BookSlotBuilder {
    inner: BookSlot,
}

impl Default for BookSlotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl BookSlotBuilder {
    pub fn new() -> Self {
        let first = cell(0);
        Self {
            inner: BookSlot {
                attendee_id: UserId(1),
                expert_id: UserId(10),
                topic_id: TopicId(1),
                start: first.start,
                end: first.end,
            },
        }
    }

    pub fn attendee_id(mut self, v: UserId) -> Self {
        self.inner.attendee_id = v;
        self
    }

    pub fn expert_id(mut self, v: UserId) -> Self {
        self.inner.expert_id = v;
        self
    }

    pub fn topic_id(mut self, v: TopicId) -> Self {
        self.inner.topic_id = v;
        self
    }

    pub fn start(mut self, v: DateTime<Utc>) -> Self {
        self.inner.start = v;
        self
    }

    pub fn end(mut self, v: DateTime<Utc>) -> Self {
        self.inner.end = v;
        self
    }

    pub fn build(self) -> BookSlot {
        self.inner
    }
}

pub struct BookSlotRequestBuilder {
    inner: BookSlotRequest,
}

impl Default for BookSlotRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl BookSlotRequestBuilder {
    pub fn new() -> Self {
        let first = cell(0);
        Self {
            inner: BookSlotRequest {
                expert_id: UserId(10),
                topic_id: TopicId(1),
                start: first.start,
                end: first.end,
            },
        }
    }

    pub fn expert_id(mut self, v: UserId) -> Self {
        self.inner.expert_id = v;
        self
    }

    pub fn topic_id(mut self, v: TopicId) -> Self {
        self.inner.topic_id = v;
        self
    }

    pub fn start(mut self, v: DateTime<Utc>) -> Self {
        self.inner.start = v;
        self
    }

    pub fn end(mut self, v: DateTime<Utc>) -> Self {
        self.inner.end = v;
        self
    }

    pub fn build(self) -> BookSlotRequest {
        self.inner
    }
}

fn seeded_directory() -> InMemoryDirectory {
    InMemoryDirectory::with_records(
        vec![attendee(1), attendee(2), expert(10), expert(11)],
        vec![topic(1, "BI", &[10]), topic(2, "Data", &[10, 11])],
    )
}

/// In-memory adapters plus the consultation handlers built on top of them.
pub struct ConsultationsBench {
    pub ledger: Arc<InMemorySlotLedger>,
    pub directory: Arc<InMemoryDirectory>,
    pub notifier: Arc<InMemoryNotifier>,
    pub calendar: EventCalendar,
}

impl Default for ConsultationsBench {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ConsultationsBench {
    pub fn new() -> Self {
        Self::assemble(InMemorySlotLedger::new(), InMemoryNotifier::new())
    }

    pub fn with_notifier(notifier: InMemoryNotifier) -> Self {
        Self::assemble(InMemorySlotLedger::new(), notifier)
    }

    pub fn with_ledger(ledger: InMemorySlotLedger) -> Self {
        Self::assemble(ledger, InMemoryNotifier::new())
    }

    fn assemble(ledger: InMemorySlotLedger, notifier: InMemoryNotifier) -> Self {
        Self {
            ledger: Arc::new(ledger),
            directory: Arc::new(seeded_directory()),
            notifier: Arc::new(notifier),
            calendar: calendar(),
        }
    }

    pub fn book_handler(&self) -> BookSlotHandler<InMemorySlotLedger, InMemoryDirectory> {
        BookSlotHandler::new(
            self.ledger.clone(),
            self.directory.clone(),
            self.notifier.clone(),
            self.calendar,
            NOTIFY_TIMEOUT,
        )
    }

    pub fn cancel_handler(&self) -> CancelBookingHandler<InMemorySlotLedger, InMemoryDirectory> {
        CancelBookingHandler::new(
            self.ledger.clone(),
            self.directory.clone(),
            self.notifier.clone(),
            self.calendar,
            NOTIFY_TIMEOUT,
        )
    }

    pub fn candidates_handler(
        &self,
    ) -> ListCandidateSlotsHandler<InMemorySlotLedger, InMemoryDirectory> {
        ListCandidateSlotsHandler::new(self.ledger.clone(), self.directory.clone(), self.calendar)
    }

    pub fn bookings_handler(&self) -> ListBookingsHandler<InMemorySlotLedger, InMemoryDirectory> {
        ListBookingsHandler::new(self.ledger.clone(), self.directory.clone(), self.calendar)
    }

    pub fn topics_handler(&self) -> ListTopicsHandler<InMemoryDirectory> {
        ListTopicsHandler::new(self.directory.clone())
    }
}

/// Application state over the seeded directory, two workshops and a cap of one.
pub fn test_state() -> AppState {
    let stores = Stores {
        directory: Arc::new(seeded_directory()),
        ledger: Arc::new(InMemorySlotLedger::new()),
        workshops: Arc::new(InMemoryWorkshopRegistrations::new(vec![
            workshop(1, 12),
            workshop(2, 15),
        ])),
        results: Arc::new(InMemoryAssessmentResults::new()),
    };
    let settings = StateSettings {
        calendar: calendar(),
        notify_timeout: NOTIFY_TIMEOUT,
        workshop_limit: 1,
    };
    AppState::build(stores, Arc::new(InMemoryNotifier::new()), settings)
}
