use crate::modules::assessments::adapters::outbound::results_in_memory::InMemoryAssessmentResults;
use crate::modules::assessments::use_cases::quiz_results::handler::QuizResultsHandler;
use crate::modules::assessments::use_cases::test_results::handler::TestResultsHandler;
use crate::modules::consultations::adapters::outbound::ledger_in_memory::InMemorySlotLedger;
use crate::modules::consultations::use_cases::book_slot::handler::BookSlotHandler;
use crate::modules::consultations::use_cases::cancel_booking::handler::CancelBookingHandler;
use crate::modules::consultations::use_cases::list_bookings::handler::ListBookingsHandler;
use crate::modules::consultations::use_cases::list_candidate_slots::handler::ListCandidateSlotsHandler;
use crate::modules::consultations::use_cases::list_topics::handler::ListTopicsHandler;
use crate::modules::directory::adapters::outbound::directory_in_memory::InMemoryDirectory;
use crate::modules::workshops::adapters::outbound::registrations_in_memory::InMemoryWorkshopRegistrations;
use crate::modules::workshops::use_cases::registrations::handler::WorkshopRegistrationsHandler;
use crate::shared::core::event_calendar::EventCalendar;
use crate::shared::infrastructure::notifier::Notifier;
use std::sync::Arc;
use std::time::Duration;

type Ledger = InMemorySlotLedger;
type Dir = InMemoryDirectory;

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<Dir>,
    pub list_topics: Arc<ListTopicsHandler<Dir>>,
    pub list_candidates: Arc<ListCandidateSlotsHandler<Ledger, Dir>>,
    pub book_slot: Arc<BookSlotHandler<Ledger, Dir>>,
    pub cancel_booking: Arc<CancelBookingHandler<Ledger, Dir>>,
    pub list_bookings: Arc<ListBookingsHandler<Ledger, Dir>>,
    pub workshops: Arc<WorkshopRegistrationsHandler<InMemoryWorkshopRegistrations>>,
    pub test_results: Arc<TestResultsHandler<InMemoryAssessmentResults>>,
    pub quiz_results: Arc<QuizResultsHandler<InMemoryAssessmentResults, Dir>>,
}

/// Knobs the composition root reads from configuration.
#[derive(Debug, Clone, Copy)]
pub struct StateSettings {
    pub calendar: EventCalendar,
    pub notify_timeout: Duration,
    pub workshop_limit: usize,
}

/// Storage adapters shared by the handlers.
pub struct Stores {
    pub directory: Arc<Dir>,
    pub ledger: Arc<Ledger>,
    pub workshops: Arc<InMemoryWorkshopRegistrations>,
    pub results: Arc<InMemoryAssessmentResults>,
}

impl AppState {
    pub fn build(stores: Stores, notifier: Arc<dyn Notifier>, settings: StateSettings) -> Self {
        let Stores {
            directory,
            ledger,
            workshops,
            results,
        } = stores;
        let StateSettings {
            calendar,
            notify_timeout,
            workshop_limit,
        } = settings;

        Self {
            list_topics: Arc::new(ListTopicsHandler::new(directory.clone())),
            list_candidates: Arc::new(ListCandidateSlotsHandler::new(
                ledger.clone(),
                directory.clone(),
                calendar,
            )),
            book_slot: Arc::new(BookSlotHandler::new(
                ledger.clone(),
                directory.clone(),
                notifier.clone(),
                calendar,
                notify_timeout,
            )),
            cancel_booking: Arc::new(CancelBookingHandler::new(
                ledger.clone(),
                directory.clone(),
                notifier,
                calendar,
                notify_timeout,
            )),
            list_bookings: Arc::new(ListBookingsHandler::new(
                ledger,
                directory.clone(),
                calendar,
            )),
            workshops: Arc::new(WorkshopRegistrationsHandler::new(workshops, workshop_limit)),
            test_results: Arc::new(TestResultsHandler::new(results.clone())),
            quiz_results: Arc::new(QuizResultsHandler::new(results, directory.clone())),
            directory,
        }
    }
}
