use crate::modules::consultations::adapters::outbound::ledger::SlotLedger;
use crate::modules::consultations::core::errors::BookingError;
use crate::modules::consultations::core::views::CandidateView;
use crate::modules::consultations::use_cases::list_candidate_slots::generate::generate_candidates;
use crate::modules::consultations::use_cases::list_topics::handler::experts_of;
use crate::modules::directory::adapters::outbound::directory::Directory;
use crate::shared::core::event_calendar::EventCalendar;
use crate::shared::core::primitives::{TopicId, UserId};
use std::sync::Arc;

pub struct ListCandidateSlotsHandler<TLedger, TDirectory>
where
    TLedger: SlotLedger + 'static,
    TDirectory: Directory + 'static,
{
    ledger: Arc<TLedger>,
    directory: Arc<TDirectory>,
    calendar: EventCalendar,
}

impl<TLedger, TDirectory> ListCandidateSlotsHandler<TLedger, TDirectory>
where
    TLedger: SlotLedger + 'static,
    TDirectory: Directory + 'static,
{
    pub fn new(ledger: Arc<TLedger>, directory: Arc<TDirectory>, calendar: EventCalendar) -> Self {
        Self {
            ledger,
            directory,
            calendar,
        }
    }

    /// Candidates for the event day. An unknown topic yields an empty list.
    pub async fn handle(&self, topic_id: TopicId) -> Result<Vec<CandidateView>, BookingError> {
        let Some(topic) = self.directory.find_topic(topic_id).await? else {
            return Ok(Vec::new());
        };
        let experts = experts_of(&*self.directory, &topic).await?;
        let expert_ids: Vec<UserId> = experts.iter().map(|e| e.id).collect();
        let booked = self.ledger.booked_cells(&expert_ids).await?;
        let cells = self.calendar.cells(self.calendar.today());

        let candidates = generate_candidates(&topic, &experts, &cells, &booked, &self.calendar);
        tracing::debug!(
            topic_id = %topic.id,
            experts = experts.len(),
            candidates = candidates.len(),
            "candidate slots computed"
        );
        Ok(candidates)
    }
}
