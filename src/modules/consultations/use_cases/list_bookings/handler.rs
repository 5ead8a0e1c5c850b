// Read-only projections over the ledger: an attendee's bookings and an expert's schedule.

use crate::modules::consultations::adapters::outbound::ledger::SlotLedger;
use crate::modules::consultations::core::errors::BookingError;
use crate::modules::consultations::core::slot::Slot;
use crate::modules::consultations::core::views::BookingView;
use crate::modules::directory::adapters::outbound::directory::Directory;
use crate::modules::directory::core::user::User;
use crate::modules::directory::use_cases::resolve_caller::handler::require_expert;
use crate::shared::core::event_calendar::EventCalendar;
use std::sync::Arc;

pub struct ListBookingsHandler<TLedger, TDirectory>
where
    TLedger: SlotLedger + 'static,
    TDirectory: Directory + 'static,
{
    ledger: Arc<TLedger>,
    directory: Arc<TDirectory>,
    calendar: EventCalendar,
}

impl<TLedger, TDirectory> ListBookingsHandler<TLedger, TDirectory>
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

    pub async fn my_bookings(&self, attendee: &User) -> Result<Vec<BookingView>, BookingError> {
        let slots = self.ledger.list_by_attendee(attendee.id).await?;
        let mut views = Vec::with_capacity(slots.len());
        for slot in &slots {
            let expert = self.directory.find_user(slot.expert_id).await?;
            views.push(self.view(slot, expert.as_ref(), Some(attendee)).await?);
        }
        Ok(views)
    }

    pub async fn expert_schedule(&self, expert: &User) -> Result<Vec<BookingView>, BookingError> {
        require_expert(expert)?;
        let slots = self.ledger.list_by_expert(expert.id).await?;
        let mut views = Vec::with_capacity(slots.len());
        for slot in &slots {
            let attendee = match slot.booked_by {
                Some(attendee_id) => self.directory.find_user(attendee_id).await?,
                None => None,
            };
            views.push(self.view(slot, Some(expert), attendee.as_ref()).await?);
        }
        Ok(views)
    }

    async fn view(
        &self,
        slot: &Slot,
        expert: Option<&User>,
        attendee: Option<&User>,
    ) -> Result<BookingView, BookingError> {
        let topic = self.directory.find_topic(slot.topic_id).await?;
        Ok(BookingView::new(
            slot,
            expert,
            topic.as_ref(),
            attendee,
            &self.calendar,
        ))
    }
}
