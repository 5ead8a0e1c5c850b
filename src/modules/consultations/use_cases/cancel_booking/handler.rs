use crate::modules::consultations::adapters::outbound::intent_dispatch::dispatch_intents;
use crate::modules::consultations::adapters::outbound::ledger::SlotLedger;
use crate::modules::consultations::core::errors::BookingError;
use crate::modules::consultations::core::intents::{BookingNotice, ConsultationIntent};
use crate::modules::consultations::core::slot::Slot;
use crate::modules::directory::adapters::outbound::directory::Directory;
use crate::modules::directory::core::user::User;
use crate::shared::core::event_calendar::EventCalendar;
use crate::shared::core::primitives::SlotId;
use crate::shared::infrastructure::notifier::Notifier;
use std::sync::Arc;
use std::time::Duration;

pub struct CancelBookingHandler<TLedger, TDirectory>
where
    TLedger: SlotLedger + 'static,
    TDirectory: Directory + 'static,
{
    ledger: Arc<TLedger>,
    directory: Arc<TDirectory>,
    notifier: Arc<dyn Notifier>,
    calendar: EventCalendar,
    notify_timeout: Duration,
}

impl<TLedger, TDirectory> CancelBookingHandler<TLedger, TDirectory>
where
    TLedger: SlotLedger + 'static,
    TDirectory: Directory + 'static,
{
    pub fn new(
        ledger: Arc<TLedger>,
        directory: Arc<TDirectory>,
        notifier: Arc<dyn Notifier>,
        calendar: EventCalendar,
        notify_timeout: Duration,
    ) -> Self {
        Self {
            ledger,
            directory,
            notifier,
            calendar,
            notify_timeout,
        }
    }

    pub async fn handle(&self, attendee: &User, slot_id: SlotId) -> Result<(), BookingError> {
        let slot = self.ledger.cancel(attendee.id, slot_id).await?;
        tracing::info!(
            slot_id = %slot.id,
            expert_id = %slot.expert_id,
            attendee_id = %attendee.id,
            "consultation cancelled"
        );

        match self.cancellation_notice(attendee, &slot).await {
            Ok(Some(notice)) => {
                dispatch_intents(
                    &*self.notifier,
                    self.notify_timeout,
                    &self.calendar,
                    vec![ConsultationIntent::NotifyExpertOfCancellation(notice)],
                )
                .await
            }
            Ok(None) => tracing::warn!(slot_id = %slot.id, "expert of cancelled slot is gone"),
            Err(error) => {
                tracing::warn!(slot_id = %slot.id, %error, "cancellation notice skipped")
            }
        }
        Ok(())
    }

    async fn cancellation_notice(
        &self,
        attendee: &User,
        slot: &Slot,
    ) -> anyhow::Result<Option<BookingNotice>> {
        let Some(expert) = self.directory.find_user(slot.expert_id).await? else {
            return Ok(None);
        };
        let topic_name = self
            .directory
            .find_topic(slot.topic_id)
            .await?
            .map(|t| t.name)
            .unwrap_or_else(|| "-".into());
        Ok(Some(BookingNotice {
            expert_chat_id: expert.telegram_id,
            attendee_name: attendee.full_name(),
            attendee_handle: attendee.handle(),
            topic_name,
            start: slot.start,
            end: slot.end,
        }))
    }
}
