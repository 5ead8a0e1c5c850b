use crate::modules::consultations::adapters::outbound::intent_dispatch::dispatch_intents;
use crate::modules::consultations::adapters::outbound::ledger::SlotLedger;
use crate::modules::consultations::core::errors::BookingError;
use crate::modules::consultations::core::intents::{BookingNotice, ConsultationIntent};
use crate::modules::consultations::use_cases::book_slot::command::{BookSlot, BookSlotRequest};
use crate::modules::directory::adapters::outbound::directory::Directory;
use crate::modules::directory::core::user::User;
use crate::shared::core::event_calendar::EventCalendar;
use crate::shared::core::primitives::SlotId;
use crate::shared::infrastructure::notifier::Notifier;
use std::sync::Arc;
use std::time::Duration;

pub struct BookSlotHandler<TLedger, TDirectory>
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

impl<TLedger, TDirectory> BookSlotHandler<TLedger, TDirectory>
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

    pub async fn handle(
        &self,
        attendee: &User,
        request: BookSlotRequest,
    ) -> Result<SlotId, BookingError> {
        let expert = self
            .directory
            .find_user(request.expert_id)
            .await?
            .filter(|u| u.is_expert)
            .ok_or(BookingError::NotFound)?;
        let topic = self
            .directory
            .find_topic(request.topic_id)
            .await?
            .filter(|t| t.is_served_by(expert.id))
            .ok_or(BookingError::NotFound)?;
        if self
            .calendar
            .cell_at(self.calendar.today(), request.start, request.end)
            .is_none()
        {
            return Err(BookingError::Validation(
                "start and end must match a consultation slot of the event day".into(),
            ));
        }

        let slot = self.ledger.book(&BookSlot::new(attendee.id, request)).await?;
        tracing::info!(
            slot_id = %slot.id,
            expert_id = %expert.id,
            attendee_id = %attendee.id,
            topic_id = %topic.id,
            start = %slot.start,
            "consultation booked"
        );

        let notice = BookingNotice {
            expert_chat_id: expert.telegram_id,
            attendee_name: attendee.full_name(),
            attendee_handle: attendee.handle(),
            topic_name: topic.name,
            start: slot.start,
            end: slot.end,
        };
        dispatch_intents(
            &*self.notifier,
            self.notify_timeout,
            &self.calendar,
            vec![ConsultationIntent::NotifyExpertOfBooking(notice)],
        )
        .await;

        Ok(slot.id)
    }
}

#[cfg(test)]
mod book_slot_handler_tests {
    use super::*;
    use crate::modules::consultations::adapters::outbound::ledger_in_memory::InMemorySlotLedger;
    use crate::shared::core::primitives::{TopicId, UserId};
    use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
    use crate::test_support::fixtures::{
        BookSlotRequestBuilder, ConsultationsBench, attendee, cell, expert,
    };
    use chrono::Duration as ChronoDuration;
    use rstest::{fixture, rstest};
    use tokio::join;

    #[fixture]
    fn bench() -> ConsultationsBench {
        ConsultationsBench::new()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_book_and_notify_the_expert(bench: ConsultationsBench) {
        let slot_id = bench
            .book_handler()
            .handle(&attendee(1), BookSlotRequestBuilder::new().build())
            .await
            .expect("booking failed");

        let booked = bench.ledger.list_by_attendee(UserId(1)).await.unwrap();
        assert_eq!(booked.len(), 1);
        assert_eq!(booked[0].id, slot_id);

        let sent = bench.notifier.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, expert(10).telegram_id);
        assert!(sent[0].1.starts_with("New consultation booking"));
        assert!(sent[0].1.contains("Topic: BI"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_an_unknown_or_non_expert_expert(bench: ConsultationsBench) {
        let handler = bench.book_handler();
        for expert_id in [UserId(404), UserId(2)] {
            let result = handler
                .handle(
                    &attendee(1),
                    BookSlotRequestBuilder::new().expert_id(expert_id).build(),
                )
                .await;
            assert_eq!(result, Err(BookingError::NotFound));
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_topic_the_expert_does_not_serve(bench: ConsultationsBench) {
        let result = bench
            .book_handler()
            .handle(
                &attendee(1),
                BookSlotRequestBuilder::new()
                    .expert_id(UserId(11))
                    .topic_id(TopicId(1))
                    .build(),
            )
            .await;
        assert_eq!(result, Err(BookingError::NotFound));
        let result = bench
            .book_handler()
            .handle(
                &attendee(1),
                BookSlotRequestBuilder::new().topic_id(TopicId(404)).build(),
            )
            .await;
        assert_eq!(result, Err(BookingError::NotFound));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_times_off_the_grid(bench: ConsultationsBench) {
        let first = cell(0);
        let result = bench
            .book_handler()
            .handle(
                &attendee(1),
                BookSlotRequestBuilder::new()
                    .start(first.start + ChronoDuration::minutes(10))
                    .end(first.end + ChronoDuration::minutes(10))
                    .build(),
            )
            .await;
        assert!(matches!(result, Err(BookingError::Validation(_))));
        assert_eq!(bench.ledger.row_count().await, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_second_booking_on_the_same_topic(bench: ConsultationsBench) {
        let handler = bench.book_handler();
        handler
            .handle(&attendee(1), BookSlotRequestBuilder::new().build())
            .await
            .unwrap();
        let later = cell(3);
        let result = handler
            .handle(
                &attendee(1),
                BookSlotRequestBuilder::new()
                    .start(later.start)
                    .end(later.end)
                    .build(),
            )
            .await;
        assert_eq!(result, Err(BookingError::AlreadyBooked));
        assert_eq!(bench.notifier.sent().await.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_let_one_of_two_concurrent_attendees_win(bench: ConsultationsBench) {
        bench.ledger.set_delay_book_ms(10);
        let handler = bench.book_handler();
        let (first, second) = (attendee(1), attendee(2));
        let (result1, result2) = join!(
            handler.handle(&first, BookSlotRequestBuilder::new().build()),
            handler.handle(&second, BookSlotRequestBuilder::new().build())
        );
        assert!(result1.is_ok() ^ result2.is_ok());
        assert_eq!(
            result1.err().or(result2.err()),
            Some(BookingError::SlotTaken)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_the_booking_when_the_notifier_fails() {
        let mut notifier = InMemoryNotifier::new();
        notifier.toggle_offline();
        let bench = ConsultationsBench::with_notifier(notifier);
        let result = bench
            .book_handler()
            .handle(&attendee(1), BookSlotRequestBuilder::new().build())
            .await;
        assert!(result.is_ok());
        assert_eq!(bench.ledger.row_count().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_wait_on_a_slow_notifier_beyond_the_timeout() {
        let notifier = InMemoryNotifier::new();
        notifier.set_delay_ms(500);
        let bench = ConsultationsBench::with_notifier(notifier);
        let started = std::time::Instant::now();
        let result = bench
            .book_handler()
            .handle(&attendee(1), BookSlotRequestBuilder::new().build())
            .await;
        assert!(result.is_ok());
        assert!(started.elapsed() < std::time::Duration::from_millis(400));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_surface_ledger_failures() {
        let mut ledger = InMemorySlotLedger::new();
        ledger.toggle_offline();
        let bench = ConsultationsBench::with_ledger(ledger);
        let result = bench
            .book_handler()
            .handle(&attendee(1), BookSlotRequestBuilder::new().build())
            .await;
        assert!(matches!(result, Err(BookingError::Backend(_))));
        assert!(bench.notifier.sent().await.is_empty());
    }
}
