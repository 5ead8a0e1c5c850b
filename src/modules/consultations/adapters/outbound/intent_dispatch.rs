use crate::modules::consultations::core::intents::ConsultationIntent;
use crate::shared::core::event_calendar::EventCalendar;
use crate::shared::infrastructure::notifier::{Notifier, deliver_best_effort};
use std::time::Duration;

/// Deliver each committed intent to its expert. Runs after the ledger write and
/// cannot fail: every delivery is bounded by `timeout` and its errors are dropped.
pub async fn dispatch_intents(
    notifier: &dyn Notifier,
    timeout: Duration,
    calendar: &EventCalendar,
    intents: Vec<ConsultationIntent>,
) {
    for intent in intents {
        let text = intent.render(calendar);
        deliver_best_effort(notifier, timeout, intent.recipient(), &text).await;
    }
}
