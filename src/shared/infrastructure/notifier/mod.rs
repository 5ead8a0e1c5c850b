use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

pub mod in_memory;
pub mod telegram;

#[derive(Debug, Error)]
pub enum NotificationFailure {
    #[error("delivery timed out after {0:?}")]
    Timeout(Duration),

    #[error("recipient rejected: {0}")]
    Rejected(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Outbound chat message delivery to a single recipient.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, chat_id: i64, text: &str) -> Result<(), NotificationFailure>;
}

/// Attempts one delivery bounded by `timeout`. Failures are logged and dropped.
pub async fn deliver_best_effort(
    notifier: &dyn Notifier,
    timeout: Duration,
    chat_id: i64,
    text: &str,
) {
    let outcome = match tokio::time::timeout(timeout, notifier.notify(chat_id, text)).await {
        Ok(result) => result,
        Err(_) => Err(NotificationFailure::Timeout(timeout)),
    };
    match outcome {
        Ok(()) => tracing::debug!(chat_id, "notification delivered"),
        Err(error) => tracing::warn!(chat_id, %error, "notification dropped"),
    }
}

#[cfg(test)]
mod deliver_best_effort_tests {
    use super::in_memory::InMemoryNotifier;
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_deliver_the_message() {
        let notifier = InMemoryNotifier::new();
        deliver_best_effort(&notifier, Duration::from_millis(100), 7, "hello").await;
        let sent = notifier.sent().await;
        assert_eq!(sent, vec![(7, "hello".to_string())]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_swallow_delivery_errors() {
        let mut notifier = InMemoryNotifier::new();
        notifier.toggle_offline();
        deliver_best_effort(&notifier, Duration::from_millis(100), 7, "hello").await;
        assert!(notifier.sent().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_give_up_after_the_timeout() {
        let notifier = InMemoryNotifier::new();
        notifier.set_delay_ms(200);
        let started = std::time::Instant::now();
        deliver_best_effort(&notifier, Duration::from_millis(20), 7, "hello").await;
        assert!(started.elapsed() < Duration::from_millis(150));
        assert!(notifier.sent().await.is_empty());
    }
}
