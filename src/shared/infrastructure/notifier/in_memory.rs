// In memory implementation of the Notifier port.
//
// Purpose
// - Support handler tests and local runs without a bot token.
//
// Responsibilities
// - Record delivered messages for inspection.
// - Simulate an unreachable or slow messaging backend.

use crate::shared::infrastructure::notifier::{NotificationFailure, Notifier};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryNotifier {
    sent: Mutex<Vec<(i64, String)>>,
    delay_ms: AtomicU64,
    is_offline: bool,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_ms(&self, delay_ms: u64) {
        self.delay_ms.store(delay_ms, Ordering::Relaxed);
    }

    pub async fn sent(&self) -> Vec<(i64, String)> {
        self.sent.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl Notifier for InMemoryNotifier {
    async fn notify(&self, chat_id: i64, text: &str) -> Result<(), NotificationFailure> {
        let delay_ms = self.delay_ms.load(Ordering::Relaxed);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        if self.is_offline {
            return Err(NotificationFailure::Transport("Notifier offline".into()));
        }
        tracing::info!(chat_id, text, "notification recorded");
        self.sent.lock().await.push((chat_id, text.to_string()));
        Ok(())
    }
}
