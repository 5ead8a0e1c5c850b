// Read access to registered users and consultation topics.
//
// The onboarding flow owns these records; this service only reads them.

use crate::modules::directory::core::user::{Topic, User};
use crate::shared::core::primitives::{TopicId, UserId};
use async_trait::async_trait;

#[async_trait]
pub trait Directory: Send + Sync {
    async fn find_user(&self, id: UserId) -> anyhow::Result<Option<User>>;
    async fn find_user_by_telegram_id(&self, telegram_id: i64) -> anyhow::Result<Option<User>>;
    async fn find_topic(&self, id: TopicId) -> anyhow::Result<Option<Topic>>;
    async fn list_topics(&self) -> anyhow::Result<Vec<Topic>>;
}
