// In memory implementation of the Directory port.
//
// Purpose
// - Serve users and topics loaded from the seed file, and back handler tests.

use crate::modules::directory::adapters::outbound::directory::Directory;
use crate::modules::directory::core::user::{Topic, User};
use crate::shared::core::primitives::{TopicId, UserId};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryDirectory {
    users: RwLock<BTreeMap<UserId, User>>,
    topics: RwLock<BTreeMap<TopicId, Topic>>,
    is_offline: bool,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(users: Vec<User>, topics: Vec<Topic>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().map(|u| (u.id, u)).collect()),
            topics: RwLock::new(topics.into_iter().map(|t| (t.id, t)).collect()),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn upsert_topic(&self, topic: Topic) {
        self.topics.write().await.insert(topic.id, topic);
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Directory offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl Directory for InMemoryDirectory {
    async fn find_user(&self, id: UserId) -> anyhow::Result<Option<User>> {
        self.ensure_online()?;
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_user_by_telegram_id(&self, telegram_id: i64) -> anyhow::Result<Option<User>> {
        self.ensure_online()?;
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.telegram_id == telegram_id)
            .cloned())
    }

    async fn find_topic(&self, id: TopicId) -> anyhow::Result<Option<Topic>> {
        self.ensure_online()?;
        Ok(self.topics.read().await.get(&id).cloned())
    }

    async fn list_topics(&self) -> anyhow::Result<Vec<Topic>> {
        self.ensure_online()?;
        Ok(self.topics.read().await.values().cloned().collect())
    }
}
